//! Node type registry and factory
//!
//! Discovers node types from the compiled-in catalog and from external tool
//! providers, derives the schemas a workflow editor renders, and builds
//! validated node instances from serialized configuration.

pub mod factory;
pub mod options;

pub use factory::{NodeFactory, SchemasByGroup};
pub use options::RegistryOptions;

pub use nodereg_core::{
    ConfigViolation, InstanceName, NodeGroup, NodeRegistryError, NodeTypeName, Result,
};
pub use nodereg_nodes::{
    BuiltinModelCatalog, ModelCatalog, Node, NodeCatalog, NodeDescriptor, NodeImplementation,
    NodeKind, NodeSchema, ToolCallResult, ToolContent, ToolResource,
};
pub use nodereg_repository::{
    CompositeNodeRepository, GroupedDescriptors, NodeRepository, StaticNodeRepository,
};

pub use nodereg_nodes as nodes;
pub use nodereg_observability as observability;
pub use nodereg_repository as repository;

#[cfg(feature = "provider")]
pub use nodereg_provider as provider;
#[cfg(feature = "provider")]
pub use nodereg_provider::{
    ManifestToolProvider, ProviderNodeRepository, ProviderValidation, ToolProvider,
};
