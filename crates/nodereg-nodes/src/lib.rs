//! Node implementation contract, descriptors and the compiled-in catalog.

pub mod builtin;
pub mod descriptor;
pub mod implementation;
pub mod model_schema;
pub mod models;
pub mod node;
pub mod node_catalog;
pub mod provider_node;
pub mod resource;
pub mod schema;
pub mod validation;
pub mod visual_tag;

pub use inventory;

pub use builtin::DynamicPayload;
pub use descriptor::{DynamicResolver, NodeDescriptor, StaticLocator};
pub use implementation::{Node, NodeImplementation};
pub use model_schema::{empty_schema, json_schema_value, optional_schema, NodeModel};
pub use models::{BuiltinModelCatalog, ModelCatalog, ModelConstraints};
pub use node::{ConfigModel, NodeDefinition, NodeKind, NodeKindWrapper, NodeMetadata};
pub use node_catalog::{CatalogEntry, NodeCatalog, NodeKindRegistration};
pub use provider_node::{
    ProviderBackedNode, ProviderNodeConfig, ProviderNodeInput, ProviderNodeOutput, ProviderSchemas,
    TOOL_ARGS_KEY,
};
pub use resource::{ToolCallResult, ToolContent, ToolResource};
pub use schema::{AuxiliarySchema, NodeSchema};
pub use visual_tag::VisualTag;
