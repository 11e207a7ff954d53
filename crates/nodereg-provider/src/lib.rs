//! Provider-backed node types
//!
//! Tools surfaced by an external [`ToolProvider`] become node types at run
//! time: each tool gets a derived type name, a group named after its remote
//! source, and a descriptor whose resolver builds a [`ProviderBackedNode`].
//!
//! [`ProviderBackedNode`]: nodereg_nodes::ProviderBackedNode

pub mod manifest;
pub mod naming;
pub mod provider;
pub mod repository;
pub mod synthesis;

pub use manifest::{ManifestToolProvider, ProviderManifest};
pub use provider::ToolProvider;
pub use repository::{ProviderNodeRepository, ProviderValidation};
