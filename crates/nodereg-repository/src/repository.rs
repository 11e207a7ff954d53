use async_trait::async_trait;
use indexmap::IndexMap;
use nodereg_core::{NodeGroup, Result};
use nodereg_nodes::NodeDescriptor;

/// Group -> descriptors, in listing order.
pub type GroupedDescriptors = IndexMap<NodeGroup, Vec<NodeDescriptor>>;

/// Capability surface shared by every repository variant.
#[async_trait]
pub trait NodeRepository: Send + Sync {
    /// Groups this repository owns, in listing order
    async fn get_node_groups(&self) -> Result<Vec<NodeGroup>>;

    async fn get_node_types_for_group(&self, group: &NodeGroup) -> Result<Vec<NodeDescriptor>>;

    async fn get_all_node_types_by_group(&self) -> Result<GroupedDescriptors>;

    /// Descriptor named `name`; fails with `NodeTypeNotFound` when absent
    async fn get_node_type(&self, name: &str) -> Result<NodeDescriptor>;

    async fn is_valid_node_type(&self, name: &str) -> Result<bool>;
}
