//! Repository over the compiled-in catalog.

use crate::repository::{GroupedDescriptors, NodeRepository};
use async_trait::async_trait;
use nodereg_core::{NodeGroup, NodeRegistryError, Result};
use nodereg_nodes::{NodeCatalog, NodeDescriptor};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct StaticNodeRepository {
    catalog: Arc<NodeCatalog>,
}

impl StaticNodeRepository {
    /// Repository over the builtin node kinds
    pub fn new() -> Self {
        Self::from_catalog(NodeCatalog::builtin())
    }

    pub fn from_catalog(catalog: NodeCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    pub fn catalog(&self) -> &NodeCatalog {
        &self.catalog
    }
}

impl Default for StaticNodeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NodeRepository for StaticNodeRepository {
    async fn get_node_groups(&self) -> Result<Vec<NodeGroup>> {
        Ok(self.catalog.groups().keys().cloned().collect())
    }

    async fn get_node_types_for_group(&self, group: &NodeGroup) -> Result<Vec<NodeDescriptor>> {
        self.catalog
            .groups()
            .get(group)
            .cloned()
            .ok_or_else(|| NodeRegistryError::UnknownGroup(group.to_string()))
    }

    async fn get_all_node_types_by_group(&self) -> Result<GroupedDescriptors> {
        Ok(self.catalog.groups().clone())
    }

    async fn get_node_type(&self, name: &str) -> Result<NodeDescriptor> {
        // deprecated names stay instantiable for existing graphs
        let found = self
            .catalog
            .find_listed(name)
            .or_else(|| self.catalog.find_deprecated(name));
        debug!(node_type = name, found = found.is_some(), "Static node type lookup");
        found
            .cloned()
            .ok_or_else(|| NodeRegistryError::NodeTypeNotFound(name.to_string()))
    }

    async fn is_valid_node_type(&self, name: &str) -> Result<bool> {
        Ok(self.catalog.find_listed(name).is_some() || self.catalog.find_deprecated(name).is_some())
    }
}
