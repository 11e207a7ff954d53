//! Repository over the tools of one provider, discovered lazily.

use crate::provider::ToolProvider;
use crate::synthesis::describe_resource;
use async_trait::async_trait;
use nodereg_core::{NodeGroup, NodeRegistryError, Result};
use nodereg_nodes::NodeDescriptor;
use nodereg_repository::{GroupedDescriptors, NodeRepository};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::OnceCell;
use nodereg_observability::spans;
use tracing::{debug, info, warn, Instrument};

/// How `is_valid_node_type` treats names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderValidation {
    /// Every name is reported valid without contacting the provider
    #[default]
    Permissive,
    /// Only names present in the discovered catalog are valid
    Strict,
}

impl FromStr for ProviderValidation {
    type Err = NodeRegistryError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(NodeRegistryError::Configuration(format!(
                "unknown provider validation policy '{}' (expected 'permissive' or 'strict')",
                other
            ))),
        }
    }
}

impl fmt::Display for ProviderValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => f.write_str("permissive"),
            Self::Strict => f.write_str("strict"),
        }
    }
}

pub struct ProviderNodeRepository {
    provider: Arc<dyn ToolProvider>,
    validation: ProviderValidation,
    catalog: OnceCell<GroupedDescriptors>,
}

impl ProviderNodeRepository {
    pub fn new(provider: Arc<dyn ToolProvider>) -> Self {
        Self::with_validation(provider, ProviderValidation::default())
    }

    pub fn with_validation(provider: Arc<dyn ToolProvider>, validation: ProviderValidation) -> Self {
        Self {
            provider,
            validation,
            catalog: OnceCell::new(),
        }
    }

    pub fn validation(&self) -> ProviderValidation {
        self.validation
    }

    /// Discovered catalog; concurrent first callers share one discovery call.
    /// A failed discovery leaves the cache empty and fails the caller.
    async fn catalog(&self) -> Result<&GroupedDescriptors> {
        self.catalog
            .get_or_try_init(|| self.discover().instrument(spans::discover_provider()))
            .await
    }

    async fn discover(&self) -> Result<GroupedDescriptors> {
        let resources = self.provider.list_resources().await.map_err(|source| {
            warn!(error = %source, "Tool provider discovery failed");
            NodeRegistryError::ProviderDiscovery { source }
        })?;

        let mut grouped = GroupedDescriptors::new();
        for resource in resources {
            let (group, descriptor) = describe_resource(resource);
            debug!(group = %group, node_type = %descriptor.type_name, "Synthesized provider node type");
            grouped.entry(group).or_default().push(descriptor);
        }
        info!(
            groups = grouped.len(),
            node_types = grouped.values().map(Vec::len).sum::<usize>(),
            "Discovered provider node types"
        );
        Ok(grouped)
    }
}

#[async_trait]
impl NodeRepository for ProviderNodeRepository {
    async fn get_node_groups(&self) -> Result<Vec<NodeGroup>> {
        Ok(self.catalog().await?.keys().cloned().collect())
    }

    /// Groups the provider never reported list no node types.
    async fn get_node_types_for_group(&self, group: &NodeGroup) -> Result<Vec<NodeDescriptor>> {
        Ok(self
            .catalog()
            .await?
            .get(group)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_all_node_types_by_group(&self) -> Result<GroupedDescriptors> {
        Ok(self.catalog().await?.clone())
    }

    async fn get_node_type(&self, name: &str) -> Result<NodeDescriptor> {
        self.catalog()
            .await?
            .values()
            .flatten()
            .find(|descriptor| descriptor.type_name == name)
            .cloned()
            .ok_or_else(|| NodeRegistryError::NodeTypeNotFound(name.to_string()))
    }

    async fn is_valid_node_type(&self, name: &str) -> Result<bool> {
        match self.validation {
            ProviderValidation::Permissive => Ok(true),
            ProviderValidation::Strict => Ok(self
                .catalog()
                .await?
                .values()
                .flatten()
                .any(|descriptor| descriptor.type_name == name)),
        }
    }
}
