//! Instantiation facade over a repository.

use indexmap::IndexMap;
use nodereg_core::{InstanceName, NodeRegistryError, NodeTypeName, Result};
use nodereg_nodes::{BuiltinModelCatalog, ModelCatalog, Node, NodeSchema};
use nodereg_observability::spans;
use nodereg_repository::{
    CompositeNodeRepository, GroupedDescriptors, NodeRepository, StaticNodeRepository,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn, Instrument};

/// Group name -> schemas of its node types, in listing order.
pub type SchemasByGroup = IndexMap<String, Vec<NodeSchema>>;

#[derive(Clone)]
pub struct NodeFactory {
    repository: Arc<dyn NodeRepository>,
    models: Arc<dyn ModelCatalog>,
}

impl NodeFactory {
    pub fn new(repository: Arc<dyn NodeRepository>) -> Self {
        Self {
            repository,
            models: Arc::new(BuiltinModelCatalog),
        }
    }

    pub fn with_model_catalog(mut self, models: Arc<dyn ModelCatalog>) -> Self {
        self.models = models;
        self
    }

    /// Factory over the compiled-in catalog only
    pub fn builtin() -> Self {
        Self::new(Arc::new(StaticNodeRepository::new()))
    }

    /// Factory over a composite of `members`; fails when two members claim one group.
    pub async fn from_repositories(members: Vec<Arc<dyn NodeRepository>>) -> Result<Self> {
        let composite = CompositeNodeRepository::new(members).await?;
        Ok(Self::new(Arc::new(composite)))
    }

    /// Session registry: the compiled-in catalog followed by the tools of `provider`.
    #[cfg(feature = "provider")]
    pub async fn for_session(
        provider: Arc<dyn nodereg_provider::ToolProvider>,
        options: crate::RegistryOptions,
    ) -> Result<Self> {
        let provider_repo = nodereg_provider::ProviderNodeRepository::with_validation(
            provider,
            options.provider_validation,
        );
        let members: Vec<Arc<dyn NodeRepository>> = vec![
            Arc::new(StaticNodeRepository::new()),
            Arc::new(provider_repo),
        ];
        Self::from_repositories(members).await
    }

    pub fn repository(&self) -> &Arc<dyn NodeRepository> {
        &self.repository
    }

    pub async fn get_all_node_types_by_group(&self) -> Result<GroupedDescriptors> {
        self.repository.get_all_node_types_by_group().await
    }

    /// Schema for every listed node type; fails as a whole if any descriptor fails to resolve.
    pub async fn list_node_schemas(&self) -> Result<SchemasByGroup> {
        self.collect_schemas()
            .instrument(spans::list_node_types())
            .await
    }

    async fn collect_schemas(&self) -> Result<SchemasByGroup> {
        let grouped = self.repository.get_all_node_types_by_group().await?;
        let mut schemas = SchemasByGroup::with_capacity(grouped.len());
        for (group, descriptors) in grouped {
            let group_schemas = descriptors
                .iter()
                .map(|descriptor| NodeSchema::describe(descriptor, self.models.as_ref()))
                .collect::<Result<Vec<_>>>()?;
            debug!(group = %group, node_types = group_schemas.len(), "Listed node group");
            schemas.insert(group.name().to_string(), group_schemas);
        }
        Ok(schemas)
    }

    pub async fn is_valid_node_type(&self, name: &str) -> Result<bool> {
        self.repository.is_valid_node_type(name).await
    }

    /// Validate the type name, resolve its implementation and build a node from `raw_config`.
    pub async fn create_node(
        &self,
        instance_name: impl Into<InstanceName>,
        type_name: &str,
        raw_config: Value,
    ) -> Result<Node> {
        let instance_name = instance_name.into();
        let span = spans::create_node(instance_name.as_str(), type_name);
        self.build_node(instance_name, type_name, raw_config)
            .instrument(span)
            .await
    }

    async fn build_node(
        &self,
        instance_name: InstanceName,
        type_name: &str,
        raw_config: Value,
    ) -> Result<Node> {
        if !self.repository.is_valid_node_type(type_name).await? {
            warn!(node_type = type_name, "Rejected unknown node type");
            return Err(NodeRegistryError::InvalidNodeType(type_name.to_string()));
        }
        let descriptor = self.repository.get_node_type(type_name).await?;
        let implementation = descriptor.resolve()?;
        let node = implementation
            .instantiate(instance_name, NodeTypeName::new(type_name), raw_config)
            .inspect_err(|err| warn!(node_type = type_name, error = %err, "Rejected node configuration"))?;
        info!(
            instance = %node.name(),
            node_type = type_name,
            implementation = %implementation.metadata().implementation_name,
            "Created node"
        );
        Ok(node)
    }
}
