//! Resolved node implementations and the instances built from them.

use crate::node::{NodeDefinition, NodeMetadata};
use crate::provider_node::ProviderBackedNode;
use nodereg_core::{InstanceName, NodeTypeName, Result};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// What a descriptor resolves to.
#[derive(Clone)]
pub enum NodeImplementation {
    /// Compiled-in kind behind the object-safe adapter
    Builtin(Arc<dyn NodeDefinition>),
    /// Uniform shape shared by every provider-discovered tool
    ProviderBacked(Arc<ProviderBackedNode>),
}

impl NodeImplementation {
    pub fn metadata(&self) -> &NodeMetadata {
        match self {
            NodeImplementation::Builtin(definition) => definition.metadata(),
            NodeImplementation::ProviderBacked(node) => node.metadata(),
        }
    }

    pub fn is_provider_backed(&self) -> bool {
        matches!(self, NodeImplementation::ProviderBacked(_))
    }

    /// Validate a raw config payload against the config definition, returning it normalized.
    pub fn validate_config(&self, type_name: &str, raw: Value) -> Result<Value> {
        match self {
            NodeImplementation::Builtin(definition) => definition.validate_config(type_name, raw),
            NodeImplementation::ProviderBacked(node) => node.validate_config(type_name, raw),
        }
    }

    pub fn instantiate(
        &self,
        name: InstanceName,
        type_name: NodeTypeName,
        raw_config: Value,
    ) -> Result<Node> {
        let config = self.validate_config(type_name.as_str(), raw_config)?;
        Ok(Node {
            name,
            type_name,
            implementation: self.clone(),
            config,
        })
    }

    pub async fn run(&self, config: &Value, input: Value) -> Result<Value> {
        match self {
            NodeImplementation::Builtin(definition) => definition.run(config, input).await,
            NodeImplementation::ProviderBacked(node) => node.run(config, input).await,
        }
    }
}

impl fmt::Debug for NodeImplementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeImplementation::Builtin(definition) => f
                .debug_tuple("Builtin")
                .field(&definition.metadata().class_name)
                .finish(),
            NodeImplementation::ProviderBacked(node) => {
                f.debug_tuple("ProviderBacked").field(node).finish()
            }
        }
    }
}

/// A configured node instance, ready to be placed in a workflow graph.
#[derive(Debug, Clone)]
pub struct Node {
    name: InstanceName,
    type_name: NodeTypeName,
    implementation: NodeImplementation,
    config: Value,
}

impl Node {
    pub fn name(&self) -> &InstanceName {
        &self.name
    }

    pub fn type_name(&self) -> &NodeTypeName {
        &self.type_name
    }

    pub fn implementation(&self) -> &NodeImplementation {
        &self.implementation
    }

    /// Normalized configuration
    pub fn config(&self) -> &Value {
        &self.config
    }

    pub async fn run(&self, input: Value) -> Result<Value> {
        tracing::debug!(node = %self.name, node_type = %self.type_name, "Running node");
        self.implementation.run(&self.config, input).await
    }
}
