//! Uniform node shape for every provider-discovered tool.
//!
//! Instead of one node type per tool, each tool resource becomes a
//! [`ProviderBackedNode`] parameterized by its schema triple and a reference
//! back to the resource it calls at run time.

use crate::node::{ConfigModel, NodeMetadata};
use crate::resource::{ToolContent, ToolResource};
use crate::validation::parse_config;
use nodereg_core::{NodeRegistryError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Input key holding the tool call arguments.
pub const TOOL_ARGS_KEY: &str = "input_node";

/// Base config shape shared by provider-backed nodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProviderNodeConfig {
    #[serde(default)]
    pub has_fixed_output: bool,
}

/// Base input shape shared by provider-backed nodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProviderNodeInput {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Base output shape shared by provider-backed nodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProviderNodeOutput {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Config/input/output schemas synthesized for one tool
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSchemas {
    pub config: Value,
    pub input: Value,
    pub output: Value,
}

pub struct ProviderBackedNode {
    metadata: NodeMetadata,
    resource: Arc<dyn ToolResource>,
}

impl ProviderBackedNode {
    pub fn new(
        implementation_name: impl Into<String>,
        class_name: impl Into<String>,
        schemas: ProviderSchemas,
        resource: Arc<dyn ToolResource>,
    ) -> Self {
        let metadata = NodeMetadata {
            implementation_name: implementation_name.into(),
            class_name: class_name.into(),
            display_name: Some(resource.display_name().to_string()),
            description: Some(resource.description().to_string()),
            logo: None,
            category: None,
            config_model: Some(ConfigModel {
                schema: schemas.config,
                has_fixed_output: false,
            }),
            input_model: Some(schemas.input),
            output_model: Some(schemas.output),
        };
        Self { metadata, resource }
    }

    pub fn metadata(&self) -> &NodeMetadata {
        &self.metadata
    }

    pub fn resource(&self) -> &Arc<dyn ToolResource> {
        &self.resource
    }

    pub fn validate_config(&self, type_name: &str, raw: Value) -> Result<Value> {
        let schema = self.metadata.config_model.as_ref().map(|model| &model.schema);
        let config: ProviderNodeConfig = parse_config(type_name, schema, raw)?;
        Ok(serde_json::to_value(config)?)
    }

    /// Call the backing tool with the arguments found under [`TOOL_ARGS_KEY`].
    pub async fn run(&self, _config: &Value, input: Value) -> Result<Value> {
        let args = input
            .get(TOOL_ARGS_KEY)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        tracing::info!(
            tool = self.resource.tool_name(),
            source = self.resource.remote_source(),
            "Calling provider tool"
        );
        let result = self.resource.call(args).await?;
        if result.is_error {
            return Err(NodeRegistryError::ToolCall(format!(
                "tool '{}' returned an error: {}",
                self.resource.tool_name(),
                result.summary()
            )));
        }
        match result.content.first() {
            Some(ToolContent::Text { text }) => {
                let output: ProviderNodeOutput = serde_json::from_str(text).map_err(|err| {
                    NodeRegistryError::ToolCall(format!(
                        "tool '{}' returned text that is not a JSON object: {}",
                        self.resource.tool_name(),
                        err
                    ))
                })?;
                Ok(serde_json::to_value(output)?)
            }
            Some(other) => Err(NodeRegistryError::ToolCall(format!(
                "Unexpected content type: {}",
                other.kind()
            ))),
            None => Err(NodeRegistryError::ToolCall(format!(
                "tool '{}' returned no content",
                self.resource.tool_name()
            ))),
        }
    }
}

impl fmt::Debug for ProviderBackedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderBackedNode")
            .field("implementation_name", &self.metadata.implementation_name)
            .field("tool", &self.resource.tool_name())
            .field("source", &self.resource.remote_source())
            .finish()
    }
}
