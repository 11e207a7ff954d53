//! Graph entry/exit points and constant sources.

use super::DynamicPayload;
use crate::node::NodeKind;
use async_trait::async_trait;
use nodereg_core::{ConfigViolation, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InputNodeConfig {
    /// Field names the workflow expects at its entry point
    #[serde(default)]
    pub input_fields: Vec<String>,
}

/// Entry point of a workflow; emits the workflow inputs unchanged.
#[derive(Debug, Default)]
pub struct InputNode;

#[async_trait]
impl NodeKind for InputNode {
    const NAME: &'static str = "input_node";
    const DISPLAY_NAME: Option<&'static str> = Some("Input");
    type Config = InputNodeConfig;
    type Input = DynamicPayload;
    type Output = DynamicPayload;

    fn validate_config(&self, config: &InputNodeConfig) -> std::result::Result<(), Vec<ConfigViolation>> {
        let mut seen = Vec::new();
        let mut violations = Vec::new();
        for field in &config.input_fields {
            if seen.contains(&field) {
                violations.push(ConfigViolation::new(
                    "input_fields",
                    format!("duplicate input field '{}'", field),
                ));
            }
            seen.push(field);
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    async fn run(&self, _config: &InputNodeConfig, input: DynamicPayload) -> Result<DynamicPayload> {
        Ok(input)
    }
}

crate::register_node_kind!(InputNode);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OutputNodeConfig {
    /// Output key -> input key renames applied before the payload leaves the graph
    #[serde(default)]
    pub output_map: BTreeMap<String, String>,
}

/// Exit point of a workflow.
#[derive(Debug, Default)]
pub struct OutputNode;

#[async_trait]
impl NodeKind for OutputNode {
    const NAME: &'static str = "output_node";
    const DISPLAY_NAME: Option<&'static str> = Some("Output");
    type Config = OutputNodeConfig;
    type Input = DynamicPayload;
    type Output = DynamicPayload;

    async fn run(&self, config: &OutputNodeConfig, input: DynamicPayload) -> Result<DynamicPayload> {
        if config.output_map.is_empty() {
            return Ok(input);
        }
        let mut fields = Map::new();
        for (output_key, source) in &config.output_map {
            let value = input.fields.get(source).cloned().unwrap_or(Value::Null);
            fields.insert(output_key.clone(), value);
        }
        Ok(DynamicPayload { fields })
    }
}

crate::register_node_kind!(OutputNode);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StaticValueNodeConfig {
    #[serde(default)]
    pub values: Map<String, Value>,
}

/// Emits its configured values. Superseded by input defaults; kept for old graphs.
#[derive(Debug, Default)]
pub struct StaticValueNode;

#[async_trait]
impl NodeKind for StaticValueNode {
    const NAME: &'static str = "static_value_node";
    type Config = StaticValueNodeConfig;
    type Input = ();
    type Output = DynamicPayload;

    async fn run(&self, config: &StaticValueNodeConfig, _input: ()) -> Result<DynamicPayload> {
        Ok(DynamicPayload {
            fields: config.values.clone(),
        })
    }
}

crate::register_node_kind!(StaticValueNode);
