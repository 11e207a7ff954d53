//! Routing and merging nodes.

use super::DynamicPayload;
use crate::node::NodeKind;
use async_trait::async_trait;
use nodereg_core::{ConfigViolation, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteRule {
    pub name: String,
    /// Input field inspected by this rule
    pub field: String,
    /// Match only when the field equals this value; any non-null value matches when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equals: Option<Value>,
}

impl RouteRule {
    fn matches(&self, payload: &DynamicPayload) -> bool {
        match (payload.fields.get(&self.field), &self.equals) {
            (None | Some(Value::Null), _) => false,
            (Some(_), None) => true,
            (Some(value), Some(expected)) => value == expected,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouterNodeConfig {
    #[serde(default)]
    pub routes: Vec<RouteRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouterNodeOutput {
    pub matched_routes: Vec<String>,
    pub payload: DynamicPayload,
}

/// Forwards its input along every route whose rule matches.
#[derive(Debug, Default)]
pub struct RouterNode;

#[async_trait]
impl NodeKind for RouterNode {
    const NAME: &'static str = "router_node";
    const DISPLAY_NAME: Option<&'static str> = Some("Router");
    type Config = RouterNodeConfig;
    type Input = DynamicPayload;
    type Output = RouterNodeOutput;

    fn validate_config(&self, config: &RouterNodeConfig) -> std::result::Result<(), Vec<ConfigViolation>> {
        let mut names = HashSet::new();
        let mut violations = Vec::new();
        for rule in &config.routes {
            if rule.name.is_empty() {
                violations.push(ConfigViolation::new("routes", "route name must not be empty"));
            } else if !names.insert(rule.name.as_str()) {
                violations.push(ConfigViolation::new(
                    "routes",
                    format!("duplicate route name '{}'", rule.name),
                ));
            }
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    async fn run(&self, config: &RouterNodeConfig, input: DynamicPayload) -> Result<RouterNodeOutput> {
        let matched_routes = config
            .routes
            .iter()
            .filter(|rule| rule.matches(&input))
            .map(|rule| rule.name.clone())
            .collect();
        Ok(RouterNodeOutput {
            matched_routes,
            payload: input,
        })
    }
}

crate::register_node_kind!(RouterNode);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CoalesceNodeConfig {
    /// Input fields in order of preference
    #[serde(default)]
    pub preferences: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CoalesceNodeOutput {
    pub source: Option<String>,
    pub value: Value,
}

/// Picks the first non-null input field in preference order.
#[derive(Debug, Default)]
pub struct CoalesceNode;

#[async_trait]
impl NodeKind for CoalesceNode {
    const NAME: &'static str = "coalesce_node";
    const DISPLAY_NAME: Option<&'static str> = Some("Coalesce");
    type Config = CoalesceNodeConfig;
    type Input = DynamicPayload;
    type Output = CoalesceNodeOutput;

    async fn run(&self, config: &CoalesceNodeConfig, input: DynamicPayload) -> Result<CoalesceNodeOutput> {
        let found = config.preferences.iter().find_map(|field| {
            input
                .fields
                .get(field)
                .filter(|value| !value.is_null())
                .map(|value| (field.clone(), value.clone()))
        });
        Ok(match found {
            Some((source, value)) => CoalesceNodeOutput {
                source: Some(source),
                value,
            },
            None => CoalesceNodeOutput {
                source: None,
                value: Value::Null,
            },
        })
    }
}

crate::register_node_kind!(CoalesceNode);
