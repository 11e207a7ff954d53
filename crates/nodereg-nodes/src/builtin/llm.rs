//! Single-call LLM node. Execution happens in the model-serving layer, so
//! only the configuration contract lives here.

use super::DynamicPayload;
use crate::node::NodeKind;
use async_trait::async_trait;
use nodereg_core::ConfigViolation;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    4096
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LlmInfo {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for LlmInfo {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FewShotExample {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SingleLLMCallNodeConfig {
    #[serde(default)]
    pub llm_info: LlmInfo,
    #[serde(default)]
    pub system_message: String,
    #[serde(default)]
    pub user_message: String,
    #[serde(default)]
    pub few_shot_examples: Vec<FewShotExample>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SingleLLMCallNodeOutput {
    pub response: String,
}

#[derive(Debug, Default)]
pub struct SingleLLMCallNode;

#[async_trait]
impl NodeKind for SingleLLMCallNode {
    const NAME: &'static str = "single_llm_call_node";
    const DISPLAY_NAME: Option<&'static str> = Some("Single LLM Call");
    type Config = SingleLLMCallNodeConfig;
    type Input = DynamicPayload;
    type Output = SingleLLMCallNodeOutput;

    fn validate_config(
        &self,
        config: &SingleLLMCallNodeConfig,
    ) -> std::result::Result<(), Vec<ConfigViolation>> {
        let mut violations = Vec::new();
        let info = &config.llm_info;
        if info.model.trim().is_empty() {
            violations.push(ConfigViolation::new("llm_info.model", "must not be empty"));
        }
        if !(0.0..=2.0).contains(&info.temperature) {
            violations.push(ConfigViolation::new(
                "llm_info.temperature",
                format!("{} is outside 0.0..=2.0", info.temperature),
            ));
        }
        if info.max_tokens == 0 {
            violations.push(ConfigViolation::new("llm_info.max_tokens", "must be positive"));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

crate::register_node_kind!(SingleLLMCallNode);
