use crate::node::NodeKind;
use async_trait::async_trait;
use nodereg_core::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_greeting() -> String {
    "Hello".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExampleNodeConfig {
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default)]
    pub uppercase: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExampleNodeInput {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExampleNodeOutput {
    pub message: String,
}

/// Greets its input; useful for smoke-testing a deployment.
#[derive(Debug, Default)]
pub struct ExampleNode;

#[async_trait]
impl NodeKind for ExampleNode {
    const NAME: &'static str = "example_node";
    type Config = ExampleNodeConfig;
    type Input = ExampleNodeInput;
    type Output = ExampleNodeOutput;

    async fn run(&self, config: &ExampleNodeConfig, input: ExampleNodeInput) -> Result<ExampleNodeOutput> {
        let message = format!("{}, {}!", config.greeting, input.name);
        let message = if config.uppercase {
            message.to_uppercase()
        } else {
            message
        };
        Ok(ExampleNodeOutput { message })
    }
}

crate::register_node_kind!(ExampleNode);
