//! Third-party integration nodes whose calls are performed by the integration workers.

use crate::node::NodeKind;
use async_trait::async_trait;
use nodereg_core::ConfigViolation;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SlackMode {
    #[default]
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SlackNotifyNodeConfig {
    /// Channel name or id, e.g. "#alerts"
    pub channel: String,
    #[serde(default)]
    pub mode: SlackMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SlackNotifyNodeInput {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SlackNotifyNodeOutput {
    pub status: String,
}

#[derive(Debug, Default)]
pub struct SlackNotifyNode;

#[async_trait]
impl NodeKind for SlackNotifyNode {
    const NAME: &'static str = "slack_notify_node";
    const DISPLAY_NAME: Option<&'static str> = Some("SlackNotify");
    const LOGO: Option<&'static str> = Some("/images/slack.png");
    const CATEGORY: Option<&'static str> = Some("Slack");
    const HAS_FIXED_OUTPUT: bool = true;
    type Config = SlackNotifyNodeConfig;
    type Input = SlackNotifyNodeInput;
    type Output = SlackNotifyNodeOutput;

    fn validate_config(
        &self,
        config: &SlackNotifyNodeConfig,
    ) -> std::result::Result<(), Vec<ConfigViolation>> {
        if config.channel.trim().is_empty() {
            return Err(vec![ConfigViolation::new("channel", "must not be empty")]);
        }
        Ok(())
    }
}

crate::register_node_kind!(SlackNotifyNode);
