//! Collaborator interface for resources surfaced by an external tool provider.

use async_trait::async_trait;
use nodereg_core::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One content block returned by a tool call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
    Image { data: String, mime_type: String },
    Resource { uri: String },
}

impl ToolContent {
    pub fn kind(&self) -> &'static str {
        match self {
            ToolContent::Text { .. } => "text",
            ToolContent::Image { .. } => "image",
            ToolContent::Resource { .. } => "resource",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallResult {
    #[serde(default)]
    pub is_error: bool,
    pub content: Vec<ToolContent>,
}

impl ToolCallResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            is_error: false,
            content: vec![ToolContent::Text { text: text.into() }],
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_error: true,
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
        }
    }

    /// Text blocks joined for log and error messages
    pub fn summary(&self) -> String {
        self.content
            .iter()
            .filter_map(|content| match content {
                ToolContent::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A single invocable capability exposed by a tool provider.
#[async_trait]
pub trait ToolResource: Send + Sync + fmt::Debug {
    /// Underlying identifier, word-separated by `_` (e.g. "search_issues")
    fn tool_name(&self) -> &str;

    /// Provider-declared display name
    fn display_name(&self) -> &str;

    fn description(&self) -> &str;

    /// Identifier of the remote source serving this tool (e.g. "github-mcp")
    fn remote_source(&self) -> &str;

    async fn call(&self, args: Value) -> Result<ToolCallResult>;
}
