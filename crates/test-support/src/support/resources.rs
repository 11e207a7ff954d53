//! Tool resource with a fixed response.

use async_trait::async_trait;
use nodereg_core::Result;
use nodereg_nodes::{ToolCallResult, ToolResource};
use serde_json::Value;
use std::sync::Mutex;

#[derive(Debug)]
pub struct FixtureResource {
    tool_name: String,
    display_name: String,
    description: String,
    remote_source: String,
    response: ToolCallResult,
    received: Mutex<Vec<Value>>,
}

impl FixtureResource {
    /// Resource answering `{}`; display name is the tool name unless overridden
    pub fn new(tool_name: &str, remote_source: &str) -> Self {
        Self {
            tool_name: tool_name.to_string(),
            display_name: tool_name.to_string(),
            description: String::new(),
            remote_source: remote_source.to_string(),
            response: ToolCallResult::text("{}"),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.display_name = display_name.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_response(mut self, response: ToolCallResult) -> Self {
        self.response = response;
        self
    }

    /// Arguments of every call so far
    pub fn received(&self) -> Vec<Value> {
        self.received
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ToolResource for FixtureResource {
    fn tool_name(&self) -> &str {
        &self.tool_name
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn remote_source(&self) -> &str {
        &self.remote_source
    }

    async fn call(&self, args: Value) -> Result<ToolCallResult> {
        tracing::debug!(tool = %self.tool_name, "Fixture tool called");
        if let Ok(mut calls) = self.received.lock() {
            calls.push(args);
        }
        Ok(self.response.clone())
    }
}
