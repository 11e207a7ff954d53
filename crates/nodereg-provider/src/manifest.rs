//! Tool provider backed by a JSON snapshot of provider servers and their tools.
//!
//! ```json
//! {
//!   "servers": [
//!     {
//!       "name": "github-mcp",
//!       "tools": [
//!         {
//!           "name": "search_issues",
//!           "display_name": "Search Issues",
//!           "description": "Search issues in a repository",
//!           "response": {"items": []}
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use crate::provider::ToolProvider;
use async_trait::async_trait;
use nodereg_core::{NodeRegistryError, Result};
use nodereg_nodes::{ToolCallResult, ToolResource};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderManifest {
    #[serde(default)]
    pub servers: Vec<ManifestServer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestServer {
    pub name: String,
    #[serde(default)]
    pub tools: Vec<ManifestTool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestTool {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Canned result returned when the tool is called
    #[serde(default)]
    pub response: Option<Value>,
}

#[derive(Debug)]
struct ManifestResource {
    server: String,
    tool: ManifestTool,
}

#[async_trait]
impl ToolResource for ManifestResource {
    fn tool_name(&self) -> &str {
        &self.tool.name
    }

    fn display_name(&self) -> &str {
        self.tool.display_name.as_deref().unwrap_or(&self.tool.name)
    }

    fn description(&self) -> &str {
        &self.tool.description
    }

    fn remote_source(&self) -> &str {
        &self.server
    }

    async fn call(&self, _args: Value) -> Result<ToolCallResult> {
        match &self.tool.response {
            Some(response) => Ok(ToolCallResult::text(serde_json::to_string(response)?)),
            None => Ok(ToolCallResult::error(format!(
                "tool '{}' has no recorded response",
                self.tool.name
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ManifestToolProvider {
    manifest: ProviderManifest,
}

impl ManifestToolProvider {
    pub fn new(manifest: ProviderManifest) -> Self {
        Self { manifest }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: ProviderManifest = serde_json::from_str(json)?;
        Ok(Self::new(manifest))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let manifest: ProviderManifest = serde_json::from_str(&contents).map_err(|e| {
            NodeRegistryError::Configuration(format!(
                "invalid provider manifest {}: {}",
                path.display(),
                e
            ))
        })?;
        tracing::debug!(
            path = %path.display(),
            servers = manifest.servers.len(),
            "Loaded provider manifest"
        );
        Ok(Self::new(manifest))
    }

    pub fn manifest(&self) -> &ProviderManifest {
        &self.manifest
    }
}

#[async_trait]
impl ToolProvider for ManifestToolProvider {
    async fn list_resources(&self) -> anyhow::Result<Vec<Arc<dyn ToolResource>>> {
        Ok(self
            .manifest
            .servers
            .iter()
            .flat_map(|server| {
                server.tools.iter().map(|tool| {
                    Arc::new(ManifestResource {
                        server: server.name.clone(),
                        tool: tool.clone(),
                    }) as Arc<dyn ToolResource>
                })
            })
            .collect())
    }
}
