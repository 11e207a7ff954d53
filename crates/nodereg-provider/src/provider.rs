use async_trait::async_trait;
use nodereg_nodes::ToolResource;
use std::sync::Arc;

/// External system exposing discoverable tool resources.
#[async_trait]
pub trait ToolProvider: Send + Sync {
    /// Full resource list; called once per repository instance.
    async fn list_resources(&self) -> anyhow::Result<Vec<Arc<dyn ToolResource>>>;
}
