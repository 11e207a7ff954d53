//! Tool providers that count or fail their discovery calls.

use async_trait::async_trait;
use nodereg_nodes::ToolResource;
use nodereg_provider::ToolProvider;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Serves a fixed resource list and records how often it was asked.
pub struct CountingProvider {
    resources: Vec<Arc<dyn ToolResource>>,
    calls: AtomicUsize,
    delay: Duration,
}

impl CountingProvider {
    pub fn new(resources: Vec<Arc<dyn ToolResource>>) -> Self {
        Self {
            resources,
            calls: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    /// Hold every discovery call open for `delay` so concurrent callers overlap
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ToolProvider for CountingProvider {
    async fn list_resources(&self) -> anyhow::Result<Vec<Arc<dyn ToolResource>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.resources.clone())
    }
}

/// Fails the first `failures` discovery calls, then serves its resources.
pub struct FailingProvider {
    message: String,
    failures: usize,
    resources: Vec<Arc<dyn ToolResource>>,
    calls: AtomicUsize,
}

impl FailingProvider {
    /// Fails every call
    pub fn new(message: &str) -> Self {
        Self::recovering(message, usize::MAX, Vec::new())
    }

    pub fn recovering(message: &str, failures: usize, resources: Vec<Arc<dyn ToolResource>>) -> Self {
        Self {
            message: message.to_string(),
            failures,
            resources,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ToolProvider for FailingProvider {
    async fn list_resources(&self) -> anyhow::Result<Vec<Arc<dyn ToolResource>>> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            anyhow::bail!("{}", self.message);
        }
        Ok(self.resources.clone())
    }
}
