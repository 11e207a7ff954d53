//! Node groups used for UI grouping and repository ownership.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A UI-facing grouping label.
///
/// Equality and hashing are by name only, so two groups built independently
/// from the same label are the same key in a composite repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeGroup {
    name: String,
}

impl NodeGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NodeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for NodeGroup {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
