//! Error types for the node registry
//!
//! Provides a single error hierarchy using `thiserror` so that repositories,
//! descriptors and the factory can propagate failures with `?`.

use anyhow::Error as AnyhowError;
use std::fmt;
use thiserror::Error;

/// Main error type for node discovery, resolution and instantiation
#[derive(Error, Debug)]
pub enum NodeRegistryError {
    /// Explicit lookup of a type name that no repository knows
    #[error("Node type '{0}' not found")]
    NodeTypeNotFound(String),

    /// Instantiation requested for a name that failed the validity check
    #[error("Node type '{0}' is not valid")]
    InvalidNodeType(String),

    /// Two composite members declared the same group
    #[error("Duplicate node group: {0}")]
    DuplicateGroup(String),

    /// Group-keyed read for a group no member owns
    #[error("Node group '{0}' is not owned by any repository")]
    UnknownGroup(String),

    /// Descriptor carries neither (or both) of a static locator and a dynamic resolver
    #[error("Descriptor for node type '{type_name}' {problem}")]
    DescriptorIntegrity { type_name: String, problem: String },

    /// Static locator names no registered implementation
    #[error("Implementation '{module}::{symbol}' is not registered")]
    ImplementationNotFound { module: String, symbol: String },

    /// Dynamic resolver failed to synthesize an implementation
    #[error("Failed to resolve node type '{type_name}'")]
    ResolutionFailed {
        type_name: String,
        #[source]
        source: Box<NodeRegistryError>,
    },

    /// Raw configuration rejected by the implementation's config definition
    #[error("Invalid configuration for node type '{type_name}': {message}")]
    InvalidConfig {
        type_name: String,
        fields: Vec<String>,
        message: String,
    },

    /// Provider discovery call failed; no partial catalog is produced
    #[error("Tool provider discovery failed")]
    ProviderDiscovery {
        #[source]
        source: AnyhowError,
    },

    /// Provider tool invocation failed or returned an error result
    #[error("Tool call error: {0}")]
    ToolCall(String),

    /// Node has no runtime behavior available in this process
    #[error("Node implementation '{0}' cannot be executed here")]
    NotExecutable(String),

    /// Invalid argument provided to a function
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Registry configuration error
    #[error("Registry configuration error: {0}")]
    Configuration(String),

    /// I/O error (manifest files, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NodeRegistryError {
    /// Whether this error means "no such node type" rather than a broken registry.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NodeTypeNotFound(_) | Self::InvalidNodeType(_))
    }
}

/// A single field-level rule violation reported by a config definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigViolation {
    pub field: String,
    pub message: String,
}

impl ConfigViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, NodeRegistryError>;
