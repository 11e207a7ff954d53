//! Node registry core types and shared utilities.

pub mod error;
pub mod group;
pub mod ids;

pub use error::{ConfigViolation, NodeRegistryError, Result};
pub use group::NodeGroup;
pub use ids::{InstanceName, NodeTypeName};
