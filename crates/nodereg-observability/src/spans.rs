//! Named spans for registry operations.

use tracing::Span;

/// One discovery round-trip to a tool provider
pub fn discover_provider() -> Span {
    tracing::info_span!("discover_provider")
}

/// Grouped listing of every node type and its schema
pub fn list_node_types() -> Span {
    tracing::info_span!("list_node_types")
}

pub fn create_node(instance_name: &str, node_type: &str) -> Span {
    tracing::info_span!("create_node", instance = instance_name, node_type = node_type)
}
