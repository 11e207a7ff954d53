//! Node kinds compiled into the registry and the catalog listing them.

pub mod example;
pub mod integrations;
pub mod llm;
pub mod logic;
pub mod primitives;

pub use example::ExampleNode;
pub use integrations::SlackNotifyNode;
pub use llm::SingleLLMCallNode;
pub use logic::{CoalesceNode, RouterNode};
pub use primitives::{InputNode, OutputNode, StaticValueNode};

use crate::node_catalog::{CatalogEntry, NodeCatalog};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form object passed between nodes whose shape is defined by the graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DynamicPayload {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// (group, [(type name, module)]) in listing order
const GROUPS: &[(&str, &[(&str, &str)])] = &[
    ("Input/Output", &[("InputNode", "primitives"), ("OutputNode", "primitives")]),
    ("AI", &[("SingleLLMCallNode", "llm")]),
    ("Logic", &[("RouterNode", "logic"), ("CoalesceNode", "logic")]),
    ("Integrations", &[("SlackNotifyNode", "integrations")]),
    ("Experimental", &[("ExampleNode", "example")]),
];

/// (type name, module, symbol); valid and instantiable, never listed
const DEPRECATED: &[(&str, &str, &str)] = &[
    ("StaticValueNode", "primitives", "StaticValueNode"),
    ("AdvancedLLMNode", "llm", "SingleLLMCallNode"),
];

fn module(file: &str) -> String {
    format!("{}::{}", module_path!(), file)
}

pub(crate) fn catalog() -> NodeCatalog {
    let groups = GROUPS.iter().map(|(group, entries)| {
        let entries = entries
            .iter()
            .map(|(name, file)| CatalogEntry::new(name, name, &module(file)))
            .collect();
        (group.to_string(), entries)
    });
    let deprecated = DEPRECATED
        .iter()
        .map(|(name, file, symbol)| CatalogEntry::new(name, symbol, &module(file)));
    NodeCatalog::from_entries(groups, deprecated)
}
