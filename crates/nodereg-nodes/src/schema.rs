//! Listing schema derived from a resolved implementation.

use crate::descriptor::NodeDescriptor;
use crate::implementation::NodeImplementation;
use crate::model_schema::{empty_schema, with_title};
use crate::models::{ModelCatalog, ModelConstraints};
use crate::visual_tag::VisualTag;
use indexmap::IndexMap;
use nodereg_core::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Editor-facing description of one node type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSchema {
    pub name: String,
    pub input: Value,
    pub output: Value,
    pub config: Value,
    pub visual_tag: VisualTag,
    pub has_fixed_output: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_constraints: Option<IndexMap<String, ModelConstraints>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Closed set of extra schema sections attached by type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxiliarySchema {
    ModelConstraints,
}

impl AuxiliarySchema {
    pub fn for_type(type_name: &str) -> Option<Self> {
        match type_name {
            "LLMNode" | "SingleLLMCallNode" => Some(AuxiliarySchema::ModelConstraints),
            _ => None,
        }
    }
}

impl NodeSchema {
    pub fn derive(
        type_name: &str,
        implementation: &NodeImplementation,
        models: &dyn ModelCatalog,
    ) -> Self {
        let metadata = implementation.metadata();
        let config = metadata
            .config_model
            .as_ref()
            .map(|model| model.schema.clone())
            .unwrap_or_else(empty_schema);

        let model_constraints = match AuxiliarySchema::for_type(type_name) {
            Some(AuxiliarySchema::ModelConstraints) => Some(models.model_constraints()),
            None => None,
        };

        Self {
            name: type_name.to_string(),
            input: metadata.input_model.clone().unwrap_or_else(empty_schema),
            output: metadata.output_model.clone().unwrap_or_else(empty_schema),
            config: with_title(config, metadata.display_name()),
            visual_tag: metadata.visual_tag(),
            has_fixed_output: metadata.has_fixed_output(),
            model_constraints,
            logo: non_empty(metadata.logo()),
            category: non_empty(metadata.category()),
        }
    }

    /// Resolve `descriptor` and derive its schema.
    pub fn describe(descriptor: &NodeDescriptor, models: &dyn ModelCatalog) -> Result<Self> {
        let implementation = descriptor.resolve()?;
        Ok(Self::derive(
            descriptor.type_name.as_str(),
            &implementation,
            models,
        ))
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
