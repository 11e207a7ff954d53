//! LLM model constraint metadata consumed by schema derivation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConstraints {
    pub max_tokens: u32,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub supports_json_output: bool,
    pub supports_max_tokens: bool,
    pub supports_temperature: bool,
}

impl Default for ModelConstraints {
    fn default() -> Self {
        Self {
            max_tokens: 4096,
            min_temperature: 0.0,
            max_temperature: 2.0,
            supports_json_output: true,
            supports_max_tokens: true,
            supports_temperature: true,
        }
    }
}

/// Source of per-model constraints, keyed by model identifier.
pub trait ModelCatalog: Send + Sync {
    fn model_constraints(&self) -> IndexMap<String, ModelConstraints>;
}

/// Small fixed table used when no external catalog is wired in.
#[derive(Debug, Clone, Default)]
pub struct BuiltinModelCatalog;

impl ModelCatalog for BuiltinModelCatalog {
    fn model_constraints(&self) -> IndexMap<String, ModelConstraints> {
        let mut models = IndexMap::new();
        models.insert(
            "gpt-4o".to_string(),
            ModelConstraints {
                max_tokens: 16384,
                ..ModelConstraints::default()
            },
        );
        models.insert(
            "gpt-4o-mini".to_string(),
            ModelConstraints {
                max_tokens: 16384,
                ..ModelConstraints::default()
            },
        );
        models.insert(
            "o1".to_string(),
            ModelConstraints {
                max_tokens: 100000,
                min_temperature: 1.0,
                max_temperature: 1.0,
                supports_json_output: false,
                supports_max_tokens: false,
                supports_temperature: false,
            },
        );
        models.insert(
            "claude-3-5-sonnet-latest".to_string(),
            ModelConstraints {
                max_tokens: 8192,
                max_temperature: 1.0,
                ..ModelConstraints::default()
            },
        );
        models.insert(
            "gemini-1.5-pro".to_string(),
            ModelConstraints {
                max_tokens: 8192,
                ..ModelConstraints::default()
            },
        );
        models
    }
}
