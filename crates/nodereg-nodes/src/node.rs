//! Node implementation contract
//!
//! Compiled-in node kinds implement the typed [`NodeKind`] trait. The registry
//! only ever talks to the object-safe [`NodeDefinition`] surface, which
//! [`NodeKindWrapper`] provides for any `NodeKind`.
//!
//! # Example
//! ```rust,no_run
//! use async_trait::async_trait;
//! use nodereg_nodes::NodeKind;
//! use schemars::JsonSchema;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Default)]
//! struct ShoutNode;
//!
//! #[derive(Serialize, Deserialize, JsonSchema)]
//! struct ShoutConfig {
//!     #[serde(default)]
//!     suffix: String,
//! }
//!
//! #[derive(Serialize, Deserialize, JsonSchema)]
//! struct ShoutInput {
//!     text: String,
//! }
//!
//! #[derive(Serialize, Deserialize, JsonSchema)]
//! struct ShoutOutput {
//!     text: String,
//! }
//!
//! #[async_trait]
//! impl NodeKind for ShoutNode {
//!     const NAME: &'static str = "shout_node";
//!     type Config = ShoutConfig;
//!     type Input = ShoutInput;
//!     type Output = ShoutOutput;
//!
//!     async fn run(&self, config: &ShoutConfig, input: ShoutInput) -> nodereg_core::Result<ShoutOutput> {
//!         Ok(ShoutOutput { text: format!("{}{}", input.text.to_uppercase(), config.suffix) })
//!     }
//! }
//! ```

use crate::model_schema::{is_absent_model, optional_schema, short_type_name, NodeModel};
use crate::validation::{parse_config, violations_error};
use crate::visual_tag::VisualTag;
use async_trait::async_trait;
use nodereg_core::{ConfigViolation, NodeRegistryError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Typed node kind compiled into the binary.
#[async_trait]
pub trait NodeKind: Send + Sync + 'static {
    /// Snake-case implementation name (e.g. "slack_notify_node")
    const NAME: &'static str;

    /// Name shown in the editor; falls back to the class name
    const DISPLAY_NAME: Option<&'static str> = None;

    const LOGO: Option<&'static str> = None;

    const CATEGORY: Option<&'static str> = None;

    /// Whether the output shape is fixed by the implementation
    const HAS_FIXED_OUTPUT: bool = false;

    /// Config model; use `()` for nodes without configuration
    type Config: NodeModel + Serialize + DeserializeOwned;

    /// Input model; use `()` for nodes without input
    type Input: NodeModel + DeserializeOwned;

    /// Output model; use `()` for nodes without output
    type Output: NodeModel + Serialize;

    /// Rules beyond what deserialization enforces.
    fn validate_config(&self, _config: &Self::Config) -> std::result::Result<(), Vec<ConfigViolation>> {
        Ok(())
    }

    /// Runtime entry point. Kinds whose behavior lives outside this process keep the default.
    async fn run(&self, _config: &Self::Config, _input: Self::Input) -> Result<Self::Output> {
        Err(NodeRegistryError::NotExecutable(Self::NAME.to_string()))
    }
}

/// Schema-bearing config definition plus the flags it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigModel {
    pub schema: Value,
    pub has_fixed_output: bool,
}

/// Everything the registry reads from an implementation.
#[derive(Debug, Clone)]
pub struct NodeMetadata {
    /// Snake-case implementation name (e.g. "search_issues_node")
    pub implementation_name: String,
    /// CamelCase class name (e.g. "SearchIssuesNode")
    pub class_name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub category: Option<String>,
    pub config_model: Option<ConfigModel>,
    pub input_model: Option<Value>,
    pub output_model: Option<Value>,
}

impl NodeMetadata {
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.class_name)
    }

    pub fn logo(&self) -> &str {
        self.logo.as_deref().unwrap_or_default()
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    pub fn has_fixed_output(&self) -> bool {
        self.config_model
            .as_ref()
            .is_some_and(|model| model.has_fixed_output)
    }

    pub fn visual_tag(&self) -> VisualTag {
        VisualTag::derive(&self.implementation_name, &self.class_name)
    }
}

/// Object-safe surface over a compiled-in node kind.
#[async_trait]
pub trait NodeDefinition: Send + Sync {
    fn metadata(&self) -> &NodeMetadata;

    /// Validate a raw config payload and return its normalized form.
    fn validate_config(&self, type_name: &str, raw: Value) -> Result<Value>;

    async fn run(&self, config: &Value, input: Value) -> Result<Value>;
}

/// Adapter implementing [`NodeDefinition`] for any [`NodeKind`]
pub struct NodeKindWrapper<T: NodeKind> {
    kind: Arc<T>,
    metadata: NodeMetadata,
}

impl<T: NodeKind> NodeKindWrapper<T> {
    pub fn new(kind: T) -> Self {
        let metadata = NodeMetadata {
            implementation_name: T::NAME.to_string(),
            class_name: short_type_name::<T>(),
            display_name: T::DISPLAY_NAME.map(str::to_string),
            description: None,
            logo: T::LOGO.map(str::to_string),
            category: T::CATEGORY.map(str::to_string),
            config_model: optional_schema::<T::Config>().map(|schema| ConfigModel {
                schema,
                has_fixed_output: T::HAS_FIXED_OUTPUT,
            }),
            input_model: optional_schema::<T::Input>(),
            output_model: optional_schema::<T::Output>(),
        };
        Self {
            kind: Arc::new(kind),
            metadata,
        }
    }

    fn typed_config(&self, type_name: &str, raw: Value) -> Result<T::Config> {
        if is_absent_model::<T::Config>() {
            // any object is accepted and discarded
            parse_config::<Map<String, Value>>(type_name, None, raw)?;
            return Ok(serde_json::from_value(Value::Null)?);
        }
        let schema = self.metadata.config_model.as_ref().map(|model| &model.schema);
        parse_config(type_name, schema, raw)
    }
}

#[async_trait]
impl<T: NodeKind> NodeDefinition for NodeKindWrapper<T> {
    fn metadata(&self) -> &NodeMetadata {
        &self.metadata
    }

    fn validate_config(&self, type_name: &str, raw: Value) -> Result<Value> {
        let config = self.typed_config(type_name, raw)?;
        if let Err(violations) = self.kind.validate_config(&config) {
            return Err(violations_error(type_name, violations));
        }
        if is_absent_model::<T::Config>() {
            return Ok(Value::Object(Map::new()));
        }
        Ok(serde_json::to_value(&config)?)
    }

    async fn run(&self, config: &Value, input: Value) -> Result<Value> {
        let config = self.typed_config(T::NAME, config.clone())?;
        let input = if is_absent_model::<T::Input>() {
            Value::Null
        } else {
            input
        };
        let parsed: T::Input = serde_json::from_value(input).map_err(|err| {
            NodeRegistryError::InvalidArgument(format!("Invalid input: {}", err))
        })?;
        let output = self.kind.run(&config, parsed).await?;
        serde_json::to_value(output)
            .map_err(|e| NodeRegistryError::InvalidArgument(format!("Invalid output: {}", e)))
    }
}
