//! Raw configuration parsing with field-level error reporting.

use nodereg_core::{ConfigViolation, NodeRegistryError, Result};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::LazyLock;

static FIELD_IN_MESSAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:missing|unknown|duplicate) field `([^`]+)`")
        .expect("field pattern must be a valid regex")
});

/// Parse `raw` into a typed config, reporting offending fields on failure.
///
/// `schema` is the config definition's JSON schema; when serde's message does
/// not name a field, top-level values are checked against the declared
/// property types to find the culprit.
pub fn parse_config<T: DeserializeOwned>(
    type_name: &str,
    schema: Option<&Value>,
    raw: Value,
) -> Result<T> {
    if !raw.is_object() {
        return Err(NodeRegistryError::InvalidConfig {
            type_name: type_name.to_string(),
            fields: Vec::new(),
            message: format!("expected a JSON object, got {}", json_kind(&raw)),
        });
    }
    let mismatched = schema.map(|s| mismatched_fields(s, &raw)).unwrap_or_default();
    serde_json::from_value(raw).map_err(|err| {
        let message = err.to_string();
        let mut fields: Vec<String> = FIELD_IN_MESSAGE
            .captures_iter(&message)
            .map(|caps| caps[1].to_string())
            .collect();
        if fields.is_empty() {
            fields = mismatched;
        }
        NodeRegistryError::InvalidConfig {
            type_name: type_name.to_string(),
            fields,
            message,
        }
    })
}

pub fn violations_error(type_name: &str, violations: Vec<ConfigViolation>) -> NodeRegistryError {
    let message = violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    NodeRegistryError::InvalidConfig {
        type_name: type_name.to_string(),
        fields: violations.into_iter().map(|v| v.field).collect(),
        message,
    }
}

/// Top-level keys of `raw` whose JSON type contradicts the schema's `type`.
pub fn mismatched_fields(schema: &Value, raw: &Value) -> Vec<String> {
    let (Some(properties), Some(values)) = (
        schema.get("properties").and_then(Value::as_object),
        raw.as_object(),
    ) else {
        return Vec::new();
    };
    values
        .iter()
        .filter(|(key, value)| {
            properties
                .get(key.as_str())
                .and_then(|property| property.get("type"))
                .is_some_and(|declared| !type_matches(declared, value))
        })
        .map(|(key, _)| key.clone())
        .collect()
}

fn type_matches(declared: &Value, value: &Value) -> bool {
    match declared {
        Value::String(name) => single_type_matches(name, value),
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .any(|name| single_type_matches(name, value)),
        _ => true,
    }
}

fn single_type_matches(name: &str, value: &Value) -> bool {
    match name {
        "string" => value.is_string(),
        "integer" => value.is_i64() || value.is_u64(),
        "number" => value.is_number(),
        "boolean" => value.is_boolean(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        "null" => value.is_null(),
        _ => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
