//! Schema helpers for node config/input/output models.

use schemars::JsonSchema;
use serde_json::{Map, Value};

pub trait NodeModel: JsonSchema + Send + Sync + 'static {}

impl<T> NodeModel for T where T: JsonSchema + Send + Sync + 'static {}

pub fn json_schema_value<T: JsonSchema>() -> Value {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(&schema).expect("generated JSON schema serializes")
}

/// Unit type `()` marks a model the node does not declare.
pub fn is_absent_model<T>() -> bool {
    std::any::type_name::<T>() == "()"
}

pub fn optional_schema<T: JsonSchema>() -> Option<Value> {
    if is_absent_model::<T>() {
        return None;
    }
    Some(json_schema_value::<T>())
}

pub fn empty_schema() -> Value {
    Value::Object(Map::new())
}

pub fn with_title(mut schema: Value, title: &str) -> Value {
    set_string(&mut schema, "title", title);
    schema
}

pub fn with_description(mut schema: Value, description: &str) -> Value {
    set_string(&mut schema, "description", description);
    schema
}

fn set_string(schema: &mut Value, key: &str, value: &str) {
    if !schema.is_object() {
        *schema = empty_schema();
    }
    if let Value::Object(map) = schema {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
}

/// Last path segment of a type name (`nodereg_nodes::builtin::ExampleNode` -> `ExampleNode`).
pub fn short_type_name<T>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}
