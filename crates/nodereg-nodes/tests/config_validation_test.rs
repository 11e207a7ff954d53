//! Raw configuration validation through the resolved implementation

use nodereg_core::{InstanceName, NodeRegistryError};
use nodereg_nodes::NodeCatalog;
use serde_json::{json, Value};

fn validate(name: &str, raw: Value) -> nodereg_core::Result<Value> {
    let catalog = NodeCatalog::builtin();
    let descriptor = catalog
        .find_listed(name)
        .or_else(|| catalog.find_deprecated(name))
        .expect("builtin type");
    descriptor.resolve()?.validate_config(name, raw)
}

fn invalid_fields(result: nodereg_core::Result<Value>) -> Vec<String> {
    match result {
        Err(NodeRegistryError::InvalidConfig { fields, .. }) => fields,
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_defaults_are_filled_in() {
    let config = validate("ExampleNode", json!({})).expect("empty config is valid");
    assert_eq!(config, json!({"greeting": "Hello", "uppercase": false}));
}

#[test]
fn test_missing_required_field_is_named() {
    let fields = invalid_fields(validate("SlackNotifyNode", json!({"mode": "bot"})));
    assert_eq!(fields, vec!["channel".to_string()]);
}

#[test]
fn test_wrong_type_is_named() {
    let fields = invalid_fields(validate("ExampleNode", json!({"greeting": 5})));
    assert_eq!(fields, vec!["greeting".to_string()]);
}

#[test]
fn test_rule_violations_are_named() {
    let fields = invalid_fields(validate(
        "SingleLLMCallNode",
        json!({"llm_info": {"model": "gpt-4o", "temperature": 3.5}}),
    ));
    assert_eq!(fields, vec!["llm_info.temperature".to_string()]);

    let fields = invalid_fields(validate(
        "RouterNode",
        json!({"routes": [
            {"name": "a", "field": "x"},
            {"name": "a", "field": "y"}
        ]}),
    ));
    assert_eq!(fields, vec!["routes".to_string()]);
}

#[test]
fn test_non_object_config_is_rejected() {
    let err = validate("ExampleNode", json!([1, 2])).unwrap_err();
    assert!(matches!(err, NodeRegistryError::InvalidConfig { .. }));
    assert!(err.to_string().contains("an array"));
}

#[tokio::test]
async fn test_instantiated_node_runs() {
    let catalog = NodeCatalog::builtin();
    let implementation = catalog
        .find_listed("ExampleNode")
        .expect("listed")
        .resolve()
        .expect("resolves");
    let node = implementation
        .instantiate(
            InstanceName::new("n1"),
            "ExampleNode".into(),
            json!({"greeting": "Hi", "uppercase": true}),
        )
        .expect("valid config");

    let output = node.run(json!({"name": "Ada"})).await.expect("runs");
    assert_eq!(output, json!({"message": "HI, ADA!"}));
}

#[tokio::test]
async fn test_router_matches_rules() {
    let catalog = NodeCatalog::builtin();
    let implementation = catalog
        .find_listed("RouterNode")
        .expect("listed")
        .resolve()
        .expect("resolves");
    let config = json!({"routes": [
        {"name": "urgent", "field": "priority", "equals": "high"},
        {"name": "has_owner", "field": "owner"},
        {"name": "missing", "field": "nope"}
    ]});
    let config = implementation
        .validate_config("RouterNode", config)
        .expect("valid");

    let output = implementation
        .run(&config, json!({"priority": "high", "owner": "ops"}))
        .await
        .expect("runs");
    assert_eq!(output["matched_routes"], json!(["urgent", "has_owner"]));
}

#[tokio::test]
async fn test_llm_node_is_not_executable_in_process() {
    let catalog = NodeCatalog::builtin();
    let implementation = catalog
        .find_listed("SingleLLMCallNode")
        .expect("listed")
        .resolve()
        .expect("resolves");
    let config = implementation
        .validate_config("SingleLLMCallNode", json!({}))
        .expect("defaults are valid");
    let err = implementation.run(&config, json!({})).await.unwrap_err();
    assert!(matches!(err, NodeRegistryError::NotExecutable(_)));
}
