//! Listing schema derivation

use nodereg_nodes::{BuiltinModelCatalog, NodeCatalog, NodeSchema};
use serde_json::json;

fn schema_for(name: &str) -> NodeSchema {
    let catalog = NodeCatalog::builtin();
    let descriptor = catalog
        .find_listed(name)
        .or_else(|| catalog.find_deprecated(name))
        .unwrap_or_else(|| panic!("{} is not in the builtin catalog", name));
    NodeSchema::describe(descriptor, &BuiltinModelCatalog).expect("schema derives")
}

#[test]
fn test_config_title_is_display_name() {
    let schema = schema_for("SlackNotifyNode");
    assert_eq!(schema.config["title"], json!("SlackNotify"));

    let router = schema_for("RouterNode");
    assert_eq!(router.config["title"], json!("Router"));
}

#[test]
fn test_display_name_falls_back_to_class_name() {
    let schema = schema_for("ExampleNode");
    assert_eq!(schema.config["title"], json!("ExampleNode"));
    assert_eq!(schema.name, "ExampleNode");
}

#[test]
fn test_absent_input_is_empty_object() {
    let schema = schema_for("StaticValueNode");
    assert_eq!(schema.input, json!({}));
    assert!(schema.output.is_object());
    assert_ne!(schema.output, json!({}));
}

#[test]
fn test_model_constraints_only_for_llm_kinds() {
    let llm = schema_for("SingleLLMCallNode");
    let constraints = llm.model_constraints.expect("llm schema carries model constraints");
    assert!(constraints.contains_key("gpt-4o"));

    let example = schema_for("ExampleNode");
    assert!(example.model_constraints.is_none());
    let serialized = serde_json::to_value(&example).expect("serializes");
    assert!(serialized.get("model_constraints").is_none());
}

#[test]
fn test_logo_and_category_only_when_present() {
    let slack = schema_for("SlackNotifyNode");
    assert_eq!(slack.logo.as_deref(), Some("/images/slack.png"));
    assert_eq!(slack.category.as_deref(), Some("Slack"));
    assert!(slack.has_fixed_output);

    let example = serde_json::to_value(schema_for("ExampleNode")).expect("serializes");
    assert!(example.get("logo").is_none());
    assert!(example.get("category").is_none());
    assert_eq!(example["has_fixed_output"], json!(false));
}

#[test]
fn test_visual_tag_is_stable() {
    let first = schema_for("SlackNotifyNode").visual_tag;
    let second = schema_for("SlackNotifyNode").visual_tag;
    assert_eq!(first, second);
    assert_eq!(first.acronym, "SNN");
    assert!(first.color.starts_with('#'));
}
