//! Argument parsing and command execution

use clap::Parser;
use nodereg::ProviderValidation;
use nodereg_cli::{execute, Action, Cli};
use serde_json::{json, Value};
use std::io::Write;
use std::process::Command;
use test_support::SAMPLE_MANIFEST;

fn parse(args: &[&str]) -> anyhow::Result<nodereg_cli::CliConfig> {
    let cli = Cli::try_parse_from(std::iter::once("nodereg").chain(args.iter().copied()))?;
    cli.into_config()
}

fn manifest_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_MANIFEST.as_bytes()).unwrap();
    file
}

#[test]
fn test_parse_create() {
    let config = parse(&["create", "n1", "ExampleNode", r#"{"greeting": "Hi"}"#]).unwrap();
    assert_eq!(
        config.action,
        Action::Create {
            instance: "n1".to_string(),
            type_name: "ExampleNode".to_string(),
            config: json!({"greeting": "Hi"}),
        }
    );
    assert!(config.provider_manifest.is_none());
    assert_eq!(config.options.provider_validation, ProviderValidation::Permissive);
}

#[test]
fn test_parse_rejects_bad_json() {
    let err = parse(&["create", "n1", "ExampleNode", "{not json"]).unwrap_err();
    assert!(err.to_string().contains("Invalid JSON configuration"));
}

#[test]
fn test_parse_provider_flags() {
    let config = parse(&[
        "validate",
        "SearchIssues",
        "--provider-manifest",
        "tools.json",
        "--provider-validation",
        "strict",
    ])
    .unwrap();
    assert_eq!(config.options.provider_validation, ProviderValidation::Strict);
    assert_eq!(
        config.provider_manifest.as_deref(),
        Some(std::path::Path::new("tools.json"))
    );
}

#[tokio::test]
async fn test_validate_builtin() {
    let output = execute(parse(&["validate", "RouterNode"]).unwrap()).await.unwrap();
    assert!(output.success);
    let output = execute(parse(&["validate", "NoSuchNode"]).unwrap()).await.unwrap();
    assert!(!output.success);
    let value: Value = serde_json::from_str(&output.text).unwrap();
    assert_eq!(value, json!({"type": "NoSuchNode", "valid": false}));
}

#[tokio::test]
async fn test_create_prints_normalized_config() {
    let config = parse(&["create", "greeter", "ExampleNode", "{}"]).unwrap();
    let output = execute(config).await.unwrap();
    let value: Value = serde_json::from_str(&output.text).unwrap();
    assert_eq!(value["name"], json!("greeter"));
    assert_eq!(value["implementation"], json!("example_node"));
    assert_eq!(value["config"], json!({"greeting": "Hello", "uppercase": false}));
}

#[tokio::test]
async fn test_create_invalid_config_fails() {
    let config = parse(&["create", "s", "SlackNotifyNode", "{}"]).unwrap();
    let err = execute(config).await.unwrap_err();
    assert!(err.to_string().contains("Failed to create node of type SlackNotifyNode"));
}

#[tokio::test]
async fn test_list_with_manifest() {
    let file = manifest_file();
    let path = file.path().to_str().unwrap();
    let output = execute(parse(&["list", "--provider-manifest", path]).unwrap())
        .await
        .unwrap();
    let value: Value = serde_json::from_str(&output.text).unwrap();
    assert_eq!(value["GithubMcp"][0]["name"], json!("SearchIssues"));
    assert_eq!(value["GithubMcp"][0]["config"]["title"], json!("Search Issues"));
    assert_eq!(value["Integrations"][0]["logo"], json!("/images/slack.png"));
}

#[tokio::test]
async fn test_missing_manifest_is_reported() {
    let config = parse(&["list", "--provider-manifest", "/nonexistent/tools.json"]).unwrap();
    let err = execute(config).await.unwrap_err();
    assert!(err.to_string().contains("Failed to load provider manifest"));
}

#[test]
fn test_binary_lists_builtin_types() {
    let output = Command::new(env!("CARGO_BIN_EXE_nodereg"))
        .args(["list", "--pretty"])
        .env_remove("NODEREG_PROVIDER_MANIFEST")
        .env("RUST_LOG", "warn")
        .output()
        .expect("nodereg binary runs");
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value.get("Experimental").is_some());
}
