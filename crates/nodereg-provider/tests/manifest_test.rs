//! Snapshot manifests as a tool provider

use nodereg_core::NodeGroup;
use nodereg_provider::{ManifestToolProvider, ProviderNodeRepository, ToolProvider};
use nodereg_repository::NodeRepository;
use serde_json::json;
use std::io::Write;
use std::sync::Arc;
use test_support::SAMPLE_MANIFEST;

#[tokio::test]
async fn test_manifest_lists_every_tool() {
    let provider = ManifestToolProvider::from_json(SAMPLE_MANIFEST).unwrap();
    let resources = provider.list_resources().await.unwrap();
    let names: Vec<&str> = resources.iter().map(|r| r.tool_name()).collect();
    assert_eq!(names, vec!["search_issues", "create_issue", "list_channels"]);

    // display name falls back to the tool name
    assert_eq!(resources[1].display_name(), "create_issue");
    assert_eq!(resources[2].remote_source(), "slack-mcp");
}

#[tokio::test]
async fn test_manifest_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_MANIFEST.as_bytes()).unwrap();

    let provider = ManifestToolProvider::from_path(file.path()).unwrap();
    let repo = ProviderNodeRepository::new(Arc::new(provider));
    let groups = repo.get_node_groups().await.unwrap();
    assert_eq!(groups, vec![NodeGroup::new("GithubMcp"), NodeGroup::new("SlackMcp")]);
}

#[test]
fn test_invalid_manifest_file_is_a_configuration_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"servers\": 3}").unwrap();

    let err = ManifestToolProvider::from_path(file.path()).unwrap_err();
    assert!(err.to_string().contains("invalid provider manifest"));
}

#[tokio::test]
async fn test_canned_response_and_missing_response() {
    let repo = ProviderNodeRepository::new(Arc::new(
        ManifestToolProvider::from_json(SAMPLE_MANIFEST).unwrap(),
    ));

    let search = repo.get_node_type("SearchIssues").await.unwrap().resolve().unwrap();
    let output = search.run(&json!({}), json!({})).await.unwrap();
    assert_eq!(output, json!({"total_count": 0, "items": []}));

    let create = repo.get_node_type("CreateIssue").await.unwrap().resolve().unwrap();
    let err = create.run(&json!({}), json!({})).await.unwrap_err();
    assert!(err.to_string().contains("no recorded response"));
}
