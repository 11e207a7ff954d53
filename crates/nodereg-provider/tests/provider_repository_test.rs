//! Provider-backed repository: discovery, caching and validation policy

use nodereg_core::{NodeGroup, NodeRegistryError};
use nodereg_provider::{ProviderNodeRepository, ProviderValidation};
use nodereg_repository::NodeRepository;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use test_support::{sample_resources, CountingProvider, FailingProvider};
use tracing_test::traced_test;

fn counting() -> Arc<CountingProvider> {
    Arc::new(CountingProvider::new(sample_resources()))
}

#[tokio::test]
async fn test_groups_follow_remote_sources() {
    let repo = ProviderNodeRepository::new(counting());
    let groups = repo.get_node_groups().await.unwrap();
    assert_eq!(groups, vec![NodeGroup::new("GithubMcp"), NodeGroup::new("SlackMcp")]);

    let github = repo
        .get_node_types_for_group(&NodeGroup::new("GithubMcp"))
        .await
        .unwrap();
    let names: Vec<&str> = github.iter().map(|d| d.type_name.as_str()).collect();
    assert_eq!(names, vec!["SearchIssues", "CreateIssue"]);
    assert_eq!(github[0].implementation_name, "search_issues_node");
    assert!(github[0].is_dynamic());
}

#[tokio::test]
async fn test_unreported_group_lists_nothing() {
    let repo = ProviderNodeRepository::new(counting());
    let types = repo
        .get_node_types_for_group(&NodeGroup::new("Logic"))
        .await
        .unwrap();
    assert!(types.is_empty());
}

#[tokio::test]
async fn test_discovery_is_cached() {
    let provider = counting();
    let repo = ProviderNodeRepository::new(provider.clone());

    let first = repo.get_all_node_types_by_group().await.unwrap();
    let second = repo.get_all_node_types_by_group().await.unwrap();
    repo.get_node_type("CreateIssue").await.unwrap();
    repo.get_node_groups().await.unwrap();

    assert_eq!(provider.calls(), 1);
    let first: Vec<_> = first.values().flatten().map(|d| d.type_name.clone()).collect();
    let second: Vec<_> = second.values().flatten().map(|d| d.type_name.clone()).collect();
    assert_eq!(first, second);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_access_discovers_once() {
    let provider = Arc::new(
        CountingProvider::new(sample_resources()).with_delay(Duration::from_millis(50)),
    );
    let repo = Arc::new(ProviderNodeRepository::new(provider.clone()));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.get_all_node_types_by_group().await.map(|grouped| grouped.len())
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), 2);
    }
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
#[traced_test]
async fn test_discovery_failure_fails_whole_listing() {
    let provider = Arc::new(FailingProvider::new("provider offline"));
    let repo = ProviderNodeRepository::new(provider.clone());

    let err = repo.get_all_node_types_by_group().await.unwrap_err();
    match &err {
        NodeRegistryError::ProviderDiscovery { source } => {
            assert!(source.to_string().contains("provider offline"))
        }
        other => panic!("expected ProviderDiscovery, got {:?}", other),
    }
    assert!(logs_contain("Tool provider discovery failed"));
}

#[tokio::test]
async fn test_failed_discovery_is_retried() {
    let provider = Arc::new(FailingProvider::recovering("flaky", 1, sample_resources()));
    let repo = ProviderNodeRepository::new(provider.clone());

    assert!(repo.get_node_groups().await.is_err());
    let groups = repo.get_node_groups().await.unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_permissive_policy_accepts_any_name() {
    let provider = counting();
    let repo = ProviderNodeRepository::new(provider.clone());
    assert_eq!(repo.validation(), ProviderValidation::Permissive);

    assert!(repo.is_valid_node_type("SearchIssues").await.unwrap());
    assert!(repo.is_valid_node_type("AnythingAtAll").await.unwrap());
    // permissive checks never contact the provider
    assert_eq!(provider.calls(), 0);

    let err = repo.get_node_type("AnythingAtAll").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_strict_policy_checks_catalog() {
    let repo = ProviderNodeRepository::with_validation(counting(), ProviderValidation::Strict);
    assert!(repo.is_valid_node_type("SearchIssues").await.unwrap());
    assert!(!repo.is_valid_node_type("AnythingAtAll").await.unwrap());
}

#[tokio::test]
#[traced_test]
async fn test_discovery_is_logged() {
    let repo = ProviderNodeRepository::new(counting());
    repo.get_node_groups().await.unwrap();
    assert!(logs_contain("Discovered provider node types"));
    assert!(logs_contain("node_types=3"));
}

#[tokio::test]
async fn test_resolved_node_uses_tool_metadata() {
    let repo = ProviderNodeRepository::new(counting());
    let descriptor = repo.get_node_type("SearchIssues").await.unwrap();
    let implementation = descriptor.resolve().unwrap();
    let metadata = implementation.metadata();

    assert_eq!(metadata.class_name, "SearchIssuesNode");
    assert_eq!(metadata.implementation_name, "search_issues_node");
    assert!(!metadata.has_fixed_output());
    let config = &metadata.config_model.as_ref().unwrap().schema;
    assert_eq!(config["title"], json!("Search Issues"));
    assert_eq!(config["description"], json!("Search issues in a GitHub repository"));

    let output = implementation
        .run(&json!({}), json!({"input_node": {"q": "bug"}}))
        .await
        .unwrap();
    assert_eq!(output["total_count"], json!(1));
}

#[test]
fn test_validation_policy_parses() {
    assert_eq!("strict".parse::<ProviderValidation>().unwrap(), ProviderValidation::Strict);
    assert_eq!("Permissive".parse::<ProviderValidation>().unwrap(), ProviderValidation::Permissive);
    assert!("lenient".parse::<ProviderValidation>().is_err());
}
