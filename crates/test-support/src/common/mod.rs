//! Ready-made provider snapshots.

use crate::support::resources::FixtureResource;
use nodereg_nodes::{ToolCallResult, ToolResource};
use std::sync::Arc;

/// Two GitHub tools and one Slack tool, in that order.
pub fn sample_resources() -> Vec<Arc<dyn ToolResource>> {
    vec![
        Arc::new(
            FixtureResource::new("search_issues", "github-mcp")
                .with_display_name("Search Issues")
                .with_description("Search issues in a GitHub repository")
                .with_response(ToolCallResult::text(r##"{"total_count": 1, "items": ["#1"]}"##)),
        ),
        Arc::new(
            FixtureResource::new("create_issue", "github-mcp")
                .with_display_name("Create Issue")
                .with_description("Open a new issue"),
        ),
        Arc::new(
            FixtureResource::new("list_channels", "slack-mcp")
                .with_display_name("List Channels")
                .with_description("List Slack channels"),
        ),
    ]
}

pub const SAMPLE_MANIFEST: &str = r#"{
  "servers": [
    {
      "name": "github-mcp",
      "tools": [
        {
          "name": "search_issues",
          "display_name": "Search Issues",
          "description": "Search issues in a GitHub repository",
          "response": {"total_count": 0, "items": []}
        },
        {
          "name": "create_issue",
          "description": "Open a new issue"
        }
      ]
    },
    {
      "name": "slack-mcp",
      "tools": [
        {"name": "list_channels", "display_name": "List Channels"}
      ]
    }
  ]
}"#;
