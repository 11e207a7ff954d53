//! Names derived from provider identifiers.

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn capitalized_join(identifier: &str, separator: char) -> String {
    identifier.split(separator).map(capitalize).collect()
}

/// `search_issues` -> `SearchIssues`
pub fn dynamic_type_name(tool_name: &str) -> String {
    capitalized_join(tool_name, '_')
}

/// `search_issues` -> `search_issues_node`
pub fn implementation_name(tool_name: &str) -> String {
    let segments: Vec<String> = tool_name.split('_').map(str::to_lowercase).collect();
    format!("{}_node", segments.join("_"))
}

/// `search_issues` -> `SearchIssuesNode`
pub fn class_name(tool_name: &str) -> String {
    format!("{}Node", dynamic_type_name(tool_name))
}

/// `github-mcp` -> `GithubMcp`
pub fn group_name(remote_source: &str) -> String {
    capitalized_join(remote_source, '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_and_implementation_names() {
        assert_eq!(dynamic_type_name("search_issues"), "SearchIssues");
        assert_eq!(implementation_name("search_issues"), "search_issues_node");
        assert_eq!(class_name("search_issues"), "SearchIssuesNode");
    }

    #[test]
    fn test_capitalize_lowers_the_rest() {
        assert_eq!(dynamic_type_name("get_PR_diff"), "GetPrDiff");
        assert_eq!(implementation_name("get_PR_diff"), "get_pr_diff_node");
    }

    #[test]
    fn test_group_from_remote_source() {
        assert_eq!(group_name("github-mcp"), "GithubMcp");
        assert_eq!(group_name("slack"), "Slack");
        assert_eq!(group_name("my--server"), "MyServer");
    }
}
