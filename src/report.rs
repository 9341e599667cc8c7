use crate::jira::Issue;

/// Renders the tab-separated report: a `LINK\tEPIC\tASSIGNEE` header followed
/// by one row per issue in input order. Links are the base URL and issue key
/// joined as-is; missing epic and assignee fall back to `-` and `Unassigned`.
pub fn render(base_url: &str, issues: &[Issue]) -> String {
    if issues.is_empty() {
        return "No issues found in this sprint.\n".to_string();
    }

    let mut out = String::from("LINK\tEPIC\tASSIGNEE\n");
    for issue in issues {
        let link = format!("{}/browse/{}", base_url, issue.key);
        let epic = issue.epic_name().unwrap_or("-");
        let assignee = issue.assignee_name().unwrap_or("Unassigned");
        out.push_str(&format!("{}\t{}\t{}\n", link, epic, assignee));
    }

    out
}
