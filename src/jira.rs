use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprint {
    pub id: u64,
    pub name: String,
    pub state: String,
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
    #[serde(rename = "originBoardId")]
    pub origin_board_id: Option<u64>,
}

/// A single work item. Only `key` is reliably populated: the sprint issue
/// fetch restricts the field set to `key,assignee,epic`, so the remaining
/// fields are modeled for forward compatibility and stay empty in practice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub key: String,
    #[serde(default)]
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueFields {
    pub summary: Option<String>,
    #[serde(rename = "issuetype")]
    pub issue_type: Option<NamedField>,
    pub status: Option<NamedField>,
    pub assignee: Option<Assignee>,
    pub epic: Option<Epic>,
    #[serde(rename = "customfield_10016")]
    pub story_points: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedField {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignee {
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Epic {
    #[serde(default)]
    pub name: String,
}

impl Issue {
    /// Assignee display name, or `None` when the issue is unassigned or the
    /// name came back empty.
    pub fn assignee_name(&self) -> Option<&str> {
        self.fields
            .assignee
            .as_ref()
            .map(|assignee| assignee.display_name.as_str())
            .filter(|name| !name.is_empty())
    }

    pub fn epic_name(&self) -> Option<&str> {
        self.fields
            .epic
            .as_ref()
            .map(|epic| epic.name.as_str())
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct BoardPage {
    values: Vec<Board>,
}

#[derive(Debug, Deserialize)]
struct SprintPage {
    values: Vec<Sprint>,
}

#[derive(Debug, Deserialize)]
struct IssuePage {
    issues: Vec<Issue>,
}

/// Client for the Jira Agile REST API. One shared blocking client is reused
/// for every call; each request authenticates with HTTP Basic (email + API
/// token).
#[derive(Clone)]
pub struct JiraClient {
    client: Client,
    base_url: String,
    email: String,
    api_token: String,
}

impl JiraClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            email: config.email.clone(),
            api_token: config.api_token.clone(),
        }
    }

    fn get(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .basic_auth(&self.email, Some(&self.api_token))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .context("Failed to send request")?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "API request failed: {} - {}",
                response.status(),
                response.text()?
            ));
        }

        Ok(response)
    }

    pub fn list_boards(&self) -> Result<Vec<Board>> {
        let url = format!("{}/rest/agile/1.0/board", self.base_url);

        let page: BoardPage = self
            .get(&url)?
            .json()
            .context("Failed to parse board list")?;
        Ok(page.values)
    }

    pub fn list_active_sprints(&self, board_id: u64) -> Result<Vec<Sprint>> {
        let url = format!(
            "{}/rest/agile/1.0/board/{}/sprint?state=active",
            self.base_url, board_id
        );

        let page: SprintPage = self
            .get(&url)?
            .json()
            .context("Failed to parse sprint list")?;
        Ok(page.values)
    }

    /// Fetches the issues in a sprint, restricted to the key/assignee/epic
    /// fields. The upstream default page size is accepted as-is, so very
    /// large sprints may come back truncated.
    pub fn list_sprint_issues(&self, sprint_id: u64) -> Result<Vec<Issue>> {
        let url = format!(
            "{}/rest/agile/1.0/sprint/{}/issue?fields=key,assignee,epic",
            self.base_url, sprint_id
        );

        let page: IssuePage = self
            .get(&url)?
            .json()
            .context("Failed to parse issue list")?;
        Ok(page.issues)
    }
}
