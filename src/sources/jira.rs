//! Jira REST client: issues updated on a given day for one project.

use crate::config::JiraConfig;
use crate::models::IssueEntry;
use crate::sources::{FetchOutcome, SourceError};
use chrono::NaiveDate;
use serde_json::Value;
use std::time::Duration;

const SEARCH_FIELDS: &str = "summary,status,updated,description,assignee,project";
const MAX_RESULTS: u32 = 50;

pub struct JiraClient {
    base_url: String,
    email: String,
    api_token: String,
    client: reqwest::blocking::Client,
}

impl JiraClient {
    /// `None` when the config has no usable Jira credentials.
    pub fn from_config(cfg: &JiraConfig) -> Option<Self> {
        if cfg.url.trim().is_empty() || cfg.api_token.trim().is_empty() {
            return None;
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .ok()?;
        Some(Self {
            base_url: cfg.url.trim_end_matches('/').to_string(),
            email: cfg.email.clone(),
            api_token: cfg.api_token.clone(),
            client,
        })
    }

    pub fn fetch_issues(
        &self,
        project_key: &str,
        date: NaiveDate,
    ) -> Result<FetchOutcome<IssueEntry>, SourceError> {
        let day = date.format("%Y-%m-%d").to_string();
        let jql = format!("project = {project_key} AND updated >= '{day}' AND updated < '{day} 23:59'");

        let url = format!("{}/rest/api/2/search", self.base_url);
        let resp = self
            .client
            .get(&url)
            .basic_auth(&self.email, Some(&self.api_token))
            .query(&[
                ("jql", jql.as_str()),
                ("maxResults", &MAX_RESULTS.to_string()),
                ("fields", SEARCH_FIELDS),
            ])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body: Value = resp.json()?;
        let issues = body
            .get("issues")
            .and_then(Value::as_array)
            .ok_or_else(|| SourceError::Malformed("missing 'issues' array".to_string()))?;

        let entries: Vec<IssueEntry> = issues.iter().map(map_issue).collect();
        let raw = serde_json::to_string(&entries)
            .map_err(|e| SourceError::Malformed(e.to_string()))?;

        Ok(FetchOutcome { entries, raw })
    }
}

/// Flatten one Jira issue into an [`IssueEntry`]. Absent fields become empty
/// strings rather than errors; a single odd issue must not sink the day.
fn map_issue(issue: &Value) -> IssueEntry {
    let fields = issue.get("fields").cloned().unwrap_or(Value::Null);

    IssueEntry {
        key: str_of(issue.get("key")),
        summary: str_of(fields.get("summary")),
        description: str_of(fields.get("description")),
        status: str_of(fields.get("status").and_then(|s| s.get("name"))),
        project: str_of(fields.get("project").and_then(|p| p.get("name"))),
        assignee: fields
            .get("assignee")
            .and_then(|a| a.get("displayName"))
            .and_then(Value::as_str)
            .unwrap_or("Unassigned")
            .to_string(),
    }
}

fn str_of(v: Option<&Value>) -> String {
    v.and_then(Value::as_str).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_full_issue_payload() {
        let issue: Value = serde_json::from_str(
            r#"{
                "key": "PROJ-12",
                "fields": {
                    "summary": "Fix login flow",
                    "description": "Steps...",
                    "status": {"name": "In Progress"},
                    "project": {"name": "Platform"},
                    "assignee": {"displayName": "Jordan Doe"}
                }
            }"#,
        )
        .unwrap();

        let e = map_issue(&issue);
        assert_eq!(e.key, "PROJ-12");
        assert_eq!(e.status, "In Progress");
        assert_eq!(e.project, "Platform");
        assert_eq!(e.assignee, "Jordan Doe");
    }

    #[test]
    fn missing_assignee_maps_to_unassigned() {
        let issue: Value =
            serde_json::from_str(r#"{"key":"PROJ-1","fields":{"summary":"X","assignee":null}}"#)
                .unwrap();
        let e = map_issue(&issue);
        assert_eq!(e.assignee, "Unassigned");
        assert_eq!(e.status, "");
    }

    #[test]
    fn client_requires_url_and_token() {
        let cfg = JiraConfig {
            url: String::new(),
            email: "a@b.c".into(),
            api_token: "tok".into(),
            project_key: "PROJ".into(),
        };
        assert!(JiraClient::from_config(&cfg).is_none());
    }
}
