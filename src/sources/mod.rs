//! External activity sources (issue tracker and source control).
//!
//! Sources are fail-soft by contract: a network failure, missing credentials
//! or a malformed payload degrades to an empty entry list plus an error-marker
//! raw string (`{"error": "..."}`), recorded in the day's snapshot for later
//! diagnosis. The assembler never sees a hard error from a source.

pub mod github;
pub mod jira;

use crate::models::{IssueEntry, VcsEntry};
use chrono::NaiveDate;

/// Result of one source call: the parsed entries plus the raw response text
/// persisted in the snapshot.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome<T> {
    pub entries: Vec<T>,
    pub raw: String,
}

impl<T> FetchOutcome<T> {
    /// Error-marker outcome: no entries, raw text carries the failure.
    pub fn degraded(error: impl std::fmt::Display) -> Self {
        Self {
            entries: Vec::new(),
            raw: serde_json::json!({ "error": error.to_string() }).to_string(),
        }
    }
}

pub trait ActivitySource {
    fn fetch_issues(&self, project_key: &str, date: NaiveDate) -> FetchOutcome<IssueEntry>;
    fn fetch_vcs_activity(&self, username: &str, date: NaiveDate) -> FetchOutcome<VcsEntry>;
}

/// HTTP-backed source combining the Jira and GitHub clients. Either client
/// may be absent (missing credentials); its calls then degrade immediately.
pub struct HttpSource {
    jira: Option<jira::JiraClient>,
    github: Option<github::GithubClient>,
}

impl HttpSource {
    pub fn new(jira: Option<jira::JiraClient>, github: Option<github::GithubClient>) -> Self {
        Self { jira, github }
    }

    pub fn from_config(cfg: &crate::config::Config) -> Self {
        Self {
            jira: jira::JiraClient::from_config(&cfg.jira),
            github: github::GithubClient::from_config(&cfg.github),
        }
    }
}

impl ActivitySource for HttpSource {
    fn fetch_issues(&self, project_key: &str, date: NaiveDate) -> FetchOutcome<IssueEntry> {
        match &self.jira {
            None => FetchOutcome::degraded("Jira credentials not configured."),
            Some(client) => match client.fetch_issues(project_key, date) {
                Ok(outcome) => outcome,
                Err(e) => FetchOutcome::degraded(format!("Error fetching Jira data: {e}")),
            },
        }
    }

    fn fetch_vcs_activity(&self, username: &str, date: NaiveDate) -> FetchOutcome<VcsEntry> {
        match &self.github {
            None => FetchOutcome::degraded("GitHub token not configured."),
            Some(client) => match client.fetch_activity(username, date) {
                Ok(outcome) => outcome,
                Err(e) => FetchOutcome::degraded(format!("Error fetching GitHub data: {e}")),
            },
        }
    }
}

/// Error type internal to the HTTP clients; always converted into a degraded
/// outcome before it reaches the assembler.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    Malformed(String),

    #[error("HTTP {0}")]
    Status(u16),
}
