//! GitHub client: user events (branch/tag creation, pull requests) plus the
//! commit search API for one calendar day.

use crate::config::GithubConfig;
use crate::models::{VcsEntry, VcsEventType};
use crate::sources::{FetchOutcome, SourceError};
use crate::ui::messages::warning;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashSet;
use std::time::Duration;

const API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = concat!("tracksheet/", env!("CARGO_PKG_VERSION"));

pub struct GithubClient {
    token: String,
    client: reqwest::blocking::Client,
}

impl GithubClient {
    /// `None` when no token is configured.
    pub fn from_config(cfg: &GithubConfig) -> Option<Self> {
        if cfg.token.trim().is_empty() {
            return None;
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .ok()?;
        Some(Self {
            token: cfg.token.clone(),
            client,
        })
    }

    /// Fetch one day of activity. The two stages (events, commit search) fail
    /// independently: a stage error is reported as a warning and the other
    /// stage's entries still count, mirroring the fail-soft source contract.
    pub fn fetch_activity(
        &self,
        username: &str,
        date: NaiveDate,
    ) -> Result<FetchOutcome<VcsEntry>, SourceError> {
        let day = date.format("%Y-%m-%d").to_string();
        let mut entries = Vec::new();

        match self.fetch_events(username, &day) {
            Ok(mut evs) => entries.append(&mut evs),
            Err(e) => warning(format!("GitHub events fetch failed: {e}")),
        }

        match self.fetch_commits(username, &day) {
            Ok(mut commits) => entries.append(&mut commits),
            Err(e) => warning(format!("GitHub commit search failed: {e}")),
        }

        let raw = serde_json::to_string(&entries)
            .map_err(|e| SourceError::Malformed(e.to_string()))?;
        Ok(FetchOutcome { entries, raw })
    }

    fn get_json(&self, url: &str) -> Result<Value, SourceError> {
        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        Ok(resp.json()?)
    }

    fn fetch_events(&self, username: &str, day: &str) -> Result<Vec<VcsEntry>, SourceError> {
        let url = format!("{API_BASE}/users/{username}/events?per_page=100");
        let body = self.get_json(&url)?;
        let events = body
            .as_array()
            .ok_or_else(|| SourceError::Malformed("events payload is not an array".to_string()))?;

        let mut out = Vec::new();
        for event in events {
            let created_at = str_of(event.get("created_at"));
            let created_day = created_at.get(..10).unwrap_or_default();

            if created_day == day {
                if let Some(entry) = map_event(event, &created_at) {
                    out.push(entry);
                }
            } else if !created_day.is_empty() && created_day < day {
                // The events feed is ordered newest-first; once past the
                // requested day there is nothing left to collect.
                break;
            }
        }
        Ok(out)
    }

    fn fetch_commits(&self, username: &str, day: &str) -> Result<Vec<VcsEntry>, SourceError> {
        let url = format!(
            "{API_BASE}/search/commits?q=author:{username}+committer-date:{day}&sort=committer-date&order=desc&per_page=100"
        );
        let body = self.get_json(&url)?;
        let items = body
            .get("items")
            .and_then(Value::as_array)
            .ok_or_else(|| SourceError::Malformed("missing 'items' array".to_string()))?;

        let mut seen: HashSet<String> = HashSet::new();
        let mut out = Vec::new();

        for item in items {
            let sha = str_of(item.get("sha"));
            if sha.is_empty() || !seen.insert(sha.clone()) {
                continue;
            }

            let message = str_of(item.get("commit").and_then(|c| c.get("message")));
            out.push(VcsEntry {
                kind: VcsEventType::Commit,
                repo: item
                    .get("repository")
                    .and_then(|r| r.get("full_name"))
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                key: sha,
                summary: message.lines().next().unwrap_or_default().to_string(),
                description: message,
            });
        }
        Ok(out)
    }
}

/// Map one events-API item; event types outside Create/PullRequest are
/// skipped.
fn map_event(event: &Value, created_at: &str) -> Option<VcsEntry> {
    let repo = event
        .get("repo")
        .and_then(|r| r.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();
    let payload = event.get("payload").cloned().unwrap_or(Value::Null);

    match VcsEventType::from_str_opt(&str_of(event.get("type")))? {
        VcsEventType::Create => {
            let ref_type = str_of(payload.get("ref_type"));
            let created_ref = payload
                .get("ref")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string();
            Some(VcsEntry {
                kind: VcsEventType::Create,
                repo,
                key: format!("create-{created_ref}-{created_at}"),
                summary: format!("Created {ref_type} '{created_ref}'"),
                description: String::new(),
            })
        }
        VcsEventType::PullRequest => {
            let action = str_of(payload.get("action"));
            let pr = payload.get("pull_request").cloned().unwrap_or(Value::Null);
            let title = str_of(pr.get("title"));
            Some(VcsEntry {
                kind: VcsEventType::PullRequest,
                repo,
                key: str_of(pr.get("html_url")),
                summary: format!("PR {action}: {title}"),
                description: format!("Pull Request: {title} ({action})"),
            })
        }
        // Commits come from the search API, not the events feed.
        VcsEventType::Commit => None,
    }
}

fn str_of(v: Option<&Value>) -> String {
    v.and_then(Value::as_str).unwrap_or_default().to_string()
}
