use super::entry::{IssueEntry, VcsEntry};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The full activity record for one calendar day.
///
/// Exactly one snapshot exists per date in the store; writing a snapshot for
/// an already-present date fully replaces it. The persisted JSON shape keeps
/// the upstream field names (`jira`, `github`, `raw_*_response`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySnapshot {
    pub date: NaiveDate, // serialized as "YYYY-MM-DD"
    #[serde(rename = "jira")]
    pub issue_entries: Vec<IssueEntry>,
    #[serde(rename = "github")]
    pub vcs_entries: Vec<VcsEntry>,
    #[serde(default)]
    pub raw_jira_response: String,
    #[serde(default)]
    pub raw_github_response: String,
}

impl DailySnapshot {
    /// Empty snapshot for a date with no recorded activity.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            issue_entries: Vec::new(),
            vcs_entries: Vec::new(),
            raw_jira_response: String::new(),
            raw_github_response: String::new(),
        }
    }

    /// A day is active when at least one entry of either kind was recorded.
    pub fn is_active(&self) -> bool {
        !self.issue_entries.is_empty() || !self.vcs_entries.is_empty()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::VcsEventType;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn empty_snapshot_is_inactive() {
        let snap = DailySnapshot::empty(d("2024-01-05"));
        assert!(!snap.is_active());
        assert_eq!(snap.date_str(), "2024-01-05");
    }

    #[test]
    fn serializes_with_upstream_field_names() {
        let mut snap = DailySnapshot::empty(d("2024-01-05"));
        snap.vcs_entries.push(VcsEntry {
            kind: VcsEventType::Commit,
            repo: "acme/api".into(),
            key: "abc123".into(),
            summary: "Fix pagination".into(),
            description: "Fix pagination\n\nDetails".into(),
        });
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["date"], "2024-01-05");
        assert!(json["jira"].as_array().unwrap().is_empty());
        assert_eq!(json["github"][0]["type"], "Commit");
        assert_eq!(json["raw_jira_response"], "");
    }
}
