use serde::{Deserialize, Serialize};

/// One issue-tracker item touched on a given day.
/// `key` is the stable identity used for cross-day ticket tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueEntry {
    pub key: String,
    pub summary: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
    #[serde(default)]
    pub project: String,
    #[serde(default = "default_assignee")]
    pub assignee: String,
}

fn default_assignee() -> String {
    "Unassigned".to_string()
}

/// One source-control activity item (commit, branch/tag creation, pull
/// request event).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VcsEntry {
    #[serde(rename = "type")]
    pub kind: VcsEventType,
    pub repo: String,
    pub key: String,
    pub summary: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VcsEventType {
    Commit,
    #[serde(rename = "CreateEvent")]
    Create,
    #[serde(rename = "PullRequestEvent")]
    PullRequest,
}

impl VcsEventType {
    /// Parse a GitHub events-API `type` field; `None` for event types this
    /// system does not track.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "Commit" => Some(VcsEventType::Commit),
            "CreateEvent" => Some(VcsEventType::Create),
            "PullRequestEvent" => Some(VcsEventType::PullRequest),
            _ => None,
        }
    }
}
