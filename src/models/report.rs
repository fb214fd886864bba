//! Productivity insights report model.
//!
//! The report is computed fresh on every `insights` run and never persisted.
//! All maps are BTreeMaps so two runs over identical store contents serialize
//! to byte-identical JSON.

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsReport {
    pub commit_metrics: CommitMetrics,
    pub jira_metrics: JiraMetrics,
    pub distribution: Distribution,
    pub consistency: Consistency,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitMetrics {
    pub total_commits: u32,
    /// Vcs-entry count for every date in the range, 0 when absent.
    pub commits_per_day: BTreeMap<String, u32>,
    pub commits_per_repo: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JiraMetrics {
    pub total_tickets_touched: u32,
    pub tickets_completed: u32,
    pub tickets_in_progress: u32,
    /// Mean of (last_seen - first_seen + 1) over touched tickets, 2 decimals.
    pub average_days_active: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution {
    pub project_distribution_percent: BTreeMap<String, f64>,
    pub repo_distribution_percent: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Consistency {
    pub active_days: u32,
    pub longest_inactivity_streak_days: u32,
    pub context_switching_days: u32,
}
