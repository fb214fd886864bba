//! Productivity insights over a range of stored snapshots.
//!
//! Read-only: the engine never fetches, it aggregates whatever snapshots
//! already exist in the store for the requested range. A date whose snapshot
//! is missing or unreadable counts as an inactive day, never as a hard
//! failure. Accumulators are explicit structures initialized before the date
//! walk and frozen into an immutable report at the end.

use crate::core::selector::{is_completed, is_in_progress};
use crate::models::report::{
    CommitMetrics, Consistency, Distribution, InsightsReport, JiraMetrics,
};
use crate::store::SnapshotStore;
use crate::utils::date::dates_between;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// A day counts as context switching when it touches more than this many
/// distinct repos plus projects.
pub const DEFAULT_CONTEXT_SWITCH_THRESHOLD: u32 = 2;

/// Cross-day tracking state for one distinct issue key.
struct TicketTrack {
    first_seen: NaiveDate,
    last_seen: NaiveDate,
    statuses: BTreeSet<String>, // lowercased
}

pub fn analyze<S: SnapshotStore + ?Sized>(
    store: &S,
    start: NaiveDate,
    end: NaiveDate,
    context_switch_threshold: u32,
) -> InsightsReport {
    let mut commits_per_day: BTreeMap<String, u32> = BTreeMap::new();
    let mut commits_per_repo: BTreeMap<String, u32> = BTreeMap::new();
    let mut total_commits: u32 = 0;

    let mut project_touches: BTreeMap<String, u32> = BTreeMap::new();
    let mut total_issue_touches: u32 = 0;

    let mut tickets: BTreeMap<String, TicketTrack> = BTreeMap::new();

    let mut active_days: u32 = 0;
    let mut streak: u32 = 0;
    let mut longest_streak: u32 = 0;
    let mut context_switching_days: u32 = 0;

    for date in dates_between(start, end) {
        // Unreadable is the same as absent.
        let snapshot = store.get(date).ok().flatten();
        let (issue_entries, vcs_entries) = match &snapshot {
            Some(s) => (&s.issue_entries[..], &s.vcs_entries[..]),
            None => (&[][..], &[][..]),
        };

        let date_key = date.format("%Y-%m-%d").to_string();
        commits_per_day.insert(date_key, vcs_entries.len() as u32);
        total_commits += vcs_entries.len() as u32;

        let active = !issue_entries.is_empty() || !vcs_entries.is_empty();
        if !active {
            streak += 1;
            longest_streak = longest_streak.max(streak);
            continue;
        }

        active_days += 1;
        streak = 0;

        let mut repos_today: BTreeSet<&str> = BTreeSet::new();
        for vcs in vcs_entries {
            *commits_per_repo.entry(vcs.repo.clone()).or_insert(0) += 1;
            repos_today.insert(vcs.repo.as_str());
        }

        let mut projects_today: BTreeSet<&str> = BTreeSet::new();
        for entry in issue_entries {
            *project_touches.entry(entry.project.clone()).or_insert(0) += 1;
            total_issue_touches += 1;
            projects_today.insert(entry.project.as_str());

            let track = tickets.entry(entry.key.clone()).or_insert(TicketTrack {
                first_seen: date,
                last_seen: date,
                statuses: BTreeSet::new(),
            });
            track.last_seen = date;
            track.statuses.insert(entry.status.trim().to_lowercase());
        }

        if (repos_today.len() + projects_today.len()) as u32 > context_switch_threshold {
            context_switching_days += 1;
        }
    }

    let mut tickets_completed: u32 = 0;
    let mut tickets_in_progress: u32 = 0;
    let mut total_active_span_days: i64 = 0;

    for track in tickets.values() {
        // Completed takes precedence; tickets matching neither bucket are
        // counted in neither.
        if track.statuses.iter().any(|s| is_completed(s)) {
            tickets_completed += 1;
        } else if track.statuses.iter().any(|s| is_in_progress(s)) {
            tickets_in_progress += 1;
        }

        total_active_span_days += (track.last_seen - track.first_seen).num_days() + 1;
    }

    let average_days_active = if tickets.is_empty() {
        0.0
    } else {
        round2(total_active_span_days as f64 / tickets.len() as f64)
    };

    InsightsReport {
        commit_metrics: CommitMetrics {
            total_commits,
            commits_per_day,
            commits_per_repo: commits_per_repo.clone(),
        },
        jira_metrics: JiraMetrics {
            total_tickets_touched: tickets.len() as u32,
            tickets_completed,
            tickets_in_progress,
            average_days_active,
        },
        distribution: Distribution {
            project_distribution_percent: percentages(&project_touches, total_issue_touches),
            repo_distribution_percent: percentages(&commits_per_repo, total_commits),
        },
        consistency: Consistency {
            active_days,
            longest_inactivity_streak_days: longest_streak,
            context_switching_days,
        },
    }
}

/// Percent share per key, 2 decimals; empty mapping when the total is 0.
fn percentages(counts: &BTreeMap<String, u32>, total: u32) -> BTreeMap<String, f64> {
    if total == 0 {
        return BTreeMap::new();
    }
    counts
        .iter()
        .map(|(k, &v)| (k.clone(), round2(100.0 * v as f64 / total as f64)))
        .collect()
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::{IssueEntry, VcsEntry, VcsEventType};
    use crate::models::snapshot::DailySnapshot;
    use crate::store::memory::MemoryStore;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn issue(key: &str, status: &str, project: &str) -> IssueEntry {
        IssueEntry {
            key: key.to_string(),
            summary: key.to_string(),
            description: String::new(),
            status: status.to_string(),
            project: project.to_string(),
            assignee: "Dev".to_string(),
        }
    }

    fn commit(repo: &str) -> VcsEntry {
        VcsEntry {
            kind: VcsEventType::Commit,
            repo: repo.to_string(),
            key: format!("sha-{repo}"),
            summary: "change".to_string(),
            description: String::new(),
        }
    }

    fn put(store: &mut MemoryStore, date: &str, issues: Vec<IssueEntry>, vcs: Vec<VcsEntry>) {
        let mut snap = DailySnapshot::empty(d(date));
        snap.issue_entries = issues;
        snap.vcs_entries = vcs;
        store.put(&snap).unwrap();
    }

    #[test]
    fn streak_counts_missing_and_empty_days() {
        let mut store = MemoryStore::new();
        put(&mut store, "2024-01-01", vec![], vec![commit("a/r")]);
        // Days 2-4 absent.
        put(&mut store, "2024-01-05", vec![issue("P-1", "Done", "P")], vec![]);

        let report = analyze(&store, d("2024-01-01"), d("2024-01-05"), 2);
        assert_eq!(report.consistency.active_days, 2);
        assert_eq!(report.consistency.longest_inactivity_streak_days, 3);
        assert_eq!(report.commit_metrics.total_commits, 1);
        assert_eq!(report.commit_metrics.commits_per_day["2024-01-03"], 0);
        assert_eq!(report.commit_metrics.commits_per_day.len(), 5);
    }

    #[test]
    fn present_but_empty_snapshot_is_inactive() {
        let mut store = MemoryStore::new();
        put(&mut store, "2024-01-01", vec![], vec![]);
        put(&mut store, "2024-01-02", vec![], vec![]);

        let report = analyze(&store, d("2024-01-01"), d("2024-01-02"), 2);
        assert_eq!(report.consistency.active_days, 0);
        assert_eq!(report.consistency.longest_inactivity_streak_days, 2);
    }

    #[test]
    fn ticket_classification_prefers_completed() {
        let mut store = MemoryStore::new();
        put(
            &mut store,
            "2024-01-01",
            vec![issue("P-1", "In Progress", "P"), issue("P-2", "To Do", "P")],
            vec![],
        );
        put(
            &mut store,
            "2024-01-03",
            vec![issue("P-1", "RESOLVED", "P"), issue("P-3", "in progress", "P")],
            vec![],
        );

        let report = analyze(&store, d("2024-01-01"), d("2024-01-03"), 2);
        let jm = &report.jira_metrics;
        assert_eq!(jm.total_tickets_touched, 3);
        // P-1 saw both in-progress and resolved: completed wins.
        assert_eq!(jm.tickets_completed, 1);
        assert_eq!(jm.tickets_in_progress, 1);
        // P-1 spans 3 days, P-2 and P-3 span 1: mean = 5/3.
        assert_eq!(jm.average_days_active, 1.67);
    }

    #[test]
    fn distribution_percentages_sum_to_about_100() {
        let mut store = MemoryStore::new();
        put(
            &mut store,
            "2024-01-01",
            vec![
                issue("A-1", "Done", "Alpha"),
                issue("A-2", "Done", "Alpha"),
                issue("B-1", "Done", "Beta"),
            ],
            vec![commit("r/one"), commit("r/one"), commit("r/two")],
        );

        let report = analyze(&store, d("2024-01-01"), d("2024-01-01"), 2);

        let proj_sum: f64 = report
            .distribution
            .project_distribution_percent
            .values()
            .sum();
        assert!((proj_sum - 100.0).abs() < 0.1, "sum was {proj_sum}");
        assert_eq!(
            report.distribution.project_distribution_percent["Alpha"],
            66.67
        );

        let repo_sum: f64 = report.distribution.repo_distribution_percent.values().sum();
        assert!((repo_sum - 100.0).abs() < 0.1, "sum was {repo_sum}");
    }

    #[test]
    fn empty_range_yields_empty_distributions() {
        let store = MemoryStore::new();
        let report = analyze(&store, d("2024-01-01"), d("2024-01-03"), 2);
        assert!(report.distribution.project_distribution_percent.is_empty());
        assert!(report.distribution.repo_distribution_percent.is_empty());
        assert_eq!(report.jira_metrics.average_days_active, 0.0);
        assert_eq!(report.jira_metrics.total_tickets_touched, 0);
    }

    #[test]
    fn context_switching_needs_more_than_two_distinct_sources() {
        let mut store = MemoryStore::new();
        // Repos {A,B} + project {P} = 3 distinct: counted.
        put(
            &mut store,
            "2024-01-01",
            vec![issue("P-1", "Done", "P")],
            vec![commit("A"), commit("B")],
        );
        // Repo {A} + project {P} = 2: not counted.
        put(
            &mut store,
            "2024-01-02",
            vec![issue("P-2", "Done", "P")],
            vec![commit("A")],
        );

        let report = analyze(&store, d("2024-01-01"), d("2024-01-02"), 2);
        assert_eq!(report.consistency.context_switching_days, 1);
    }

    #[test]
    fn analyze_is_idempotent_over_unchanged_store() {
        let mut store = MemoryStore::new();
        put(
            &mut store,
            "2024-01-01",
            vec![issue("P-1", "Done", "P")],
            vec![commit("r/one")],
        );
        put(&mut store, "2024-01-04", vec![issue("P-1", "Done", "P")], vec![]);

        let a = analyze(&store, d("2024-01-01"), d("2024-01-05"), 2);
        let b = analyze(&store, d("2024-01-01"), d("2024-01-05"), 2);

        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
