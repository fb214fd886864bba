//! Timesheet assembly: per-date fetch, store, select, summarize, row.
//!
//! Dates are processed in ascending order so carry-forward resolution can see
//! earlier days already persisted; the finished row list is then sorted
//! descending for presentation. The two orderings are separate phases and
//! neither is derived from the other.

use crate::core::carryforward;
use crate::core::selector::select_canonical;
use crate::errors::AppResult;
use crate::models::{DailySnapshot, IssueEntry, TimesheetRow, VcsEntry};
use crate::sources::ActivitySource;
use crate::store::SnapshotStore;
use crate::summarize::Summarizer;
use crate::ui::messages;
use crate::utils::date::dates_between;
use crate::utils::text::truncate_chars;
use chrono::NaiveDate;

/// Issue descriptions are clipped to this many characters in summarizer
/// context (and in any summarizer-failure fallback snippet).
pub const ISSUE_DESCRIPTION_CONTEXT_CHARS: usize = 500;

/// Per-run identifiers for the external sources.
pub struct SourceCredentials {
    pub project_key: String,
    pub username: String,
}

pub struct Assembler<'a> {
    store: &'a mut dyn SnapshotStore,
    source: &'a dyn ActivitySource,
    summarizer: &'a dyn Summarizer,
    lookback_days: u32,
}

impl<'a> Assembler<'a> {
    pub fn new(
        store: &'a mut dyn SnapshotStore,
        source: &'a dyn ActivitySource,
        summarizer: &'a dyn Summarizer,
        lookback_days: u32,
    ) -> Self {
        Self {
            store,
            source,
            summarizer,
            lookback_days,
        }
    }

    /// Assemble one row per date in `[start, end]`, newest date first.
    pub fn assemble(
        &mut self,
        creds: &SourceCredentials,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TimesheetRow>> {
        let mut rows = Vec::new();

        // Phase 1: ascending fetch-and-store walk.
        for date in dates_between(start, end) {
            let issues = self.source.fetch_issues(&creds.project_key, date);
            let vcs = self.source.fetch_vcs_activity(&creds.username, date);

            let snapshot = DailySnapshot {
                date,
                issue_entries: issues.entries,
                vcs_entries: vcs.entries,
                raw_jira_response: issues.raw,
                raw_github_response: vcs.raw,
            };

            // Persist unconditionally, even for empty days. A write failure
            // is fatal for this date only: report it and move on.
            if let Err(e) = self.store.put(&snapshot) {
                messages::error(format!("Failed to store snapshot for {date}: {e}"));
                continue;
            }

            rows.push(build_row(
                &*self.store,
                self.summarizer,
                &snapshot,
                self.lookback_days,
            ));
        }

        // Phase 2: descending display order.
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }
}

/// Row construction priority, first match wins: canonical issue entry, then
/// vcs-only synthetic row, then carry-forward.
pub fn build_row(
    store: &dyn SnapshotStore,
    summarizer: &dyn Summarizer,
    snapshot: &DailySnapshot,
    lookback_days: u32,
) -> TimesheetRow {
    let date_str = snapshot.date_str();

    if let Some(entry) = select_canonical(&snapshot.issue_entries) {
        let issue_ctx = issue_context(entry);
        let vcs_ctx = vcs_context(&snapshot.vcs_entries);
        let remark = summarizer.summarize(&issue_ctx, &vcs_ctx, &date_str);

        return TimesheetRow {
            date: snapshot.date,
            project: entry.project.clone(),
            task: entry.summary.clone(),
            task_description: entry.description.clone(),
            status: entry.status.clone(),
            remark,
        };
    }

    if !snapshot.vcs_entries.is_empty() {
        let vcs_ctx = vcs_context(&snapshot.vcs_entries);
        let remark = summarizer.summarize("", &vcs_ctx, &date_str);

        return TimesheetRow {
            date: snapshot.date,
            project: "GitHub/General".to_string(),
            task: "General Development Activities".to_string(),
            task_description: "See Remarks for details.".to_string(),
            status: "Completed".to_string(),
            remark,
        };
    }

    carryforward::resolve_row(store, snapshot.date, lookback_days)
}

/// Rebuild rows for a range purely from stored snapshots, no fetching.
/// Dates without a snapshot are treated as empty days, so carry-forward and
/// the sentinel row still apply.
pub fn rows_from_store(
    store: &dyn SnapshotStore,
    summarizer: &dyn Summarizer,
    start: NaiveDate,
    end: NaiveDate,
    lookback_days: u32,
) -> Vec<TimesheetRow> {
    let mut rows = Vec::new();

    for date in dates_between(start, end) {
        let snapshot = store
            .get(date)
            .ok()
            .flatten()
            .unwrap_or_else(|| DailySnapshot::empty(date));
        rows.push(build_row(store, summarizer, &snapshot, lookback_days));
    }

    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

/// Summarizer context for the canonical issue entry, description clipped.
pub fn issue_context(entry: &IssueEntry) -> String {
    format!(
        "[{}] {} (status: {}, project: {}, assignee: {})\n{}",
        entry.key,
        entry.summary,
        entry.status,
        entry.project,
        entry.assignee,
        truncate_chars(&entry.description, ISSUE_DESCRIPTION_CONTEXT_CHARS),
    )
}

/// Bullet-list context over the day's vcs entries; empty string for none.
pub fn vcs_context(entries: &[VcsEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("- [{}] {}", e.repo, e.summary))
        .collect::<Vec<_>>()
        .join("\n")
}
