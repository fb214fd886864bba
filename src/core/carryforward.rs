//! Carry-forward resolution for days with no recorded activity.
//!
//! Policy: unfinished work silently continues across idle days. When a day has
//! zero issue entries and zero vcs entries, look back through the store up to
//! `lookback_days` prior days, nearest first, and reuse the first `in
//! progress` ticket found. A store read error during the scan counts as a
//! missing day; it never aborts the resolution.

use crate::core::selector::is_in_progress;
use crate::models::{IssueEntry, TimesheetRow};
use crate::store::SnapshotStore;
use chrono::{Days, NaiveDate};

pub const DEFAULT_LOOKBACK_DAYS: u32 = 5;

/// Find the nearest prior `in progress` issue entry within the lookback
/// window, or `None` when nothing qualifies.
pub fn find_carry_forward<S: SnapshotStore + ?Sized>(
    store: &S,
    date: NaiveDate,
    lookback_days: u32,
) -> Option<IssueEntry> {
    for offset in 1..=lookback_days {
        let prior = date.checked_sub_days(Days::new(offset as u64))?;

        let snapshot = match store.get(prior) {
            Ok(Some(s)) => s,
            _ => continue,
        };

        if let Some(entry) = snapshot
            .issue_entries
            .iter()
            .find(|e| is_in_progress(&e.status))
        {
            return Some(entry.clone());
        }
    }
    None
}

/// Build the timesheet row for a no-activity day: either a continuation of a
/// carried-forward ticket or the sentinel "no activity" row.
pub fn resolve_row<S: SnapshotStore + ?Sized>(
    store: &S,
    date: NaiveDate,
    lookback_days: u32,
) -> TimesheetRow {
    match find_carry_forward(store, date, lookback_days) {
        Some(entry) => TimesheetRow {
            date,
            project: entry.project.clone(),
            task: entry.summary.clone(),
            task_description: entry.description.clone(),
            status: "In Progress".to_string(),
            remark: format!("Continuing work on {}.", entry.summary),
        },
        None => TimesheetRow::no_activity(date),
    }
}
