//! Canonical-entry selection for one day's issue activity.
//!
//! This is the single point deciding which ticket "wins" a day when several
//! were updated, so it must be deterministic and side-effect-free: completed
//! work beats in-progress work beats anything else, and ties keep the
//! original fetch order.

use crate::models::IssueEntry;

/// Statuses that mean a ticket reached a terminal state.
pub const COMPLETED_STATUSES: [&str; 5] = ["done", "completed", "verified", "closed", "resolved"];

pub const IN_PROGRESS_STATUS: &str = "in progress";

pub fn is_completed(status: &str) -> bool {
    COMPLETED_STATUSES
        .iter()
        .any(|s| status.trim().eq_ignore_ascii_case(s))
}

pub fn is_in_progress(status: &str) -> bool {
    status.trim().eq_ignore_ascii_case(IN_PROGRESS_STATUS)
}

/// Rank used for ordering: lower wins.
pub fn status_rank(status: &str) -> u8 {
    if is_completed(status) {
        0
    } else if is_in_progress(status) {
        1
    } else {
        2
    }
}

/// Choose the single most representative entry for a day, `None` when the day
/// has no issue activity. `min_by_key` returns the first of equally ranked
/// elements, which gives the stable tie-break on fetch order.
pub fn select_canonical(entries: &[IssueEntry]) -> Option<&IssueEntry> {
    entries.iter().min_by_key(|e| status_rank(&e.status))
}
