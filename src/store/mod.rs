//! Date-keyed snapshot persistence.
//!
//! The store holds exactly one [`DailySnapshot`] per calendar date. Writes are
//! full overwrites; partial-field updates are not supported. Everything that
//! reads activity history (carry-forward, insights, offline export) goes
//! through the [`SnapshotStore`] trait so it never depends on a particular
//! storage medium.

pub mod initialize;
pub mod log;
pub mod memory;
pub mod migrate;
pub mod pool;
pub mod snapshots;
pub mod stats;

use crate::errors::AppResult;
use crate::models::DailySnapshot;
use chrono::NaiveDate;

pub trait SnapshotStore {
    /// Idempotent full overwrite of the snapshot for `snapshot.date`.
    /// A persistence failure must propagate; it is never swallowed.
    fn put(&mut self, snapshot: &DailySnapshot) -> AppResult<()>;

    /// Fetch the snapshot for a date, `None` when absent.
    fn get(&self, date: NaiveDate) -> AppResult<Option<DailySnapshot>>;

    /// Ascending list of dates in `[start, end]` that have a stored snapshot.
    fn dates_in_range(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<NaiveDate>>;
}
