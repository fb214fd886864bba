//! In-memory implementation of [`SnapshotStore`].
//!
//! Backs the core-logic tests without touching disk; also handy for dry runs.
//! Semantics match the SQLite store: one snapshot per date, full overwrite.

use crate::errors::AppResult;
use crate::models::DailySnapshot;
use crate::store::SnapshotStore;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshots: BTreeMap<NaiveDate, DailySnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn put(&mut self, snapshot: &DailySnapshot) -> AppResult<()> {
        self.snapshots.insert(snapshot.date, snapshot.clone());
        Ok(())
    }

    fn get(&self, date: NaiveDate) -> AppResult<Option<DailySnapshot>> {
        Ok(self.snapshots.get(&date).cloned())
    }

    fn dates_in_range(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<NaiveDate>> {
        Ok(self
            .snapshots
            .range(start..=end)
            .map(|(d, _)| *d)
            .collect())
    }
}
