//! SQLite implementation of the [`SnapshotStore`] trait.
//!
//! The `snapshots` table is keyed solely by the `YYYY-MM-DD` date string. The
//! entry lists travel as JSON text columns so the persisted record matches the
//! documented snapshot shape (`date`, `jira`, `github`, `raw_jira_response`,
//! `raw_github_response`).

use crate::errors::{AppError, AppResult};
use crate::models::entry::{IssueEntry, VcsEntry};
use crate::models::snapshot::DailySnapshot;
use crate::store::SnapshotStore;
use crate::store::pool::DbPool;
use chrono::{Local, NaiveDate};
use rusqlite::{OptionalExtension, Row, params};

impl SnapshotStore for DbPool {
    fn put(&mut self, snapshot: &DailySnapshot) -> AppResult<()> {
        let jira = serde_json::to_string(&snapshot.issue_entries)
            .map_err(|e| AppError::Store(format!("serialize issue entries: {e}")))?;
        let github = serde_json::to_string(&snapshot.vcs_entries)
            .map_err(|e| AppError::Store(format!("serialize vcs entries: {e}")))?;

        // Single-statement full overwrite: readers see either the old row or
        // the new one, never a torn write.
        self.conn.execute(
            "INSERT OR REPLACE INTO snapshots
             (date, jira, github, raw_jira_response, raw_github_response, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                snapshot.date_str(),
                jira,
                github,
                snapshot.raw_jira_response,
                snapshot.raw_github_response,
                Local::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn get(&self, date: NaiveDate) -> AppResult<Option<DailySnapshot>> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let row = self
            .conn
            .query_row(
                "SELECT date, jira, github, raw_jira_response, raw_github_response
                 FROM snapshots WHERE date = ?1",
                [date_str],
                map_row,
            )
            .optional()?;

        match row {
            None => Ok(None),
            Some(raw) => Ok(Some(decode_row(raw)?)),
        }
    }

    fn dates_in_range(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<NaiveDate>> {
        let mut stmt = self.conn.prepare(
            "SELECT date FROM snapshots
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date ASC",
        )?;

        let start_str = start.format("%Y-%m-%d").to_string();
        let end_str = end.format("%Y-%m-%d").to_string();

        let rows = stmt.query_map(params![start_str, end_str], |row| {
            row.get::<_, String>(0)
        })?;

        let mut out = Vec::new();
        for r in rows {
            let s = r?;
            let d = NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(s.clone()))?;
            out.push(d);
        }
        Ok(out)
    }
}

/// Intermediate row: date string plus the raw text columns.
struct SnapshotRow {
    date: String,
    jira: String,
    github: String,
    raw_jira_response: String,
    raw_github_response: String,
}

fn map_row(row: &Row) -> rusqlite::Result<SnapshotRow> {
    Ok(SnapshotRow {
        date: row.get(0)?,
        jira: row.get(1)?,
        github: row.get(2)?,
        raw_jira_response: row.get(3)?,
        raw_github_response: row.get(4)?,
    })
}

fn decode_row(raw: SnapshotRow) -> AppResult<DailySnapshot> {
    let date = NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(raw.date.clone()))?;

    let issue_entries: Vec<IssueEntry> = serde_json::from_str(&raw.jira)
        .map_err(|e| AppError::Store(format!("decode issue entries for {}: {e}", raw.date)))?;
    let vcs_entries: Vec<VcsEntry> = serde_json::from_str(&raw.github)
        .map_err(|e| AppError::Store(format!("decode vcs entries for {}: {e}", raw.date)))?;

    Ok(DailySnapshot {
        date,
        issue_entries,
        vcs_entries,
        raw_jira_response: raw.raw_jira_response,
        raw_github_response: raw.raw_github_response,
    })
}
