//! Schema creation and upgrades for the snapshot database.
//!
//! All schema is guaranteed here; nothing else in the crate issues CREATE
//! TABLE statements. Migrations are idempotent so `init`, `db --migrate` and
//! the command handlers can all call [`run_pending_migrations`] safely.

use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `snapshots` table: one row per calendar date, JSON entry
/// payloads plus the raw upstream responses kept for diagnosis.
fn ensure_snapshots_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS snapshots (
            date                TEXT PRIMARY KEY,
            jira                TEXT NOT NULL DEFAULT '[]',
            github              TEXT NOT NULL DEFAULT '[]',
            raw_jira_response   TEXT NOT NULL DEFAULT '',
            raw_github_response TEXT NOT NULL DEFAULT '',
            created_at          TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists in the connected database.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let found: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(found.is_some())
}

/// Run all pending migrations. Safe to call repeatedly.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    ensure_snapshots_table(conn)?;

    // Sanity: both tables must exist after a migration run.
    debug_assert!(table_exists(conn, "log")?);
    debug_assert!(table_exists(conn, "snapshots")?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();
        assert!(table_exists(&conn, "snapshots").unwrap());
        assert!(table_exists(&conn, "log").unwrap());
    }
}
