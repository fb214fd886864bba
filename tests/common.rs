#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use tracksheet::models::{DailySnapshot, IssueEntry, VcsEntry, VcsEventType};
use tracksheet::store::SnapshotStore;
use tracksheet::store::initialize::init_store;
use tracksheet::store::pool::DbPool;

pub fn ts() -> Command {
    cargo_bin_cmd!("tracksheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tracksheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the snapshot database schema via the CLI
pub fn init_db(db_path: &str) {
    ts().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn issue(key: &str, status: &str, project: &str, summary: &str) -> IssueEntry {
    IssueEntry {
        key: key.to_string(),
        summary: summary.to_string(),
        description: format!("Description of {key}"),
        status: status.to_string(),
        project: project.to_string(),
        assignee: "Dev".to_string(),
    }
}

pub fn commit(repo: &str, summary: &str) -> VcsEntry {
    VcsEntry {
        kind: VcsEventType::Commit,
        repo: repo.to_string(),
        key: format!("sha-{repo}-{summary}"),
        summary: summary.to_string(),
        description: summary.to_string(),
    }
}

/// Seed one snapshot directly via the library store API
pub fn seed_snapshot(db_path: &str, day: &str, issues: Vec<IssueEntry>, commits: Vec<VcsEntry>) {
    let mut pool = DbPool::new(db_path).expect("open db");
    init_store(&pool.conn).expect("init store");

    let mut snap = DailySnapshot::empty(date(day));
    snap.issue_entries = issues;
    snap.vcs_entries = commits;
    pool.put(&snap).expect("put snapshot");
}
