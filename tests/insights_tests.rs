mod common;

use common::*;
use predicates::prelude::*;
use std::fs;

fn seed_week(db: &str) {
    // 2024-03-04: one open ticket, two commits in repo-a.
    seed_snapshot(
        db,
        "2024-03-04",
        vec![issue("PROJ-1", "In Progress", "PROJ", "Wire up billing")],
        vec![commit("acme/repo-a", "Add invoice model"), commit("acme/repo-a", "Hook up API")],
    );
    // 2024-03-05: inactive (no snapshot at all).
    // 2024-03-06: the same ticket lands, one commit in repo-b.
    seed_snapshot(
        db,
        "2024-03-06",
        vec![issue("PROJ-1", "Done", "PROJ", "Wire up billing")],
        vec![commit("acme/repo-b", "Release notes")],
    );
}

#[test]
fn test_insights_report_numbers() {
    let db = setup_test_db("insights_numbers");
    init_db(&db);
    seed_week(&db);

    let out = temp_out("insights_numbers", "json");

    ts().args([
        "--db",
        &db,
        "--test",
        "insights",
        "--range",
        "2024-03-04:2024-03-06",
        "--out",
        &out,
        "--force",
    ])
    .assert()
    .success();

    let raw = fs::read_to_string(&out).expect("report file");
    let report: serde_json::Value = serde_json::from_str(&raw).expect("valid json");

    let cm = &report["commit_metrics"];
    assert_eq!(cm["total_commits"], 3);
    assert_eq!(cm["commits_per_day"]["2024-03-04"], 2);
    assert_eq!(cm["commits_per_day"]["2024-03-05"], 0);
    assert_eq!(cm["commits_per_day"]["2024-03-06"], 1);
    assert_eq!(cm["commits_per_repo"]["acme/repo-a"], 2);
    assert_eq!(cm["commits_per_repo"]["acme/repo-b"], 1);

    let jm = &report["jira_metrics"];
    assert_eq!(jm["total_tickets_touched"], 1);
    assert_eq!(jm["tickets_completed"], 1);
    assert_eq!(jm["tickets_in_progress"], 0);
    assert_eq!(jm["average_days_active"], 3.0);

    let dist = &report["distribution"];
    assert_eq!(dist["project_distribution_percent"]["PROJ"], 100.0);
    assert_eq!(dist["repo_distribution_percent"]["acme/repo-a"], 66.67);
    assert_eq!(dist["repo_distribution_percent"]["acme/repo-b"], 33.33);

    let cons = &report["consistency"];
    assert_eq!(cons["active_days"], 2);
    assert_eq!(cons["longest_inactivity_streak_days"], 1);
    assert_eq!(cons["context_switching_days"], 0);

    fs::remove_file(&db).ok();
    fs::remove_file(&out).ok();
}

#[test]
fn test_insights_prints_report_sections() {
    let db = setup_test_db("insights_print");
    init_db(&db);
    seed_week(&db);

    ts().args([
        "--db",
        &db,
        "--test",
        "insights",
        "--range",
        "2024-03-04:2024-03-06",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Productivity insights 2024-03-04 to 2024-03-06"))
    .stdout(predicate::str::contains("Commits"))
    .stdout(predicate::str::contains("completed:   1"))
    .stdout(predicate::str::contains("Consistency"));

    fs::remove_file(&db).ok();
}

#[test]
fn test_insights_over_empty_store_is_all_zero() {
    let db = setup_test_db("insights_empty");
    init_db(&db);

    let out = temp_out("insights_empty", "json");

    ts().args([
        "--db",
        &db,
        "--test",
        "insights",
        "--range",
        "2024-03-04:2024-03-06",
        "--out",
        &out,
        "--force",
    ])
    .assert()
    .success();

    let raw = fs::read_to_string(&out).expect("report file");
    let report: serde_json::Value = serde_json::from_str(&raw).expect("valid json");

    assert_eq!(report["commit_metrics"]["total_commits"], 0);
    assert_eq!(report["jira_metrics"]["total_tickets_touched"], 0);
    assert_eq!(report["consistency"]["active_days"], 0);
    assert_eq!(
        report["consistency"]["longest_inactivity_streak_days"],
        3
    );

    fs::remove_file(&db).ok();
    fs::remove_file(&out).ok();
}
