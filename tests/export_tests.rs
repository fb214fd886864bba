mod common;

use common::*;
use std::fs;

#[test]
fn test_export_csv_rebuilds_rows_from_store() {
    let db = setup_test_db("export_csv");
    init_db(&db);

    seed_snapshot(
        &db,
        "2024-03-04",
        vec![issue("PROJ-1", "Done", "PROJ", "Wire up billing")],
        vec![],
    );

    let out = temp_out("export_csv", "csv");

    ts().args([
        "--db",
        &db,
        "--test",
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--range",
        "2024-03-04:2024-03-05",
        "--force",
    ])
    .assert()
    .success();

    let raw = fs::read_to_string(&out).expect("csv file");

    // Header row carries all twelve timesheet columns.
    assert!(raw.starts_with(
        "Employee Id,Employee Name,Date,Project,Task,Task Description,\
         Authorized Hours,Billable,Role,Site,Status,Remark"
    ));

    // Seeded day plus the no-activity sentinel for the empty one.
    assert!(raw.contains("2024-03-04"));
    assert!(raw.contains("Wire up billing"));
    assert!(raw.contains("Done"));
    assert!(raw.contains("No activity found."));

    // Output is newest first.
    let empty_pos = raw.find("2024-03-05").expect("sentinel row");
    let seeded_pos = raw.find("2024-03-04").expect("seeded row");
    assert!(empty_pos < seeded_pos);

    fs::remove_file(&db).ok();
    fs::remove_file(&out).ok();
}

#[test]
fn test_export_json_contains_renamed_fields() {
    let db = setup_test_db("export_json");
    init_db(&db);

    seed_snapshot(
        &db,
        "2024-03-04",
        vec![issue("PROJ-2", "In Progress", "PROJ", "Audit log cleanup")],
        vec![],
    );

    let out = temp_out("export_json", "json");

    ts().args([
        "--db",
        &db,
        "--test",
        "export",
        "--format",
        "json",
        "--file",
        &out,
        "--range",
        "2024-03-04:2024-03-04",
        "--force",
    ])
    .assert()
    .success();

    let raw = fs::read_to_string(&out).expect("json file");
    let rows: serde_json::Value = serde_json::from_str(&raw).expect("valid json");

    let row = &rows[0];
    assert_eq!(row["Date"], "2024-03-04");
    assert_eq!(row["Project"], "PROJ");
    assert_eq!(row["Task"], "Audit log cleanup");
    assert_eq!(row["Status"], "In Progress");
    assert_eq!(row["Billable"], "Yes");
    assert_eq!(row["Authorized Hours"], "8");

    fs::remove_file(&db).ok();
    fs::remove_file(&out).ok();
}

#[test]
fn test_export_xlsx_writes_file() {
    let db = setup_test_db("export_xlsx");
    init_db(&db);

    seed_snapshot(
        &db,
        "2024-03-04",
        vec![issue("PROJ-3", "Done", "PROJ", "Patch release")],
        vec![],
    );

    let out = temp_out("export_xlsx", "xlsx");

    ts().args([
        "--db",
        &db,
        "--test",
        "export",
        "--format",
        "xlsx",
        "--file",
        &out,
        "--range",
        "2024-03-04:2024-03-04",
        "--force",
    ])
    .assert()
    .success();

    let meta = fs::metadata(&out).expect("xlsx file");
    assert!(meta.len() > 0);

    fs::remove_file(&db).ok();
    fs::remove_file(&out).ok();
}

#[test]
fn test_export_rejects_mismatched_range_grammar() {
    let db = setup_test_db("export_badrange");
    init_db(&db);

    let out = temp_out("export_badrange", "csv");

    // Mixed granularity endpoints are rejected.
    ts().args([
        "--db",
        &db,
        "--test",
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--range",
        "2024-03:2024-03-05",
        "--force",
    ])
    .assert()
    .failure();

    fs::remove_file(&db).ok();
}
