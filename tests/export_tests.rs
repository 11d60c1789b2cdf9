mod common;
use common::{
    init_test_db, login_admin, plog, seed_employee, seed_punch, setup_test_db,
    setup_test_session, temp_out,
};
use chrono::Utc;
use punchlog::export::build_rows;
use punchlog::models::punch::Punch;
use punchlog::models::punch_type::PunchType;
use std::collections::HashMap;
use std::fs;

#[test]
fn report_rows_resolve_names_and_format_columns() {
    let punches = vec![Punch {
        id: "a1".to_string(),
        employee_id: "e1".to_string(),
        kind: PunchType::Entry,
        timestamp: chrono::DateTime::parse_from_rfc3339("2024-03-01T09:00:00Z")
            .expect("ts")
            .with_timezone(&Utc),
        marked_by: "Alice".to_string(),
    }];

    let mut names = HashMap::new();
    names.insert("e1".to_string(), "Bob".to_string());

    let rows = build_rows(&punches, &names, &Utc, "%d/%m/%Y %H:%M");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].employee_name, "Bob");
    assert_eq!(rows[0].punch_type, "ENTRY");
    assert_eq!(rows[0].time, "01/03/2024 09:00");
    assert_eq!(rows[0].marked_by, "Alice");
}

#[test]
fn report_rows_fall_back_to_raw_id_for_unknown_employees() {
    let punches = vec![Punch {
        id: "a1".to_string(),
        employee_id: "ghost".to_string(),
        kind: PunchType::Exit,
        timestamp: Utc::now(),
        marked_by: "Admin".to_string(),
    }];

    let rows = build_rows(&punches, &HashMap::new(), &Utc, "%d/%m/%Y %H:%M");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].employee_name, "ghost");
    assert_eq!(rows[0].punch_type, "EXIT");
}

#[test]
fn export_csv_has_fixed_header_and_one_row_per_punch() {
    let db = setup_test_db("export_csv");
    let session = setup_test_session("export_csv");
    init_test_db(&db);

    let emp = seed_employee(&db, "Bob Martin");
    seed_punch(&db, &emp, PunchType::Entry, "2024-03-01T09:00:00Z");
    seed_punch(&db, &emp, PunchType::Exit, "2024-03-01T17:00:00Z");

    login_admin(&db, &session);

    let out = temp_out("export_csv", "csv");
    plog()
        .args([
            "--db", &db, "--session", &session, "export", "--format", "csv", "--file", &out,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("Employee Name,Type,Time,Marked By")
    );
    assert_eq!(lines.count(), 2);
    assert!(content.contains("Bob Martin"));
    assert!(content.contains("ENTRY"));
    assert!(content.contains("EXIT"));
}

#[test]
fn export_json_contains_report_rows() {
    let db = setup_test_db("export_json");
    let session = setup_test_session("export_json");
    init_test_db(&db);

    let emp = seed_employee(&db, "Dana");
    seed_punch(&db, &emp, PunchType::Entry, "2024-05-02T08:00:00Z");

    login_admin(&db, &session);

    let out = temp_out("export_json", "json");
    plog()
        .args([
            "--db", &db, "--session", &session, "export", "--format", "json", "--file", &out,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"employee_name\": \"Dana\""));
    assert!(content.contains("\"punch_type\": \"ENTRY\""));
    assert!(content.contains("\"marked_by\": \"Test Guard\""));
}

#[test]
fn export_xlsx_writes_a_workbook() {
    let db = setup_test_db("export_xlsx");
    let session = setup_test_session("export_xlsx");
    init_test_db(&db);

    let emp = seed_employee(&db, "Elif");
    seed_punch(&db, &emp, PunchType::Entry, "2024-05-02T08:00:00Z");

    login_admin(&db, &session);

    let out = temp_out("export_xlsx", "xlsx");
    plog()
        .args([
            "--db", &db, "--session", &session, "export", "--format", "xlsx", "--file", &out,
            "--force",
        ])
        .assert()
        .success();

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn export_filters_by_employee() {
    let db = setup_test_db("export_filter_emp");
    let session = setup_test_session("export_filter_emp");
    init_test_db(&db);

    let emp_a = seed_employee(&db, "Ana");
    let emp_b = seed_employee(&db, "Ben");
    seed_punch(&db, &emp_a, PunchType::Entry, "2024-05-02T08:00:00Z");
    seed_punch(&db, &emp_b, PunchType::Entry, "2024-05-02T08:05:00Z");

    login_admin(&db, &session);

    let out = temp_out("export_filter_emp", "csv");
    plog()
        .args([
            "--db", &db, "--session", &session, "export", "--format", "csv", "--file", &out,
            "--employee", &emp_a, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("Ana"));
    assert!(!content.contains("Ben"));
}

#[test]
fn export_rejects_relative_output_paths() {
    let db = setup_test_db("export_relative");
    let session = setup_test_session("export_relative");
    init_test_db(&db);
    login_admin(&db, &session);

    plog()
        .args([
            "--db", &db, "--session", &session, "export", "--format", "csv", "--file",
            "relative.csv", "--force",
        ])
        .assert()
        .failure();
}

#[test]
fn export_requires_an_admin_session() {
    let db = setup_test_db("export_needs_admin");
    let session = setup_test_session("export_needs_admin");
    init_test_db(&db);

    let out = temp_out("export_needs_admin", "csv");
    plog()
        .args([
            "--db", &db, "--session", &session, "export", "--format", "csv", "--file", &out,
            "--force",
        ])
        .assert()
        .failure();
}
