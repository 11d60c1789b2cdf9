mod common;
use common::{
    init_test_db, login_admin, login_security, plog, seed_employee, seed_punch, setup_test_db,
    setup_test_session,
};
use predicates::prelude::*;
use punchlog::models::punch_type::PunchType;

#[test]
fn init_creates_the_database() {
    let db = setup_test_db("init_creates_db");
    init_test_db(&db);
    assert!(std::path::Path::new(&db).exists());
}

#[test]
fn security_login_requires_a_name() {
    let db = setup_test_db("security_login_no_name");
    let session = setup_test_session("security_login_no_name");
    init_test_db(&db);

    plog()
        .args(["--db", &db, "--session", &session, "login", "security"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("enter your name"));
}

#[test]
fn admin_login_rejects_a_wrong_password() {
    let db = setup_test_db("admin_login_wrong_pw");
    let session = setup_test_session("admin_login_wrong_pw");
    init_test_db(&db);

    plog()
        .args([
            "--db", &db, "--session", &session, "login", "admin", "--password", "nope",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("incorrect admin password"));
}

#[test]
fn login_leaves_no_session_when_the_store_cannot_be_opened() {
    // A directory is not openable as a SQLite file; the login must fail
    // before the session file is written.
    let dir = std::env::temp_dir().join("login_bad_store_punchlog");
    std::fs::create_dir_all(&dir).expect("create dir");
    let db = dir.to_string_lossy().to_string();
    let session = setup_test_session("login_bad_store");

    plog()
        .args([
            "--db", &db, "--session", &session, "login", "admin", "--password", "admin",
        ])
        .assert()
        .failure();

    assert!(!std::path::Path::new(&session).exists());
}

#[test]
fn status_reflects_login_and_logout() {
    let db = setup_test_db("status_cycle");
    let session = setup_test_session("status_cycle");
    init_test_db(&db);

    login_security(&db, &session, "Priya");

    plog()
        .args(["--db", &db, "--session", &session, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Priya"));

    plog()
        .args(["--db", &db, "--session", &session, "logout"])
        .assert()
        .success();

    plog()
        .args(["--db", &db, "--session", &session, "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn employee_add_requires_admin() {
    let db = setup_test_db("employee_add_guard");
    let session = setup_test_session("employee_add_guard");
    init_test_db(&db);

    login_security(&db, &session, "Priya");

    plog()
        .args([
            "--db", &db, "--session", &session, "employee", "add", "--name", "Bob",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("admin"));
}

#[test]
fn employee_add_rejects_an_empty_name() {
    let db = setup_test_db("employee_add_empty");
    let session = setup_test_session("employee_add_empty");
    init_test_db(&db);
    login_admin(&db, &session);

    plog()
        .args([
            "--db", &db, "--session", &session, "employee", "add", "--name", "   ",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn employee_add_and_list_round_trip() {
    let db = setup_test_db("employee_round_trip");
    let session = setup_test_session("employee_round_trip");
    init_test_db(&db);
    login_admin(&db, &session);

    plog()
        .args([
            "--db", &db, "--session", &session, "employee", "add", "--name", "Bob Martin",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Employee added"));

    plog()
        .args(["--db", &db, "--session", &session, "employee", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob Martin"));
}

#[test]
fn mark_requires_a_session() {
    let db = setup_test_db("mark_needs_login");
    let session = setup_test_session("mark_needs_login");
    init_test_db(&db);

    plog()
        .args(["--db", &db, "--session", &session, "mark", "some-id", "entry"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn guard_marks_a_punch_and_admin_sees_it() {
    let db = setup_test_db("mark_and_view");
    let session = setup_test_session("mark_and_view");
    init_test_db(&db);

    let emp = seed_employee(&db, "Bob Martin");

    login_security(&db, &session, "Priya");
    plog()
        .args(["--db", &db, "--session", &session, "mark", &emp, "entry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry recorded"));

    login_admin(&db, &session);
    plog()
        .args([
            "--db", &db, "--session", &session, "records", "--window", "today",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob Martin"))
        .stdout(predicate::str::contains("ENTRY"))
        .stdout(predicate::str::contains("Priya"));
}

#[test]
fn records_show_separate_date_and_time_columns() {
    let db = setup_test_db("records_date_time");
    let session = setup_test_session("records_date_time");
    init_test_db(&db);

    let emp = seed_employee(&db, "Bob Martin");

    login_security(&db, &session, "Priya");
    plog()
        .args(["--db", &db, "--session", &session, "mark", &emp, "entry"])
        .assert()
        .success();

    login_admin(&db, &session);

    let today = chrono::Local::now().format("%d/%m/%Y").to_string();
    plog()
        .args([
            "--db", &db, "--session", &session, "records", "--window", "today",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Date"))
        .stdout(predicate::str::contains("Time"))
        .stdout(predicate::str::contains(today));
}

#[test]
fn records_view_requires_admin() {
    let db = setup_test_db("records_needs_admin");
    let session = setup_test_session("records_needs_admin");
    init_test_db(&db);

    login_security(&db, &session, "Priya");

    plog()
        .args(["--db", &db, "--session", &session, "records"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("admin"));
}

#[test]
fn orphaned_punches_render_as_the_raw_id() {
    let db = setup_test_db("orphaned_punch");
    let session = setup_test_session("orphaned_punch");
    init_test_db(&db);

    // No such employee in the roster; the punch is still accepted.
    seed_punch(&db, "ghost-id", PunchType::Exit, "2024-05-02T08:00:00Z");

    login_admin(&db, &session);
    plog()
        .args(["--db", &db, "--session", &session, "records"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghost-id"));
}

#[test]
fn clear_with_no_matching_records_is_a_no_op() {
    let db = setup_test_db("clear_empty");
    let session = setup_test_session("clear_empty");
    init_test_db(&db);
    login_admin(&db, &session);

    plog()
        .args([
            "--db", &db, "--session", &session, "clear", "--window", "today", "--yes",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 affected"));
}

#[test]
fn clear_deletes_the_filtered_set_and_reports_the_count() {
    let db = setup_test_db("clear_filtered");
    let session = setup_test_session("clear_filtered");
    init_test_db(&db);

    let emp = seed_employee(&db, "Bob Martin");
    seed_punch(&db, &emp, PunchType::Entry, "2024-03-01T09:00:00Z");
    seed_punch(&db, &emp, PunchType::Exit, "2024-03-01T17:00:00Z");

    login_admin(&db, &session);

    plog()
        .args(["--db", &db, "--session", &session, "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 record(s)"));

    plog()
        .args(["--db", &db, "--session", &session, "records"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records"));
}

#[test]
fn audit_log_records_operations() {
    let db = setup_test_db("audit_log");
    let session = setup_test_session("audit_log");
    init_test_db(&db);
    login_admin(&db, &session);

    plog()
        .args([
            "--db", &db, "--session", &session, "employee", "add", "--name", "Bob",
        ])
        .assert()
        .success();

    plog()
        .args(["--db", &db, "--session", &session, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("employee_add"))
        .stdout(predicate::str::contains("login"));
}

#[test]
fn db_integrity_check_passes() {
    let db = setup_test_db("db_check");
    let session = setup_test_session("db_check");
    init_test_db(&db);
    login_admin(&db, &session);

    plog()
        .args(["--db", &db, "--session", &session, "db", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integrity check passed"));
}
