#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use punchlog::core::punches::PunchLogic;
use punchlog::core::roster::RosterLogic;
use punchlog::db::initialize::init_db;
use punchlog::db::pool::DbPool;
use punchlog::models::punch_type::PunchType;
use punchlog::models::role::Role;
use punchlog::session::Session;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn plog() -> Command {
    cargo_bin_cmd!("punchlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique session file path inside the system temp dir
pub fn setup_test_session(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchlog_session.yml", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the database schema via the CLI
pub fn init_test_db(db_path: &str) {
    plog()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Log in as admin (default password from the default config)
pub fn login_admin(db_path: &str, session_path: &str) {
    plog()
        .args([
            "--db",
            db_path,
            "--session",
            session_path,
            "login",
            "admin",
            "--password",
            "admin",
        ])
        .assert()
        .success();
}

/// Log in as a security guard with the given display name
pub fn login_security(db_path: &str, session_path: &str, name: &str) {
    plog()
        .args([
            "--db",
            db_path,
            "--session",
            session_path,
            "login",
            "security",
            "--name",
            name,
        ])
        .assert()
        .success();
}

/// Add an employee directly via the library API and return the assigned id
pub fn seed_employee(db_path: &str, name: &str) -> String {
    let mut pool = DbPool::new(db_path).expect("open db");
    init_db(&pool.conn).expect("init db");

    let admin = Session {
        role: Role::Admin,
        display_name: None,
    };
    RosterLogic::add(&mut pool, name, &admin).expect("add employee")
}

/// Record a punch with an explicit timestamp via the library API
pub fn seed_punch(db_path: &str, employee_id: &str, kind: PunchType, ts_rfc3339: &str) -> String {
    let mut pool = DbPool::new(db_path).expect("open db");
    init_db(&pool.conn).expect("init db");

    let ts: DateTime<Utc> = DateTime::parse_from_rfc3339(ts_rfc3339)
        .expect("parse timestamp")
        .with_timezone(&Utc);

    PunchLogic::record(&mut pool, employee_id, kind, "Test Guard", ts).expect("record punch")
}
