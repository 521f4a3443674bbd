#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Duration, TimeZone, Utc};
use securegate::db::DbPool;
use securegate::models::{VisitorInput, VisitorType};
use securegate::store::{Clock, RecordStore};
use std::cell::Cell;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

pub fn gate() -> Command {
    cargo_bin_cmd!("securegate")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_securegate.sqlite", name));
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

/// Initialize a fresh DB through the CLI
pub fn init_db(db_path: &str) {
    gate()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Open the same database the CLI writes to
pub fn open_store(db_path: &str) -> RecordStore<DbPool> {
    RecordStore::open(DbPool::new(db_path).expect("open db"))
}

pub fn visitor(name: &str, kind: VisitorType, flat: &str) -> VisitorInput {
    VisitorInput {
        name: name.to_string(),
        mobile_number: "555-0000".to_string(),
        kind,
        flat_no: flat.to_string(),
        purpose: "visit".to_string(),
    }
}

/// Deterministic clock: every reading advances one second; `set` jumps.
#[derive(Clone)]
pub struct TestClock(Rc<Cell<DateTime<Utc>>>);

impl TestClock {
    pub fn new() -> Self {
        Self::starting_at(Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap())
    }

    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self(Rc::new(Cell::new(start)))
    }

    pub fn set(&self, at: DateTime<Utc>) {
        self.0.set(at);
    }

    pub fn peek(&self) -> DateTime<Utc> {
        self.0.get()
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.0.get();
        self.0.set(now + Duration::seconds(1));
        now
    }
}
