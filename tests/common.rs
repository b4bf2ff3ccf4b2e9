#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use gatelog::core::clock::FixedClock;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gl() -> Command {
    let mut cmd = cargo_bin_cmd!("gatelog");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gatelog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_gatelog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB through the CLI, without touching the user's config file.
pub fn init_db(db_path: &str) {
    gl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// A clock frozen at the given RFC 3339 instant.
pub fn clock_at(rfc3339: &str) -> FixedClock {
    FixedClock::parse(rfc3339).expect("valid rfc3339 timestamp")
}

/// Today's key as the binary will see it.
pub fn today_key() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
