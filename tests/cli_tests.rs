use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rusqlite::{Connection, params};
use std::fs;

mod common;
use common::{gl, init_db, setup_test_db, temp_out, today_key};

fn stored_logs(db_path: &str) -> serde_json::Value {
    let conn = Connection::open(db_path).expect("open db");
    let raw: String = conn
        .query_row("SELECT value FROM kv WHERE key = 'allLogs'", [], |r| {
            r.get(0)
        })
        .expect("allLogs stored");
    serde_json::from_str(&raw).expect("allLogs is JSON")
}

fn today_rows(db_path: &str) -> Vec<serde_json::Value> {
    stored_logs(db_path)[today_key()]
        .as_array()
        .expect("today's rows")
        .clone()
}

#[test]
fn test_init_creates_today_sheet() {
    let db_path = setup_test_db("cli_init");

    gl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database"));

    let rows = today_rows(&db_path);
    assert_eq!(rows.len(), 15);
    assert!(rows.iter().all(|r| r["name"] == "" && r["entryTime"].is_null()));
}

#[test]
fn test_show_renders_grid_headers() {
    let db_path = setup_test_db("cli_show");
    init_db(&db_path);

    gl().args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Name").and(contains("Vehicle")).and(contains("Date:")));
}

#[test]
fn test_set_name_on_last_row_adds_row() {
    let db_path = setup_test_db("cli_set_last");
    init_db(&db_path);

    gl().args(["--db", &db_path, "set", "15", "name", "Youssef"])
        .assert()
        .success()
        .stdout(contains("Added blank row #16"));

    let rows = today_rows(&db_path);
    assert_eq!(rows.len(), 16);
    assert_eq!(rows[14]["name"], "Youssef");

    gl().args(["--db", &db_path, "set", "3", "vehicle", "Pickup"])
        .assert()
        .success();
    assert_eq!(today_rows(&db_path).len(), 16);
    assert_eq!(today_rows(&db_path)[2]["vehicleType"], "Pickup");
}

#[test]
fn test_set_rejects_unknown_field_and_id() {
    let db_path = setup_test_db("cli_set_errors");
    init_db(&db_path);

    gl().args(["--db", &db_path, "set", "1", "colour", "red"])
        .assert()
        .failure()
        .stderr(contains("Invalid field"));

    gl().args(["--db", &db_path, "set", "999", "name", "Nobody"])
        .assert()
        .failure()
        .stderr(contains("No entry #999"));
}

#[test]
fn test_in_out_sequence() {
    let db_path = setup_test_db("cli_in_out");
    init_db(&db_path);

    // no name yet: entry stamp is refused, nothing stored
    gl().args(["--db", &db_path, "in", "1"])
        .assert()
        .success()
        .stderr(contains("no name"));
    assert!(today_rows(&db_path)[0]["entryTime"].is_null());

    // exit before entry is refused
    gl().args(["--db", &db_path, "set", "1", "name", "Laila"])
        .assert()
        .success();
    gl().args(["--db", &db_path, "out", "1"])
        .assert()
        .success()
        .stderr(contains("no entry time"));
    assert!(today_rows(&db_path)[0]["exitTime"].is_null());

    gl().args(["--db", &db_path, "in", "1"])
        .assert()
        .success()
        .stdout(contains("entry time of #1"));
    let first = today_rows(&db_path)[0]["entryTime"].clone();
    assert!(first.is_string());

    // second click is a no-op
    gl().args(["--db", &db_path, "in", "1"])
        .assert()
        .success()
        .stdout(contains("left unchanged"));
    assert_eq!(today_rows(&db_path)[0]["entryTime"], first);

    gl().args(["--db", &db_path, "out", "1"])
        .assert()
        .success();
    assert!(today_rows(&db_path)[0]["exitTime"].is_string());
}

#[test]
fn test_add_requires_name() {
    let db_path = setup_test_db("cli_add_empty");

    gl().args(["--db", &db_path, "add", "--name", "  "])
        .assert()
        .failure()
        .stderr(contains("a name is required"));

    // rejected before the database was touched
    let conn = Connection::open(&db_path).expect("open db");
    let has_kv: bool = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='kv'",
            [],
            |r| r.get::<_, i64>(0),
        )
        .map(|n| n > 0)
        .expect("query sqlite_master");
    assert!(!has_kv);
}

#[test]
fn test_add_fills_first_blank_row() {
    let db_path = setup_test_db("cli_add");
    init_db(&db_path);

    gl().args([
        "--db",
        &db_path,
        "add",
        "--name",
        "Nour",
        "--capacity",
        "Contractor",
        "--vehicle",
        "Van",
    ])
    .assert()
    .success()
    .stdout(contains("row #1"));

    let rows = today_rows(&db_path);
    assert_eq!(rows[0]["name"], "Nour");
    assert_eq!(rows[0]["capacity"], "Contractor");
    assert_eq!(rows.len(), 15);
}

#[test]
fn test_legacy_entries_are_migrated_on_open() {
    let db_path = setup_test_db("cli_legacy");
    init_db(&db_path);

    {
        let conn = Connection::open(&db_path).expect("open db");
        conn.execute("DELETE FROM kv", []).expect("clear kv");
        conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES ('logEntries', ?1, '')",
            params![
                r#"[{"id":42,"name":"Legacy Guest","entryTime":"07:10 AM","exitTime":null,"capacity":"","vehicleType":"","notes":""}]"#
            ],
        )
        .expect("insert legacy");
    }

    gl().args(["--db", &db_path, "history"])
        .assert()
        .success()
        .stdout(contains(today_key()));

    let logs = stored_logs(&db_path);
    let rows = logs[today_key()].as_array().expect("today migrated");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Legacy Guest");

    let conn = Connection::open(&db_path).expect("open db");
    let legacy_left: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv WHERE key = 'logEntries'", [], |r| {
            r.get(0)
        })
        .expect("count");
    assert_eq!(legacy_left, 0);
}

#[test]
fn test_history_lists_most_recent_first() {
    let db_path = setup_test_db("cli_history");
    init_db(&db_path);

    {
        let conn = Connection::open(&db_path).expect("open db");
        let doc = r#"{"2024-01-01":[{"id":1,"name":"A","entryTime":null,"exitTime":null,"capacity":"","vehicleType":"","notes":""}],"2024-03-15":[{"id":1,"name":"B","entryTime":null,"exitTime":null,"capacity":"","vehicleType":"","notes":""}],"2024-02-10":[]}"#;
        conn.execute(
            "UPDATE kv SET value = ?1 WHERE key = 'allLogs'",
            params![doc],
        )
        .expect("replace allLogs");
    }

    let out = gl()
        .args(["--db", &db_path, "history"])
        .output()
        .expect("run history");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let pos = |d: &str| stdout.find(d).unwrap_or_else(|| panic!("{d} listed"));
    assert!(pos(&today_key()) < pos("2024-03-15"));
    assert!(pos("2024-03-15") < pos("2024-02-10"));
    assert!(pos("2024-02-10") < pos("2024-01-01"));
}

#[test]
fn test_show_past_date_and_missing_date() {
    let db_path = setup_test_db("cli_show_past");
    init_db(&db_path);

    gl().args(["--db", &db_path, "show", "--date", "1999-01-01"])
        .assert()
        .success()
        .stdout(contains("No log recorded for 1999-01-01"));

    gl().args(["--db", &db_path, "show", "--date", "01/01/1999"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("cli_export");
    init_db(&db_path);

    gl().args(["--db", &db_path, "add", "--name", "Hana", "--notes", "parcel"])
        .assert()
        .success();

    let csv_out = temp_out("cli_export", "csv");
    gl().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &csv_out,
    ])
    .assert()
    .success();

    let csv = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(csv.starts_with("date,id,name,entry_time,exit_time,capacity,vehicle_type,notes"));
    assert!(csv.contains("Hana"));
    assert_eq!(csv.lines().count(), 2, "blank rows are not exported");

    let json_out = temp_out("cli_export", "json");
    gl().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "json",
        "--file",
        &json_out,
        "--date",
        &today_key(),
    ])
    .assert()
    .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("read json")).expect("json");
    assert_eq!(json[today_key()][0]["name"], "Hana");
    assert_eq!(json[today_key()].as_array().map(Vec::len), Some(15));
}

#[test]
fn test_export_missing_date_fails() {
    let db_path = setup_test_db("cli_export_missing");
    init_db(&db_path);

    let out = temp_out("cli_export_missing", "csv");
    gl().args([
        "--db", &db_path, "export", "--file", &out, "--date", "2001-02-03",
    ])
    .assert()
    .failure()
    .stderr(contains("No log recorded for 2001-02-03"));
}

#[test]
fn test_internal_log_records_operations() {
    let db_path = setup_test_db("cli_internal_log");
    init_db(&db_path);

    gl().args(["--db", &db_path, "set", "2", "name", "Samir"])
        .assert()
        .success();
    gl().args(["--db", &db_path, "in", "2"]).assert().success();

    gl().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init").and(contains("set")).and(contains("Samir")));
}

#[test]
fn test_no_color_output_has_no_escape_codes() {
    let db_path = setup_test_db("cli_no_color");
    init_db(&db_path);

    gl().args(["--db", &db_path, "set", "1", "name", "Rania"])
        .assert()
        .success();
    gl().args(["--db", &db_path, "in", "1"]).assert().success();

    for cmd in ["show", "history"] {
        gl().args(["--db", &db_path, cmd])
            .assert()
            .success()
            .stdout(contains("\x1b[").not());
    }
}
