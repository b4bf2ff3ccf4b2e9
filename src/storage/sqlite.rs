//! SQLite-backed key-value store (lightweight, one connection per CLI run).

use super::KeyValueStore;
use super::schema::ensure_schema;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;

pub struct SqliteStore {
    pub conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file and make sure the schema is in place.
    pub fn open(path: &str) -> AppResult<Self> {
        let path = expand_tilde(path);

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path)?;
        ensure_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        ensure_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.conn.execute(
            r#"
            INSERT INTO kv (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
            params![key, value, now],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        super::log::write_log(&self.conn, operation, target, message)
    }
}
