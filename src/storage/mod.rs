//! Key-value persistence behind the log store.
//!
//! The store only ever reads and writes whole JSON documents under a handful
//! of string keys, so any backend that can do `get`/`set`/`remove` works.

pub mod log;
pub mod memory;
pub mod schema;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;

/// Key of the current per-date document.
pub const ALL_LOGS_KEY: &str = "allLogs";

/// Key of the pre-history flat entry list. Read once, then removed.
pub const LEGACY_ENTRIES_KEY: &str = "logEntries";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// Record an operation in the backend's audit trail, if it keeps one.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}
