//! The log store: sole owner of the persisted gate log.
//!
//! `LogStore` loads the `allLogs` document once, keeps the current snapshot,
//! and after each mutation writes the whole mapping back. Reading never fails:
//! unreadable data is reported and the store starts from an empty mapping.

use crate::core::add::{NewEntry, add_entry};
use crate::core::clock::{Clock, SystemClock};
use crate::core::logs::{
    self, DEFAULT_INITIAL_ROWS, ensure_day, legacy_migrate, parse_all_logs,
};
use crate::errors::AppResult;
use crate::models::{AllLogs, DailyLog, Entry, EntryField, TimeKind};
use crate::storage::{ALL_LOGS_KEY, KeyValueStore, LEGACY_ENTRIES_KEY};
use crate::ui::messages::{error, info, warning};
use crate::utils::date::date_key;
use crate::utils::time::{DEFAULT_TIME_FORMAT, format_stamp};
use chrono::Locale;

/// Key under which an unreadable `allLogs` document is set aside.
pub const CORRUPT_BACKUP_KEY: &str = "allLogs.unreadable";

/// Knobs the store needs from the configuration.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub initial_rows: usize,
    pub time_format: String,
    pub locale: Locale,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            initial_rows: DEFAULT_INITIAL_ROWS,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            locale: Locale::en_US,
        }
    }
}

pub struct LogStore<S: KeyValueStore, C: Clock = SystemClock> {
    backend: S,
    clock: C,
    settings: StoreSettings,
    logs: AllLogs,
}

impl<S: KeyValueStore, C: Clock> LogStore<S, C> {
    /// Load whatever the backend holds and keep it as the current snapshot.
    pub fn open(backend: S, clock: C, settings: StoreSettings) -> Self {
        let mut store = Self {
            backend,
            clock,
            settings,
            logs: AllLogs::new(),
        };
        store.logs = store.load();
        store
    }

    /// Read the persisted mapping.
    ///
    /// Falls back to migrating the legacy flat list when `allLogs` is missing or
    /// unreadable, and to an empty mapping when that fails too.
    pub fn load(&mut self) -> AllLogs {
        match self.backend.get(ALL_LOGS_KEY) {
            Ok(Some(raw)) => match parse_all_logs(&raw) {
                Ok(logs) => return logs,
                Err(e) => {
                    error(format!("Could not parse stored logs: {e}"));
                    if let Err(e) = self.backend.set(CORRUPT_BACKUP_KEY, &raw) {
                        warning(format!("Could not set aside unreadable logs: {e}"));
                    }
                }
            },
            Ok(None) => {}
            Err(e) => {
                error(format!("Could not read stored logs: {e}"));
                return AllLogs::new();
            }
        }

        self.migrate_legacy()
    }

    fn migrate_legacy(&mut self) -> AllLogs {
        let raw = match self.backend.get(LEGACY_ENTRIES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return AllLogs::new(),
            Err(e) => {
                error(format!("Could not read legacy entries: {e}"));
                return AllLogs::new();
            }
        };

        let today = self.today();
        let migrated = match legacy_migrate(&raw, &today) {
            Ok(logs) => logs,
            Err(e) => {
                error(format!("Could not parse legacy entries: {e}"));
                return AllLogs::new();
            }
        };

        // the legacy key goes away only once the new document is safely stored
        match self.write(&migrated) {
            Ok(_) => match self.backend.remove(LEGACY_ENTRIES_KEY) {
                Ok(()) => {
                    let count = migrated.get(&today).map_or(0, Vec::len);
                    info(format!("Migrated {count} legacy entries into {today}."));
                    self.audit(
                        "migrate_legacy",
                        &today,
                        &format!("Moved {count} entries from '{LEGACY_ENTRIES_KEY}'"),
                    );
                }
                Err(e) => warning(format!("Could not remove legacy entries: {e}")),
            },
            Err(e) => error(format!(
                "Could not store migrated entries, legacy data left in place: {e}"
            )),
        }

        migrated
    }

    fn write(&mut self, logs: &AllLogs) -> AppResult<bool> {
        if logs.is_empty() {
            return Ok(false);
        }
        let raw = serde_json::to_string(logs)?;
        self.backend.set(ALL_LOGS_KEY, &raw)?;
        Ok(true)
    }

    /// Write the whole snapshot. An empty mapping is never written.
    ///
    /// Returns whether anything was written.
    pub fn try_persist(&mut self) -> AppResult<bool> {
        let logs = std::mem::take(&mut self.logs);
        let written = self.write(&logs);
        self.logs = logs;
        written
    }

    /// Like [`try_persist`](Self::try_persist), but a failed write is only
    /// reported so the session can go on.
    pub fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            error(format!("Could not save logs: {e}"));
        }
    }

    fn commit(&mut self, next: AllLogs) -> &AllLogs {
        if next != self.logs {
            self.logs = next;
            self.persist();
        }
        &self.logs
    }

    /// Seed today's log with blank rows if it is missing or empty.
    pub fn ensure_today(&mut self) -> &AllLogs {
        let today = self.today();
        let next = ensure_day(&self.logs, &today, self.settings.initial_rows);
        self.commit(next)
    }

    pub fn set_field(&mut self, day: &str, id: i64, field: EntryField, value: &str) -> &AllLogs {
        let next = logs::set_field(
            &self.logs,
            day,
            id,
            field,
            value,
            self.settings.initial_rows,
        );
        self.commit(next)
    }

    /// Stamp the current time into the entry or exit cell of entry `id`.
    pub fn log_time(&mut self, day: &str, id: i64, kind: TimeKind) -> &AllLogs {
        let stamp = self.stamp_now();
        let next = logs::log_time(
            &self.logs,
            day,
            id,
            kind,
            &stamp,
            self.settings.initial_rows,
        );
        self.commit(next)
    }

    /// Manual add. Invalid input leaves the snapshot and storage untouched.
    pub fn add_entry(&mut self, day: &str, new: &NewEntry) -> AppResult<i64> {
        let (next, id) = add_entry(&self.logs, day, new, self.settings.initial_rows)?;
        self.commit(next);
        Ok(id)
    }

    pub fn dates_sorted(&self) -> Vec<String> {
        logs::dates_sorted(&self.logs)
    }

    pub fn snapshot(&self) -> &AllLogs {
        &self.logs
    }

    pub fn day(&self, day: &str) -> Option<&DailyLog> {
        self.logs.get(day)
    }

    pub fn entry(&self, day: &str, id: i64) -> Option<&Entry> {
        self.day(day)?.iter().find(|e| e.id == id)
    }

    /// Today's date key according to the store's clock.
    pub fn today(&self) -> String {
        date_key(self.clock.today())
    }

    pub fn stamp_now(&self) -> String {
        format_stamp(
            &self.clock.now(),
            &self.settings.time_format,
            self.settings.locale,
        )
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Record an operation in the backend's audit trail; failures only warn.
    pub fn audit(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.backend.audit(operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }
}
