pub mod add;
pub mod config;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod set;
pub mod show;
pub mod time;

use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::store::LogStore;
use crate::errors::AppResult;
use crate::storage::SqliteStore;

/// The store as the CLI uses it: SQLite file, wall clock.
pub type GateStore = LogStore<SqliteStore, SystemClock>;

/// Open the configured database and make sure today has a sheet,
/// as every session starts with today's sheet ready to fill in.
pub fn open_store(cfg: &Config) -> AppResult<GateStore> {
    let backend = SqliteStore::open(&cfg.database)?;
    let mut store = LogStore::open(backend, SystemClock, cfg.store_settings());
    store.ensure_today();
    Ok(store)
}
