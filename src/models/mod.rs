pub mod entry;

use std::collections::BTreeMap;

pub use entry::{Entry, EntryField, TimeKind};

/// Rows of one calendar day, in grid order.
pub type DailyLog = Vec<Entry>;

/// Every recorded day, keyed by `YYYY-MM-DD`.
pub type AllLogs = BTreeMap<String, DailyLog>;
