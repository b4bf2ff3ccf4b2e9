//! Snapshot operations over the per-date gate log.
//!
//! Every function here takes the current [`AllLogs`] by reference and hands
//! back a new mapping; the input is never touched. [`LogStore`] wraps them
//! with a clock and persistence.
//!
//! [`LogStore`]: crate::core::store::LogStore

use crate::errors::AppResult;
use crate::models::{AllLogs, DailyLog, Entry, EntryField, TimeKind};
use crate::utils::date::parse_date_key;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Rows a fresh day starts with.
pub const DEFAULT_INITIAL_ROWS: usize = 15;

/// Why a time stamp was, or was not, applied to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StampCheck {
    Apply,
    /// Entry time needs a name first.
    NameMissing,
    /// Exit time needs an entry time first.
    NotEntered,
    AlreadyStamped,
}

impl StampCheck {
    pub fn applies(&self) -> bool {
        matches!(self, StampCheck::Apply)
    }
}

/// One past the largest id of `log`, starting at 1.
///
/// When the largest id is `i64::MAX` the smallest unused positive id is used.
pub fn next_id(log: &[Entry]) -> i64 {
    match log.iter().map(|e| e.id).max() {
        None => 1,
        Some(max) => max.checked_add(1).unwrap_or_else(|| {
            let used: BTreeSet<i64> = log.iter().map(|e| e.id).collect();
            (1..).find(|id| !used.contains(id)).unwrap_or(1)
        }),
    }
}

/// A day made of `rows` empty rows with ids `1..=rows`. Never empty.
pub fn blank_log(rows: usize) -> DailyLog {
    (1..=rows.max(1) as i64).map(Entry::blank).collect()
}

/// Parse the `allLogs` document.
pub fn parse_all_logs(raw: &str) -> AppResult<AllLogs> {
    Ok(serde_json::from_str(raw)?)
}

/// Turn the flat `logEntries` array into a mapping holding it as `today`'s log.
pub fn legacy_migrate(raw: &str, today: &str) -> AppResult<AllLogs> {
    let entries: DailyLog = serde_json::from_str(raw)?;
    Ok(AllLogs::from([(today.to_string(), entries)]))
}

/// Make sure `day` holds a non-empty log, seeding `rows` blank rows otherwise.
pub fn ensure_day(logs: &AllLogs, day: &str, rows: usize) -> AllLogs {
    let mut next = logs.clone();
    if logs.get(day).is_none_or(|log| log.is_empty()) {
        next.insert(day.to_string(), blank_log(rows));
    }
    next
}

/// Replace one text field of entry `id` in `day`.
///
/// Typing a name into the last row while it was still unnamed grows the log by
/// one blank row, so there is always a free row at the bottom.
pub fn set_field(
    logs: &AllLogs,
    day: &str,
    id: i64,
    field: EntryField,
    value: &str,
    rows: usize,
) -> AllLogs {
    let current = logs.get(day).cloned().unwrap_or_else(|| blank_log(rows));
    let last = current.last().map(|e| (e.id, e.has_name()));

    let mut updated: DailyLog = current
        .iter()
        .map(|e| {
            if e.id == id {
                e.with_field(field, value)
            } else {
                e.clone()
            }
        })
        .collect();

    if field == EntryField::Name
        && let Some((last_id, last_named)) = last
        && last_id == id
        && !last_named
        && !value.trim().is_empty()
    {
        updated.push(Entry::blank(next_id(&updated)));
    }

    let mut next = logs.clone();
    next.insert(day.to_string(), updated);
    next
}

/// Decide whether stamping `kind` on `entry` is allowed.
pub fn check_stamp(entry: &Entry, kind: TimeKind) -> StampCheck {
    match kind {
        TimeKind::Entry if entry.has_entry_time() => StampCheck::AlreadyStamped,
        TimeKind::Entry if !entry.has_name() => StampCheck::NameMissing,
        TimeKind::Entry => StampCheck::Apply,
        TimeKind::Exit if entry.has_exit_time() => StampCheck::AlreadyStamped,
        TimeKind::Exit if !entry.has_entry_time() => StampCheck::NotEntered,
        TimeKind::Exit => StampCheck::Apply,
    }
}

/// Stamp the entry or exit time of entry `id` in `day` with `stamp`.
///
/// A cell that is already filled keeps its value, and an exit is never
/// recorded before an entry.
pub fn log_time(
    logs: &AllLogs,
    day: &str,
    id: i64,
    kind: TimeKind,
    stamp: &str,
    rows: usize,
) -> AllLogs {
    let current = logs.get(day).cloned().unwrap_or_else(|| blank_log(rows));

    let updated: DailyLog = current
        .into_iter()
        .map(|mut e| {
            if e.id == id && check_stamp(&e, kind).applies() {
                match kind {
                    TimeKind::Entry => e.entry_time = Some(stamp.to_string()),
                    TimeKind::Exit => e.exit_time = Some(stamp.to_string()),
                }
            }
            e
        })
        .collect();

    let mut next = logs.clone();
    next.insert(day.to_string(), updated);
    next
}

/// Date keys, most recent calendar date first.
///
/// Keys that are not `YYYY-MM-DD` dates go last, in reverse text order.
pub fn dates_sorted(logs: &AllLogs) -> Vec<String> {
    let mut keys: Vec<(&String, _)> = logs.keys().map(|k| (k, parse_date_key(k))).collect();

    keys.sort_by(|(ka, da), (kb, db)| match (da, db) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => kb.cmp(ka),
    });

    keys.into_iter().map(|(k, _)| k.clone()).collect()
}
