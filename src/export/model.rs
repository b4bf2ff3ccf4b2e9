use crate::models::{AllLogs, Entry};
use serde::Serialize;

/// Flat row for spreadsheet exports: one line per named entry.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EntryExport {
    pub date: String,
    pub id: i64,
    pub name: String,
    pub entry_time: String,
    pub exit_time: String,
    pub capacity: String,
    pub vehicle_type: String,
    pub notes: String,
}

impl EntryExport {
    pub fn from_entry(date: &str, e: &Entry) -> Self {
        Self {
            date: date.to_string(),
            id: e.id,
            name: e.name.clone(),
            entry_time: e.entry_time.clone().unwrap_or_default(),
            exit_time: e.exit_time.clone().unwrap_or_default(),
            capacity: e.capacity.clone(),
            vehicle_type: e.vehicle_type.clone(),
            notes: e.notes.clone(),
        }
    }
}

/// Flatten `dates` of `logs` in the given order, leaving out untouched rows.
pub(crate) fn flatten(logs: &AllLogs, dates: &[String]) -> Vec<EntryExport> {
    dates
        .iter()
        .filter_map(|d| logs.get(d).map(|log| (d, log)))
        .flat_map(|(d, log)| {
            log.iter()
                .filter(|e| !e.is_blank())
                .map(move |e| EntryExport::from_entry(d, e))
        })
        .collect()
}
