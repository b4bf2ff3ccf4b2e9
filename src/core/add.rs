use crate::core::logs::{blank_log, next_id};
use crate::errors::{AppError, AppResult};
use crate::models::{AllLogs, DailyLog, Entry};

/// Fields typed into the manual add form. Times are stamped later.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub name: String,
    pub capacity: String,
    pub vehicle_type: String,
    pub notes: String,
}

impl NewEntry {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Reject the form before anything is written.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::InvalidInput("a name is required".into()));
        }
        Ok(())
    }

    fn fill(&self, id: i64) -> Entry {
        Entry {
            name: self.name.clone(),
            capacity: self.capacity.clone(),
            vehicle_type: self.vehicle_type.clone(),
            notes: self.notes.clone(),
            ..Entry::blank(id)
        }
    }
}

/// Put `new` into the first untouched row of `day` and return the new
/// mapping together with the id it landed on.
///
/// When every row is in use the entry is appended. Either way the log ends
/// with a blank row afterwards.
pub fn add_entry(
    logs: &AllLogs,
    day: &str,
    new: &NewEntry,
    rows: usize,
) -> AppResult<(AllLogs, i64)> {
    new.validate()?;

    let mut log: DailyLog = logs.get(day).cloned().unwrap_or_else(|| blank_log(rows));

    let id = match log.iter().position(Entry::is_blank) {
        Some(idx) => {
            let id = log[idx].id;
            log[idx] = new.fill(id);
            id
        }
        None => {
            let id = next_id(&log);
            log.push(new.fill(id));
            id
        }
    };

    if log.last().is_some_and(|e| !e.is_blank()) {
        log.push(Entry::blank(next_id(&log)));
    }

    let mut next = logs.clone();
    next.insert(day.to_string(), log);
    Ok((next, id))
}
