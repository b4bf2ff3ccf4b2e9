use crate::core::logs::dates_sorted;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::flatten;
use crate::models::AllLogs;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one day (`day`) or every day of `logs` to `file`.
    ///
    /// Returns the number of non-blank rows written.
    pub fn export(
        logs: &AllLogs,
        day: Option<&str>,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let selected: AllLogs = match day {
            Some(d) => {
                let log = logs
                    .get(d)
                    .ok_or_else(|| AppError::NoLogForDate(d.to_string()))?;
                AllLogs::from([(d.to_string(), log.clone())])
            }
            None => logs.clone(),
        };

        let dates = dates_sorted(&selected);
        let rows = flatten(&selected, &dates);

        if rows.is_empty() {
            warning("No filled-in entries in the selected days.");
        }

        let path = Path::new(file);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(AppError::Export(format!(
                "directory does not exist: {}",
                parent.display()
            )));
        }
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&selected, path)?,
        }

        Ok(rows.len())
    }
}
