use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::AllLogs;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Write the selected days pretty-printed, in the same layout as the stored
/// `allLogs` document, so the file can be read back as-is.
pub(crate) fn export_json(logs: &AllLogs, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json = serde_json::to_string_pretty(logs)?;
    fs::write(path, json)?;

    notify_export_success("JSON", path);
    Ok(())
}
