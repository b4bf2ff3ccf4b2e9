use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::EntryField;
use crate::ui::messages::{info, success};

/// Edit one text column of today's sheet.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { id, field, value } = cmd {
        let field =
            EntryField::from_code(field).ok_or_else(|| AppError::InvalidField(field.clone()))?;

        let mut store = open_store(cfg)?;
        let today = store.today();

        let previous = match store.entry(&today, *id) {
            Some(e) => e.field(field).to_string(),
            None => {
                return Err(AppError::EntryNotFound {
                    date: today,
                    id: *id,
                });
            }
        };

        let rows_before = store.day(&today).map_or(0, Vec::len);
        store.set_field(&today, *id, field, value);
        let rows_after = store.day(&today).map_or(0, Vec::len);

        store.audit(
            "set",
            &format!("{today} #{id}"),
            &format!("{} = '{}'", field.as_str(), value),
        );

        if previous.is_empty() {
            success(format!("Row #{id}: {} set to '{}'.", field.as_str(), value));
        } else {
            success(format!(
                "Row #{id}: {} changed from '{}' to '{}'.",
                field.as_str(),
                previous,
                value
            ));
        }

        if rows_after > rows_before
            && let Some(last) = store.day(&today).and_then(|log| log.last())
        {
            info(format!("Added blank row #{}.", last.id));
        }
    }
    Ok(())
}
