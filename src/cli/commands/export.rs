use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::date::normalize_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        date,
        force,
    } = cmd
    {
        let day = match date {
            Some(d) => Some(normalize_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
            None => None,
        };

        let mut store = open_store(cfg)?;
        let rows = ExportLogic::export(store.snapshot(), day.as_deref(), *format, file, *force)?;

        store.audit(
            "export",
            file,
            &format!(
                "{} rows as {} ({})",
                rows,
                format.as_str(),
                day.as_deref().unwrap_or("all days")
            ),
        );
    }
    Ok(())
}
