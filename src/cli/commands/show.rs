use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::ui::sheet::{render_sheet, sheet_title};
use crate::utils::date::normalize_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date } = cmd {
        let store = open_store(cfg)?;

        let day = match date {
            Some(d) => normalize_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
            None => store.today(),
        };

        let Some(log) = store.day(&day) else {
            info(format!("No log recorded for {day}."));
            return Ok(());
        };

        header(sheet_title(&day, cfg.show_weekday, store.settings().locale));
        print!("{}", render_sheet(log, cfg));

        if day != store.today() {
            info("Past sheet: edits always go to today's sheet.");
        }
    }
    Ok(())
}
