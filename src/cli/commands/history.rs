use crate::cli::commands::open_store;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::ui::sheet::render_history;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let dates = store.dates_sorted();

    if dates.is_empty() {
        info("No saved logs.");
        return Ok(());
    }

    header("Recorded days");
    print!(
        "{}",
        render_history(
            &dates,
            store.snapshot(),
            &store.today(),
            store.settings().locale
        )
    );
    Ok(())
}
