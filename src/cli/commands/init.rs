use crate::cli::commands::open_store;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its tables
///  - today's blank sheet
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cfg = Config::init_all(&cfg.database, cli.test)?;

    info("Initializing gatelog…");
    if !cli.test {
        success(format!("Config file: {}", Config::config_file().display()));
    }

    let mut store = open_store(&cfg)?;
    store.audit(
        "init",
        &cfg.database,
        &format!("Database initialized at {}", cfg.database),
    );

    success(format!("Database:    {}", cfg.database));
    success(format!(
        "Today's sheet ({}) is ready with {} rows.",
        store.today(),
        store.day(&store.today()).map_or(0, Vec::len)
    ));
    Ok(())
}
