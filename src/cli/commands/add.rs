use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::NewEntry;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Add a visitor to today's sheet.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        capacity,
        vehicle,
        notes,
    } = cmd
    {
        let new = NewEntry {
            name: name.clone(),
            capacity: capacity.clone(),
            vehicle_type: vehicle.clone(),
            notes: notes.clone(),
        };

        // reject before the database is even opened
        new.validate()?;

        let mut store = open_store(cfg)?;
        let today = store.today();
        let id = store.add_entry(&today, &new)?;

        store.audit("add", &format!("{today} #{id}"), new.name.trim());
        success(format!("Added '{}' as row #{id} of {today}.", new.name.trim()));
    }
    Ok(())
}
