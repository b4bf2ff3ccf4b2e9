use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logs::{StampCheck, check_stamp};
use crate::errors::{AppError, AppResult};
use crate::models::TimeKind;
use crate::ui::messages::{info, success, warning};

/// Stamp the entry (`in`) or exit (`out`) time of one of today's rows.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (id, kind) = match cmd {
        Commands::In { id } => (*id, TimeKind::Entry),
        Commands::Out { id } => (*id, TimeKind::Exit),
        _ => return Ok(()),
    };

    let mut store = open_store(cfg)?;
    let today = store.today();

    let entry = store
        .entry(&today, id)
        .cloned()
        .ok_or_else(|| AppError::EntryNotFound {
            date: today.clone(),
            id,
        })?;

    match check_stamp(&entry, kind) {
        StampCheck::Apply => {
            store.log_time(&today, id, kind);

            let stamped = store
                .entry(&today, id)
                .and_then(|e| match kind {
                    TimeKind::Entry => e.entry_time.clone(),
                    TimeKind::Exit => e.exit_time.clone(),
                })
                .unwrap_or_default();

            let op = match kind {
                TimeKind::Entry => "in",
                TimeKind::Exit => "out",
            };
            store.audit(op, &format!("{today} #{id}"), &stamped);

            success(format!(
                "{} time of #{id} ({}) recorded: {stamped}",
                kind.as_str(),
                entry.name.trim()
            ));
        }
        StampCheck::NameMissing => {
            warning(format!(
                "Row #{id} has no name yet; fill in a name before stamping the entry."
            ));
        }
        StampCheck::NotEntered => {
            warning(format!(
                "Row #{id} has no entry time; stamp the entry before the exit."
            ));
        }
        StampCheck::AlreadyStamped => {
            let current = match kind {
                TimeKind::Entry => entry.entry_time.unwrap_or_default(),
                TimeKind::Exit => entry.exit_time.unwrap_or_default(),
            };
            info(format!(
                "Row #{id} already has an {} time ({current}); left unchanged.",
                kind.as_str()
            ));
        }
    }

    Ok(())
}
