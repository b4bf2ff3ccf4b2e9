use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for gatelog
/// CLI application to keep the daily gate log of visitors and vehicles
#[derive(Parser)]
#[command(
    name = "gatelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Daily visitor and vehicle gate log: one sheet per day, entry and exit times, history",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the log sheet of a day (today by default)
    Show {
        #[arg(long, short, help = "Date of the sheet to show (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// List every recorded day, most recent first
    History,

    /// Edit a text column of one of today's rows
    Set {
        /// Row id, as shown in the first column
        id: i64,

        /// Column: name, capacity (role), vehicle, notes
        field: String,

        /// New value ("" clears the cell)
        value: String,
    },

    /// Stamp the entry time of one of today's rows
    In {
        /// Row id, as shown in the first column
        id: i64,
    },

    /// Stamp the exit time of one of today's rows
    Out {
        /// Row id, as shown in the first column
        id: i64,
    },

    /// Add a visitor to today's sheet in one go
    Add {
        #[arg(long, default_value = "", help = "Visitor name (required)")]
        name: String,

        #[arg(long, default_value = "", help = "Role or affiliation")]
        capacity: String,

        #[arg(long = "vehicle", default_value = "", help = "Vehicle type")]
        vehicle: String,

        #[arg(long, default_value = "", help = "Free notes")]
        notes: String,
    },

    /// Export the gate log
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Export only this date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
