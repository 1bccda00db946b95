use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worktrack
/// CLI application to track work sessions and sync them to a web endpoint
#[derive(Parser)]
#[command(
    name = "worktrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work-session tracking CLI: start/stop sessions and sync entries to a spreadsheet-backed endpoint",
    long_about = None
)]
pub struct Cli {
    /// Override journal database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override session file path (useful for tests)
    #[arg(global = true, long = "session-file")]
    pub session_file: Option<String>,

    /// Override the remote endpoint URL
    #[arg(global = true, long = "endpoint")]
    pub endpoint: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the journal database
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "migrate",
            help = "Add defaults for fields missing from the configuration file"
        )]
        migrate: bool,

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

    /// Start a work session at the given location
    Start {
        /// Work location: H=Home, O=Office (full names accepted)
        location: String,
    },

    /// Stop the active work session and sync the entry
    Stop,

    /// Show the current session status
    Status,

    /// Add a manual log entry
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        #[arg(long = "in", help = "Start time (HH:MM)")]
        start: Option<String>,

        /// End time (HH:MM), optional
        #[arg(long = "out", help = "End time (HH:MM), optional")]
        end: Option<String>,

        /// Work location: H=Home, O=Office
        #[arg(long = "loc", help = "Work location: H=Home, O=Office")]
        location: Option<String>,

        /// Free-form notes, optional
        #[arg(long = "notes", help = "Free-form notes, optional")]
        notes: Option<String>,
    },

    /// Fetch the remote log and print it as a table
    List,

    /// Print the internal journal
    Log {
        #[arg(long = "print", help = "Print rows from the internal journal")]
        print: bool,
    },

    /// Export the remote log to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
