use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimetable
/// Look up where a pupil is on a school day, from the terminal or the web
#[derive(Parser)]
#[command(
    name = "rtimetable",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pupil timetable lookup: find a pupil's sessions for a day and the one happening now",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the directory holding the roster and day CSV files
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the data directory
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default value")]
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

    /// Show a pupil's sessions for a day
    Lookup {
        /// Pupil name as listed in the roster
        name: String,

        #[arg(long, help = "Day to look up (default: today, or the first school day at weekends)")]
        day: Option<String>,

        #[arg(long = "at", value_name = "HH:MM", help = "Evaluate current sessions at this time today")]
        at: Option<String>,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    /// List the distinct session start times of a day
    Times {
        #[arg(long, help = "Day to inspect (default: today, or the first school day at weekends)")]
        day: Option<String>,
    },

    /// Serve the lookup page over HTTP
    Serve {
        #[arg(long, help = "Host to bind (overrides config)")]
        host: Option<String>,

        #[arg(long, help = "Port to bind (overrides config)")]
        port: Option<u16>,
    },
}
