use clap::{Parser, Subcommand};

/// Command-line interface definition for daytally
/// CLI application to track daily activity time per category
#[derive(Parser)]
#[command(
    name = "daytally",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple activity timer CLI: accrue time per category and export a formatted spreadsheet",
    long_about = None
)]
pub struct Cli {
    /// Override the activity table path (skips the remembered location)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config or side-file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and default config file
    Init,

    /// Add, set, or annotate time for one key from the command line
    Log {
        /// Category or metadata key to modify
        #[arg(long = "key", help = "Category or metadata key to modify")]
        key: String,

        /// Minutes to add to the chosen category
        #[arg(long = "update", help = "Minutes to add to the chosen category")]
        update: Option<f64>,

        /// Minutes to set the chosen category to, replacing its value
        #[arg(long = "set", help = "Minutes to set the chosen category to")]
        set: Option<f64>,

        /// Free text for metadata keys (Objective, Summary)
        #[arg(long = "text", help = "Free text for metadata keys")]
        text: Option<String>,

        /// Apply the change to the record N days before today
        #[arg(long = "days", default_value_t = 0)]
        days: u32,

        /// Copy the table file aside before modifying it
        #[arg(long = "backup", help = "Copy the table file aside before modifying it")]
        backup: bool,

        /// Answer yes to the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Show accumulated times and metadata for a day
    Status {
        /// Show the record N days before today
        #[arg(long = "days", default_value_t = 0)]
        days: u32,
    },

    /// Run the interactive timer loop
    Track,

    /// Export the activity table as a formatted spreadsheet
    Export,
}
