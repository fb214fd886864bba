use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tracksheet
/// CLI application to build daily timesheets from Jira and GitHub activity
#[derive(Parser)]
#[command(
    name = "tracksheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Assemble daily timesheets from Jira and GitHub activity and compute productivity insights",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update, no env credential fallback)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the snapshot database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration for missing credentials")]
        check: bool,
    },

    /// Fetch activity for a date range, store daily snapshots and print the
    /// assembled timesheet
    Generate {
        #[arg(
            long,
            value_name = "RANGE",
            help = "Date range: YYYY, YYYY-MM, YYYY-MM-DD or start:end (default: last 5 days)"
        )]
        range: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Also export the rows to this file (absolute path required)"
        )]
        out: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Compute productivity insights from stored snapshots (no fetching)
    Insights {
        #[arg(long, value_name = "RANGE", help = "Date range to analyze")]
        range: String,

        #[arg(
            long,
            value_name = "FILE",
            help = "Write the report as JSON to this file (absolute path required)"
        )]
        out: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Export timesheet rows rebuilt from stored snapshots (no fetching)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Destination file path (absolute path required)"
        )]
        file: String,

        #[arg(long, value_name = "RANGE", help = "Date range to export")]
        range: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Manage the snapshot database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
