//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Order Export - Join orders and shipments from an entity store into a table
#[derive(Parser, Debug)]
#[command(name = "order-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace) or an env_logger filter
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "info",
        env = "ORDER_EXPORT_LOG"
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch orders and shipments and write them to a new table file
    Export(commands::export::ExportArgs),

    /// Resolve and check the configuration without fetching anything
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Export(args) => commands::export::execute(args, &self.color),
            Commands::Validate(args) => commands::validate::execute(args, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Installs the process-wide logger. Records go to stderr so that stdout only
/// carries the run summary.
fn init_logging(filter: &str) {
    // A logger may already be installed when the CLI is driven from tests.
    let _ = env_logger::Builder::new()
        .parse_filters(filter)
        .format_timestamp_millis()
        .try_init();
}
