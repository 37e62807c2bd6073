//! Export command implementation
//!
//! The export command runs the whole pipeline:
//! 1. Resolve the configuration (file, environment, flags)
//! 2. Fetch orders and shipments concurrently from the entity store
//! 3. Merge them into one row per order item
//! 4. Write the rows to a new table file
//!
//! A run that produces no rows, or whose output file already exists, ends
//! with a non-zero exit status.

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use order_export::error::Error;
use order_export::output::{OutputConfig, Status};
use order_export::pipeline;
use order_export::store::HttpEntityStore;
use order_export::writer::WriteOutcome;

use super::config_args::ConfigArgs;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Do not draw a progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Execute the export command
pub fn execute(args: ExportArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config = args.config.resolve()?;
    let store = HttpEntityStore::new(&config.base_url)?;

    if !args.quiet {
        println!(
            "{} Exporting {} orders from {}",
            out.marker(Status::Start),
            config.order_ids.len(),
            config.base_url
        );
    }

    let progress = if args.quiet || args.no_progress || !out.interactive {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new((config.order_ids.len() * 2) as u64);
        if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} fetches")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        bar
    };

    let result = pipeline::run_with_progress(&config, &store, &|| progress.inc(1));
    progress.finish_and_clear();

    match result {
        Ok(summary) => match summary.outcome {
            WriteOutcome::Written { rows } => {
                if !args.quiet {
                    println!(
                        "{} Exported successfully in {:.2}s",
                        out.marker(Status::Success),
                        summary.elapsed.as_secs_f64()
                    );
                    println!(
                        "   {} orders, {} shipments fetched",
                        summary.orders, summary.shipments
                    );
                    println!("   {} rows written to {}", rows, config.output.display());
                }
                Ok(())
            }
            WriteOutcome::NothingToWrite => {
                if !args.quiet {
                    println!(
                        "{} Nothing to write: {} of {} orders fetched, 0 rows",
                        out.marker(Status::Warning),
                        summary.orders,
                        summary.requested
                    );
                }
                Err(Error::EmptyResultSet.into())
            }
        },
        Err(e) => {
            if !args.quiet {
                println!("{} Export failed", out.marker(Status::Failure));
                println!();
            }
            Err(e.into())
        }
    }
}
