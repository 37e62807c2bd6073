//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which resolves the run
//! configuration exactly as `export` would and reports it, without contacting
//! the entity store or writing anything.
//!
//! ## Checks
//!
//! - **Configuration**: the file parses, a base URL and order ids are given,
//!   the worker count and delimiter are usable.
//! - **Output**: the output file does not exist yet and its directory does.

use anyhow::Result;
use clap::Args;

use order_export::entity::EntityKind;
use order_export::output::{OutputConfig, Status};
use order_export::store::HttpEntityStore;

use super::config_args::ConfigArgs;

/// Check the export configuration without running it
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);

    let config = match args.config.resolve() {
        Ok(config) => {
            println!(
                "{} Configuration resolved successfully",
                out.marker(Status::Success)
            );
            config
        }
        Err(e) => {
            println!("{} Configuration is invalid: {:#}", out.marker(Status::Failure), e);
            return Err(e);
        }
    };

    let store = HttpEntityStore::new(&config.base_url)?;
    let first_id = config.order_ids[0];

    println!("\n{} Configuration Summary:", out.marker(Status::Info));
    println!("   Entity store: {}", config.base_url);
    println!(
        "   Example requests: {} and {}",
        store.entity_url(EntityKind::Order, first_id)?,
        store.entity_url(EntityKind::Shipment, first_id)?
    );
    println!("   Order ids: {}", config.order_ids.len());
    println!("   Workers: {}", config.workers);
    println!("   Output: {}", config.output.display());
    println!("   Delimiter: {:?}", char::from(config.delimiter));

    let mut has_errors = false;

    if config.output.exists() {
        println!(
            "{} Output file {} already exists; export would refuse to overwrite it",
            out.marker(Status::Failure),
            config.output.display()
        );
        has_errors = true;
    }

    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            println!(
                "{} Output directory {} does not exist",
                out.marker(Status::Failure),
                parent.display()
            );
            has_errors = true;
        }
    }

    if has_errors {
        anyhow::bail!("Validation failed");
    }

    println!("\n{} Configuration is valid", out.marker(Status::Success));
    Ok(())
}
