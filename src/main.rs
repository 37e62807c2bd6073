//! # Order Export CLI
//!
//! This is the binary entry point for the `order-export` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Installing the logger once for the whole process.
//! - Executing the selected command and turning its errors into a non-zero
//!   exit status.
//!
//! The fetch, merge and write logic lives in the `order_export` library
//! crate; the binary is a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
