//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `order-export` command-line tool. Each subcommand is defined in its own
//! file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `order_export` library.
//!
//! `export` and `validate` share the run configuration flags defined in
//! `config_args`.

pub mod completions;
pub mod config_args;
pub mod export;
pub mod validate;
