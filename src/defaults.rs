//! Default values for order-export configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Number of fetch workers when none is configured.
pub const DEFAULT_WORKERS: usize = 8;

/// File name of the exported table when no output path is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "condiciones_negocio_orders.csv";

/// Field delimiter of the exported table.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Returns the default output path, relative to the working directory.
///
/// This can be overridden by the `--output` CLI flag, the
/// `ORDER_EXPORT_OUTPUT` environment variable, or `output` in the
/// configuration file.
pub fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}
