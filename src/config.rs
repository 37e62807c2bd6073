//! # Configuration
//!
//! A run is described by a [`RunConfig`]: where the entity store lives,
//! which orders to export, how many workers fetch them, and where the table
//! goes. It is resolved from three layers, highest precedence first:
//!
//! 1. Command-line flags and their environment variables ([`Overrides`]).
//! 2. An optional YAML configuration file ([`ConfigFile`]).
//! 3. Built-in defaults ([`crate::defaults`]).
//!
//! ## File Format
//!
//! ```yaml
//! base_url: https://store.example/api
//! order_ids: [4114988927, 4114988960]
//! workers: 8
//! output: exports/orders.csv
//! delimiter: ","
//! description_separator: ""
//! ```
//!
//! Every key is optional in the file; `base_url` and a non-empty
//! `order_ids` list must be supplied by some layer.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use url::Url;

use crate::defaults::{default_output_path, DEFAULT_DELIMITER, DEFAULT_WORKERS};
use crate::error::{Error, Result};

/// Contents of a YAML configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub order_ids: Option<Vec<u64>>,
    pub workers: Option<usize>,
    pub output: Option<PathBuf>,
    pub delimiter: Option<String>,
    pub description_separator: Option<String>,
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub order_ids: Option<Vec<u64>>,
    pub workers: Option<usize>,
    pub output: Option<PathBuf>,
    pub delimiter: Option<String>,
    pub description_separator: Option<String>,
}

/// A fully resolved and validated run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub base_url: Url,
    /// Order ids to export, without duplicates, in first-seen order.
    pub order_ids: Vec<u64>,
    pub workers: usize,
    pub output: PathBuf,
    pub delimiter: u8,
    pub description_separator: String,
}

/// Parse a YAML configuration document.
pub fn parse(yaml_content: &str) -> Result<ConfigFile> {
    if yaml_content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    Ok(serde_yaml::from_str(yaml_content)?)
}

/// Read and parse a YAML configuration file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

impl RunConfig {
    /// Combines the configuration layers and validates the result.
    pub fn resolve(file: ConfigFile, overrides: Overrides) -> Result<Self> {
        let base_url = overrides
            .base_url
            .or(file.base_url)
            .ok_or_else(|| invalid("no base URL given (use --base-url or ORDER_EXPORT_BASE_URL)"))?;
        let base_url = parse_base_url(&base_url)?;

        let order_ids = dedup_ids(overrides.order_ids.or(file.order_ids).unwrap_or_default());
        if order_ids.is_empty() {
            return Err(invalid("no order ids given (use --ids or ORDER_EXPORT_IDS)"));
        }
        if order_ids.contains(&0) {
            return Err(invalid("order ids must be positive"));
        }

        let workers = overrides.workers.or(file.workers).unwrap_or(DEFAULT_WORKERS);
        if workers == 0 {
            return Err(invalid("worker count must be at least 1"));
        }

        let delimiter = match overrides.delimiter.or(file.delimiter) {
            Some(text) => parse_delimiter(&text)?,
            None => DEFAULT_DELIMITER,
        };

        Ok(Self {
            base_url,
            order_ids,
            workers,
            output: overrides
                .output
                .or(file.output)
                .unwrap_or_else(default_output_path),
            delimiter,
            description_separator: overrides
                .description_separator
                .or(file.description_separator)
                .unwrap_or_default(),
        })
    }
}

/// Parses a base URL, accepting only `http` and `https`.
pub fn parse_base_url(text: &str) -> Result<Url> {
    let url = Url::parse(text.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(&format!(
            "unsupported URL scheme '{}' in base URL {}",
            other, text
        ))),
    }
}

/// Parses a field delimiter: a single ASCII character, or `tab` / `\t`.
pub fn parse_delimiter(text: &str) -> Result<u8> {
    match text {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => match text.as_bytes() {
            [byte] if byte.is_ascii() && *byte != b'"' && *byte != b'\n' && *byte != b'\r' => {
                Ok(*byte)
            }
            _ => Err(invalid(&format!(
                "delimiter must be a single ASCII character other than a quote or newline, got '{}'",
                text
            ))),
        },
    }
}

fn dedup_ids(ids: Vec<u64>) -> Vec<u64> {
    let mut seen = HashSet::with_capacity(ids.len());
    let total = ids.len();
    let unique: Vec<u64> = ids.into_iter().filter(|id| seen.insert(*id)).collect();
    if unique.len() != total {
        debug!("Dropped {} duplicate order ids", total - unique.len());
    }
    unique
}

fn invalid(message: &str) -> Error {
    Error::InvalidConfig {
        message: message.to_string(),
    }
}
