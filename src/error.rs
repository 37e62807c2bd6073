//! # Error Handling
//!
//! This module defines the centralized error type for `order-export`. It uses
//! `thiserror` to build a single `Error` enum covering every failure the
//! library can report, and a `Result<T>` alias used across all modules.
//!
//! Not every variant is fatal. The fetch layer produces `IdentityMismatch`,
//! `Transport` and `Decode` for a single request; those are logged and the
//! response is dropped, so they never end a run on their own. The variants
//! that do end a run are:
//!
//! - `OutputCollision`: the output file already exists.
//! - `EmptyResultSet`: nothing survived the fetch phase.
//! - `InvalidConfig`: the resolved configuration cannot be used.
//! - Wrapped I/O, CSV and YAML errors from the write and config layers.

use std::path::PathBuf;

use thiserror::Error;

use crate::entity::EntityKind;

/// Main error type for order-export operations
#[derive(Error, Debug)]
pub enum Error {
    /// The identity field of a response does not match the requested id.
    ///
    /// `returned` is `None` when the field is missing or is not an integer.
    #[error("Identity mismatch: requested {kind} {requested} but got {}", returned.map(|r| r.to_string()).unwrap_or_else(|| "no identifier".to_string()))]
    IdentityMismatch {
        kind: EntityKind,
        requested: u64,
        returned: Option<u64>,
    },

    /// The request failed before a JSON document could be read.
    ///
    /// Covers connection errors, non-success status codes and bodies that
    /// are not JSON.
    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    /// The response was JSON but did not have the expected entity shape.
    #[error("Could not decode {kind} {id}: {message}")]
    Decode {
        kind: EntityKind,
        id: u64,
        message: String,
    },

    /// No rows were produced, so there is nothing to write.
    #[error("No records to write: every fetch was discarded or no orders had items")]
    EmptyResultSet,

    /// The output file already exists and will not be overwritten.
    #[error("Output file {} already exists", path.display())]
    OutputCollision { path: PathBuf },

    /// The resolved configuration is unusable.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The worker pool could not be started.
    #[error("Worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A CSV serialization error, wrapped from `csv::Error`.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Whether this error only affects a single fetched entity.
    ///
    /// Per-entity errors are logged and the entity is skipped; everything
    /// else aborts the run.
    pub fn is_per_entity(&self) -> bool {
        matches!(
            self,
            Error::IdentityMismatch { .. } | Error::Transport { .. } | Error::Decode { .. }
        )
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
