//! # Table Output
//!
//! `TableWriter` persists rows as a delimited text file with a header line.
//!
//! ## Rules
//!
//! 1.  **Nothing to write**: an empty row list creates no file and reports
//!     [`WriteOutcome::NothingToWrite`].
//!
//! 2.  **No overwrite**: if the target path exists the write fails with
//!     `Error::OutputCollision` before anything is touched. The file is
//!     opened with create-new semantics, so a file appearing between the
//!     check and the open is refused too.
//!
//!     A file left half-written by a failed serialize or flush is removed.
//!
//! 3.  **Header**: taken from the serialized field names of the row type.
//!     Every row has the same type, so every row has the same columns.
//!
//! 4.  **Order**: rows are written in the order supplied, one per line.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind};
use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use crate::error::{Error, Result};

/// Result of a successful call to [`TableWriter::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created with this many data rows.
    Written { rows: usize },
    /// There were no rows; no file was created.
    NothingToWrite,
}

impl WriteOutcome {
    pub fn rows_written(&self) -> usize {
        match self {
            WriteOutcome::Written { rows } => *rows,
            WriteOutcome::NothingToWrite => 0,
        }
    }
}

/// Writes serializable rows to a delimited file.
#[derive(Debug, Clone)]
pub struct TableWriter {
    delimiter: u8,
}

impl Default for TableWriter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl TableWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `delimiter` between fields instead of a comma.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Writes `rows` to a new file at `path`.
    pub fn write<T: Serialize>(&self, rows: &[T], path: &Path) -> Result<WriteOutcome> {
        if rows.is_empty() {
            warn!("Nothing to write into {}", path.display());
            return Ok(WriteOutcome::NothingToWrite);
        }

        if path.exists() {
            return Err(Error::OutputCollision {
                path: path.to_path_buf(),
            });
        }

        info!("Writing {} records into {}", rows.len(), path.display());

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => Error::OutputCollision {
                    path: path.to_path_buf(),
                },
                _ => Error::Io(e),
            })?;

        if let Err(e) = self.write_rows(file, rows) {
            // Never leave a partial table at the output path.
            if let Err(remove_err) = fs::remove_file(path) {
                warn!(
                    "Could not remove partial output {}: {}",
                    path.display(),
                    remove_err
                );
            }
            return Err(e);
        }

        info!("Wrote {} rows in {}", rows.len(), path.display());
        Ok(WriteOutcome::Written { rows: rows.len() })
    }

    fn write_rows<T: Serialize>(&self, file: File, rows: &[T]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(BufWriter::new(file));
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
