//! Error types for the per-country pipeline.

use std::path::PathBuf;

use arrow::error::ArrowError;
use thiserror::Error;

/// Failure of one country's pipeline. Malformed dates are never errors; they
/// land in the unparseable bucket instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Input missing, unreadable, or not a spreadsheet.
    #[error("failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Workbook opened but contains no worksheets.
    #[error("workbook {} has no worksheets", path.display())]
    EmptyWorkbook { path: PathBuf },

    /// Table too small to select the date column from.
    #[error("expected at least 2 rows and 2 columns, found {rows} rows and {columns} columns")]
    Schema { rows: usize, columns: usize },

    /// Arrow failed to build or serialize the result batch.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: ArrowError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
