//! Launch Dataset
//!
//! Loads the static CSV of SpaceX launch records into an immutable in-memory
//! table at startup. The dataset is constructed once and shared read-only
//! with every request handler for the lifetime of the process; there is no
//! reload mechanism and no retry on failure.

pub mod loader;
pub mod model;

pub use loader::{fetch_dataset, load_csv_file, parse_csv};
pub use model::{LaunchDataset, LaunchRecord, ALL_SITES};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the launch dataset.
///
/// All of these are fatal at startup: the process either serves the full
/// dataset or does not serve at all.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// HTTP fetch failed (connection, TLS, timeout)
    #[error("Failed to fetch dataset: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Fetch completed with a non-success status code
    #[error("Dataset fetch returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// CSV was malformed or a field failed to parse
    #[error("Failed to parse dataset CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing or a value violates the schema
    #[error("Dataset schema mismatch: {0}")]
    Schema(String),

    /// The CSV parsed cleanly but contained no records
    #[error("Dataset contains no records")]
    Empty,

    /// Local file read failed
    #[error("Failed to read dataset file {path:?}: {error}")]
    Io { path: PathBuf, error: String },
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
