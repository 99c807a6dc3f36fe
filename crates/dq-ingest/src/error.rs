//! Error types for dataset ingestion.
//!
//! Every variant describes input that could not be turned into a dataset;
//! none of them reach the rule engine.

use std::path::PathBuf;

use dq_model::ModelError;
use thiserror::Error;

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, limit is {max_size} bytes")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File uses an encoding the loader cannot read.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no content at all.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header row is missing or blank.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },

    /// A header cell is blank.
    #[error("empty column name in {path}")]
    EmptyColumnName { path: PathBuf },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    // === Dataset Errors ===
    /// Loaded data does not fit the dataset shape.
    #[error("malformed dataset: {0}")]
    Model(#[from] ModelError),
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
