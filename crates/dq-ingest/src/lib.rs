//! Dataset ingestion.
//!
//! This crate turns tabular files into the in-memory [`dq_model::Dataset`]
//! evaluated by the rule engine.
//!
//! # Features
//!
//! - **CSV Loading**: Read CSV files with one or two header rows
//! - **Cell Typing**: Classify text cells as integer, float, timestamp, text or null
//! - **Frame Access**: Read Polars frames directly through [`dq_model::ColumnSource`]
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use dq_ingest::{IngestOptions, load_dataset};
//!
//! let (dataset, headers) = load_dataset(Path::new("customers.csv"), &IngestOptions::default())?;
//! ```

mod csv;
mod error;
mod frame;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{
    CsvHeaders, IngestOptions, MAX_INPUT_FILE_SIZE, check_file_size, read_csv_schema,
    read_csv_table, split_header_line, validate_dataframe_shape, validate_encoding,
};

// === Frames and Datasets ===
pub use frame::{FrameColumns, dataset_from_frame, load_dataset};
