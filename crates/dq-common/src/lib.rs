//! Shared utilities for the dq workspace.
//!
//! This crate provides common utilities used across the workspace,
//! including Polars value conversion and scalar text classification.

pub mod any_value;
pub mod scalar;

// Re-export commonly used functions at crate root for convenience
pub use any_value::{any_to_cell, dtype_to_column_type};
pub use scalar::{classify_text, infer_column_type, parse_f64, parse_i64, parse_timestamp};
