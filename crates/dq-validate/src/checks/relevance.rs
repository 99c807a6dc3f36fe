//! Relevance: at least one value is present.

use dq_model::CellValue;

/// An empty column has no values to be relevant and fails.
pub fn check(values: &[CellValue]) -> bool {
    values.iter().any(|value| !value.is_null())
}
