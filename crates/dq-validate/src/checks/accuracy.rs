//! Accuracy: every non-null value is numeric.

use dq_model::CellValue;

/// Nulls are ignored; an all-null or empty column passes.
pub fn check(values: &[CellValue]) -> bool {
    values
        .iter()
        .filter(|value| !value.is_null())
        .all(CellValue::is_numeric)
}
