//! Completeness: no value is null.

use dq_model::CellValue;

pub fn check(values: &[CellValue]) -> bool {
    !values.iter().any(CellValue::is_null)
}
