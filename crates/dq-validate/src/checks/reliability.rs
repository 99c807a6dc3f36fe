//! Reliability: no two values in the column are equal.
//!
//! Nulls compare equal to each other, and an integral float compares equal
//! to the integer of the same value.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use dq_model::CellValue;

/// Hashable identity of a cell for duplicate detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum CellKey<'a> {
    Null,
    Integer(i64),
    Float(u64),
    Text(&'a str),
    Timestamp(NaiveDateTime),
}

impl<'a> CellKey<'a> {
    fn of(value: &'a CellValue) -> Self {
        match value {
            CellValue::Null => Self::Null,
            CellValue::Integer(v) => Self::Integer(*v),
            CellValue::Float(v) => float_key(*v),
            CellValue::Text(v) => Self::Text(v.as_str()),
            CellValue::Timestamp(v) => Self::Timestamp(*v),
        }
    }
}

fn float_key(value: f64) -> CellKey<'static> {
    const LOWER: f64 = i64::MIN as f64;
    const UPPER: f64 = i64::MAX as f64;

    if value.fract() == 0.0 && (LOWER..UPPER).contains(&value) {
        // Integral and in range: the cast is exact, and -0.0 folds into 0.
        CellKey::Integer(value as i64)
    } else if value.is_nan() {
        CellKey::Float(f64::NAN.to_bits())
    } else {
        CellKey::Float(value.to_bits())
    }
}

pub fn check(values: &[CellValue]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().all(|value| seen.insert(CellKey::of(value)))
}
