//! Polars `AnyValue` conversion functions.
//!
//! Bridges Polars frames to the [`CellValue`] model used by the rule engine.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use dq_model::{CellValue, ColumnType};
use polars::prelude::{AnyValue, DataType, TimeUnit};

use crate::scalar::classify_text;

/// Converts a Polars `AnyValue` to a [`CellValue`].
///
/// Numeric values keep their integer/float nature, dates and datetimes become
/// timestamps, and strings are classified cell by cell with
/// [`classify_text`]. Booleans count as integers (0/1).
///
/// # Examples
///
/// ```
/// use dq_common::any_to_cell;
/// use dq_model::CellValue;
/// use polars::prelude::AnyValue;
///
/// assert_eq!(any_to_cell(AnyValue::Null), CellValue::Null);
/// assert_eq!(any_to_cell(AnyValue::Int32(42)), CellValue::Integer(42));
/// assert_eq!(any_to_cell(AnyValue::String("N/A")), CellValue::text("N/A"));
/// ```
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Null,
        AnyValue::Boolean(b) => CellValue::Integer(i64::from(b)),
        AnyValue::Int8(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int16(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int32(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int64(v) => CellValue::Integer(v),
        AnyValue::UInt8(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt16(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt32(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => CellValue::Integer(v),
            Err(_) => CellValue::Float(v as f64),
        },
        AnyValue::Float32(v) => CellValue::Float(f64::from(v)),
        AnyValue::Float64(v) => CellValue::Float(v),
        AnyValue::Date(days) => {
            date_from_epoch_days(days).map_or(CellValue::Null, CellValue::Timestamp)
        }
        AnyValue::Datetime(v, unit, _) => {
            datetime_from_epoch(v, unit).map_or(CellValue::Null, CellValue::Timestamp)
        }
        AnyValue::String(s) => classify_text(s),
        AnyValue::StringOwned(s) => classify_text(&s),
        other => CellValue::Text(other.to_string()),
    }
}

/// Maps a Polars dtype to a declared column type.
///
/// Returns `None` for string columns: their declared type depends on the
/// cells and has to be inferred.
pub fn dtype_to_column_type(dtype: &DataType) -> Option<ColumnType> {
    match dtype {
        DataType::Boolean
        | DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64
        | DataType::Float32
        | DataType::Float64 => Some(ColumnType::Numeric),
        DataType::Date | DataType::Datetime(_, _) => Some(ColumnType::Timestamp),
        DataType::String => None,
        _ => Some(ColumnType::Unknown),
    }
}

fn date_from_epoch_days(days: i32) -> Option<NaiveDateTime> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?;
    epoch
        .checked_add_signed(chrono::Duration::days(i64::from(days)))?
        .and_hms_opt(0, 0, 0)
}

fn datetime_from_epoch(value: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let utc = match unit {
        TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(value)),
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(value),
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(value),
    };
    utc.map(|dt| dt.naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_any_to_cell_numbers() {
        assert_eq!(any_to_cell(AnyValue::Int64(-100)), CellValue::Integer(-100));
        assert_eq!(any_to_cell(AnyValue::UInt32(0)), CellValue::Integer(0));
        assert_eq!(any_to_cell(AnyValue::Float64(1.5)), CellValue::Float(1.5));
        assert_eq!(any_to_cell(AnyValue::Boolean(true)), CellValue::Integer(1));
    }

    #[test]
    fn test_any_to_cell_strings_are_classified() {
        assert_eq!(any_to_cell(AnyValue::String("")), CellValue::Null);
        assert_eq!(any_to_cell(AnyValue::String("25")), CellValue::Integer(25));
        assert_eq!(any_to_cell(AnyValue::String("abc")), CellValue::text("abc"));
        assert_eq!(
            any_to_cell(AnyValue::String("2023-12-31")),
            CellValue::Timestamp(midnight(2023, 12, 31))
        );
    }

    #[test]
    fn test_any_to_cell_temporal() {
        assert_eq!(
            any_to_cell(AnyValue::Date(1)),
            CellValue::Timestamp(midnight(1970, 1, 2))
        );
        assert_eq!(
            any_to_cell(AnyValue::Datetime(86_400_000, TimeUnit::Milliseconds, None)),
            CellValue::Timestamp(midnight(1970, 1, 2))
        );
    }

    #[test]
    fn test_dtype_to_column_type() {
        assert_eq!(
            dtype_to_column_type(&DataType::Int64),
            Some(ColumnType::Numeric)
        );
        assert_eq!(
            dtype_to_column_type(&DataType::Date),
            Some(ColumnType::Timestamp)
        );
        assert_eq!(dtype_to_column_type(&DataType::String), None);
        assert_eq!(
            dtype_to_column_type(&DataType::Null),
            Some(ColumnType::Unknown)
        );
    }
}
