//! Classification of raw text cells into typed values.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use dq_model::{CellValue, ColumnType};

/// Datetime layouts accepted for timestamp cells, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts; these resolve to midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parses a string as `i64`, returning `None` for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
///
/// Only strings containing at least one digit qualify, so spellings like
/// `inf` or `NaN` stay text.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses an ISO 8601 style timestamp or date.
///
/// Values carrying a UTC offset are normalized to UTC.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    DATE_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(trimmed, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
    })
}

/// Classifies a raw text cell.
///
/// Only the empty string is null. Surrounding whitespace is ignored when
/// reading numbers and timestamps; anything else is kept as text exactly as
/// written. Otherwise the first matching interpretation wins: integer,
/// float, timestamp, then plain text.
pub fn classify_text(value: &str) -> CellValue {
    if value.is_empty() {
        return CellValue::Null;
    }
    let trimmed = value.trim();
    if let Some(number) = parse_i64(trimmed) {
        return CellValue::Integer(number);
    }
    if let Some(number) = parse_f64(trimmed) {
        return CellValue::Float(number);
    }
    if let Some(timestamp) = parse_timestamp(trimmed) {
        return CellValue::Timestamp(timestamp);
    }
    CellValue::Text(value.to_string())
}

/// Infers the declared type of a column from its cells.
///
/// Nulls are ignored. A column whose non-null cells all share one kind gets
/// that kind; mixed columns and columns without any non-null cell are
/// `Unknown`.
pub fn infer_column_type(values: &[CellValue]) -> ColumnType {
    let mut inferred: Option<ColumnType> = None;
    for value in values {
        let kind = match value {
            CellValue::Null => continue,
            CellValue::Integer(_) | CellValue::Float(_) => ColumnType::Numeric,
            CellValue::Text(_) => ColumnType::Text,
            CellValue::Timestamp(_) => ColumnType::Timestamp,
        };
        match inferred {
            None => inferred = Some(kind),
            Some(existing) if existing == kind => {}
            Some(_) => return ColumnType::Unknown,
        }
    }
    inferred.unwrap_or(ColumnType::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64(""), None);
        assert_eq!(parse_i64("  "), None);
        assert_eq!(parse_i64("42"), Some(42));
        assert_eq!(parse_i64("  -100  "), Some(-100));
        assert_eq!(parse_i64("4.5"), None);
    }

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("3.25"), Some(3.25));
        assert_eq!(parse_f64("  1e3 "), Some(1000.0));
        assert_eq!(parse_f64("inf"), None);
        assert_eq!(parse_f64("NaN"), None);
        assert_eq!(parse_f64("N/A"), None);
    }

    #[test]
    fn test_parse_timestamp_layouts() {
        assert_eq!(
            parse_timestamp("2024-03-01T08:30:00"),
            Some(ts(2024, 3, 1, 8, 30, 0))
        );
        assert_eq!(
            parse_timestamp("2024-03-01 08:30:15.250"),
            Some(
                NaiveDate::from_ymd_opt(2024, 3, 1)
                    .unwrap()
                    .and_hms_milli_opt(8, 30, 15, 250)
                    .unwrap()
            )
        );
        assert_eq!(
            parse_timestamp("2024-03-01T08:30"),
            Some(ts(2024, 3, 1, 8, 30, 0))
        );
        assert_eq!(parse_timestamp("2024-03-01"), Some(ts(2024, 3, 1, 0, 0, 0)));
        assert_eq!(parse_timestamp("2024/03/01"), Some(ts(2024, 3, 1, 0, 0, 0)));
        assert_eq!(
            parse_timestamp("2024-03-01T10:00:00+02:00"),
            Some(ts(2024, 3, 1, 8, 0, 0))
        );
        assert_eq!(parse_timestamp("03/01/2024"), None);
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_classify_text() {
        assert_eq!(classify_text(""), CellValue::Null);
        assert_eq!(classify_text("   "), CellValue::text("   "));
        assert_eq!(classify_text("30"), CellValue::Integer(30));
        assert_eq!(classify_text("2.5"), CellValue::Float(2.5));
        assert_eq!(classify_text(" N/A "), CellValue::text(" N/A "));
        assert_eq!(classify_text(" 42 "), CellValue::Integer(42));
        assert_eq!(
            classify_text("2024-01-15"),
            CellValue::Timestamp(ts(2024, 1, 15, 0, 0, 0))
        );
    }

    #[test]
    fn test_infer_column_type() {
        assert_eq!(
            infer_column_type(&[CellValue::Integer(1), CellValue::Null, CellValue::Float(2.0)]),
            ColumnType::Numeric
        );
        assert_eq!(
            infer_column_type(&[CellValue::text("a"), CellValue::text("b")]),
            ColumnType::Text
        );
        assert_eq!(
            infer_column_type(&[CellValue::Timestamp(ts(2024, 1, 1, 0, 0, 0))]),
            ColumnType::Timestamp
        );
        assert_eq!(
            infer_column_type(&[CellValue::Integer(30), CellValue::text("N/A")]),
            ColumnType::Unknown
        );
        assert_eq!(
            infer_column_type(&[CellValue::Null, CellValue::Null]),
            ColumnType::Unknown
        );
        assert_eq!(infer_column_type(&[]), ColumnType::Unknown);
    }
}
