//! Timeliness: a timestamp column whose values all fall inside the recent
//! window.

use chrono::{NaiveDateTime, TimeDelta};
use dq_model::{CellValue, ColumnType};

/// Width of the recency window, counted back from `now`.
pub const TIMELINESS_WINDOW_DAYS: i64 = 365;

/// Oldest instant that still counts as recent.
pub fn cutoff(now: NaiveDateTime) -> NaiveDateTime {
    now.checked_sub_signed(TimeDelta::days(TIMELINESS_WINDOW_DAYS))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Fails outright unless the column is declared as a timestamp. Nulls and
/// values that are not timestamps fail; timestamps after `now` pass.
pub fn check(values: &[CellValue], declared: ColumnType, now: NaiveDateTime) -> bool {
    if !declared.is_timestamp() {
        return false;
    }
    let cutoff = cutoff(now);
    values
        .iter()
        .all(|value| value.as_timestamp().is_some_and(|ts| ts >= cutoff))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn days_ago(days: i64) -> CellValue {
        CellValue::Timestamp(now() - TimeDelta::days(days))
    }

    #[test]
    fn test_recent_values_pass() {
        let values = [days_ago(1), days_ago(30), days_ago(365)];
        assert!(check(&values, ColumnType::Timestamp, now()));
    }

    #[test]
    fn test_old_value_fails() {
        let values = [days_ago(1), days_ago(400)];
        assert!(!check(&values, ColumnType::Timestamp, now()));
    }

    #[test]
    fn test_just_outside_window_fails() {
        let value = CellValue::Timestamp(cutoff(now()) - TimeDelta::seconds(1));
        assert!(!check(&[value], ColumnType::Timestamp, now()));
    }

    #[test]
    fn test_future_value_passes() {
        let value = CellValue::Timestamp(now() + TimeDelta::days(10));
        assert!(check(&[value], ColumnType::Timestamp, now()));
    }

    #[test]
    fn test_non_timestamp_column_fails() {
        let values = [days_ago(1)];
        assert!(!check(&values, ColumnType::Text, now()));
        assert!(!check(&values, ColumnType::Unknown, now()));
        assert!(!check(&[], ColumnType::Numeric, now()));
    }

    #[test]
    fn test_null_or_text_cell_fails() {
        assert!(!check(&[days_ago(1), CellValue::Null], ColumnType::Timestamp, now()));
        assert!(!check(
            &[days_ago(1), CellValue::text("soon")],
            ColumnType::Timestamp,
            now()
        ));
    }

    #[test]
    fn test_empty_timestamp_column_passes() {
        assert!(check(&[], ColumnType::Timestamp, now()));
    }

    #[test]
    fn test_cutoff_saturates() {
        assert_eq!(cutoff(NaiveDateTime::MIN), NaiveDateTime::MIN);
    }
}
