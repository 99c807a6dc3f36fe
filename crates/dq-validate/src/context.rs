//! Evaluation context.

use chrono::{NaiveDateTime, Utc};

/// Inputs to an evaluation that do not come from the dataset.
///
/// Timeliness is the only rule that depends on the current time; the
/// instant is fixed here so a whole evaluation sees one "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationContext {
    now: NaiveDateTime,
}

impl EvaluationContext {
    /// Evaluate as of a fixed instant.
    pub fn at(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Evaluate as of the current time in UTC.
    ///
    /// Timestamps carrying an offset are normalized to UTC when loaded, and
    /// timestamps without one are taken to be UTC as well.
    pub fn current() -> Self {
        Self::at(Utc::now().naive_utc())
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn test_current_is_utc() {
        let before = Utc::now().naive_utc();
        let now = EvaluationContext::current().now();
        let after = Utc::now().naive_utc();

        assert!(before <= now && now <= after);
        assert!(after - before < TimeDelta::seconds(5));
    }

    #[test]
    fn test_at_is_fixed() {
        let instant = chrono::NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(EvaluationContext::at(instant).now(), instant);
    }
}
