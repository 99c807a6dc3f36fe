//! The closed set of data quality rule kinds.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A data quality dimension evaluated per column.
///
/// The set is fixed; adding a kind is a code change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Every non-null cell holds a number.
    Accuracy,
    /// No cell is null.
    Completeness,
    /// No two cells hold the same value.
    Reliability,
    /// At least one cell is non-null.
    Relevance,
    /// The column holds timestamps, all from the last 365 days.
    Timeliness,
}

impl RuleKind {
    pub const ALL: [RuleKind; 5] = [
        RuleKind::Accuracy,
        RuleKind::Completeness,
        RuleKind::Reliability,
        RuleKind::Relevance,
        RuleKind::Timeliness,
    ];

    /// Returns the canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Accuracy => "accuracy",
            RuleKind::Completeness => "completeness",
            RuleKind::Reliability => "reliability",
            RuleKind::Relevance => "relevance",
            RuleKind::Timeliness => "timeliness",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RuleKind::Accuracy => "Every non-null value is numeric",
            RuleKind::Completeness => "No value is missing",
            RuleKind::Reliability => "No value occurs more than once",
            RuleKind::Relevance => "At least one value is present",
            RuleKind::Timeliness => "Timestamp column with every value from the last 365 days",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = String;

    /// Parse a rule name (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "accuracy" => Ok(RuleKind::Accuracy),
            "completeness" => Ok(RuleKind::Completeness),
            "reliability" => Ok(RuleKind::Reliability),
            "relevance" => Ok(RuleKind::Relevance),
            "timeliness" => Ok(RuleKind::Timeliness),
            _ => Err(format!("Unknown rule kind: {s}")),
        }
    }
}
