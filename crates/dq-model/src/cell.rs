//! Cell values and declared column types.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single cell of a tabular dataset.
///
/// `Null` is a first-class value and is distinct from a cell holding a value
/// of the wrong type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Timestamp(NaiveDateTime),
    Null,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for integer and float cells.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Timestamp(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Timestamp(value)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Declared logical type of a column.
///
/// Cells may still individually be null or of an unexpected type; the
/// declared type describes what the column is meant to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Numeric,
    Text,
    Timestamp,
    #[default]
    Unknown,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Text => "text",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Unknown => "unknown",
        }
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, ColumnType::Timestamp)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
