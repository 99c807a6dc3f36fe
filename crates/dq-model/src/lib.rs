//! Data model for column-level data quality evaluation.

pub mod cell;
pub mod error;
pub mod report;
pub mod request;
pub mod rule;
pub mod table;

pub use cell::{CellValue, ColumnType};
pub use error::{ModelError, Result};
pub use report::QualityReport;
pub use request::RuleRequest;
pub use rule::RuleKind;
pub use table::{ColumnSource, ColumnSpec, Dataset, Row};
