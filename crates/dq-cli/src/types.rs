use dq_model::{ColumnType, QualityReport};

/// Outcome of `dq check`.
#[derive(Debug)]
pub struct CheckResult {
    pub report: QualityReport,
    pub rows: usize,
}

/// One line of `dq columns`.
#[derive(Debug)]
pub struct ColumnSummary {
    pub name: String,
    pub label: Option<String>,
    pub column_type: ColumnType,
    pub non_null: usize,
    pub rows: usize,
}
