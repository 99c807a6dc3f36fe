use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A requested column is not part of the dataset.
    #[error("unknown column: '{column}'")]
    UnknownColumn { column: String },
    #[error("duplicate column: '{column}'")]
    DuplicateColumn { column: String },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl ModelError {
    pub fn unknown_column(column: impl Into<String>) -> Self {
        Self::UnknownColumn {
            column: column.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
