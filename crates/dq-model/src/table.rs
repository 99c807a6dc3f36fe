#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::cell::{CellValue, ColumnType};
use crate::error::{ModelError, Result};

/// Read-only, column-oriented access to tabular data.
///
/// Implementations present column values for rule evaluation without
/// exposing how the data is stored.
pub trait ColumnSource {
    /// Column names in declaration order.
    fn column_names(&self) -> Vec<String>;

    /// All values of a column, one per row, in row order.
    fn values_of(&self, column: &str) -> Result<Vec<CellValue>>;

    /// Declared logical type of a column.
    fn declared_type(&self, column: &str) -> Result<ColumnType>;

    fn has_column(&self, column: &str) -> bool {
        self.column_names().iter().any(|name| name == column)
    }
}

/// Name and declared type of a dataset column.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    pub column_type: ColumnType,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// One row, keyed by column name. Keys are shared with the owning dataset.
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub cells: BTreeMap<Arc<str>, CellValue>,
}

impl Row {
    /// Cell for `column`; a cell missing from the row reads as null.
    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&CellValue::Null)
    }
}

/// An in-memory tabular dataset: an ordered sequence of rows over a fixed,
/// named set of typed columns.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<ColumnSpec>,
    keys: Vec<Arc<str>>,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(columns: Vec<ColumnSpec>) -> Result<Self> {
        for (idx, column) in columns.iter().enumerate() {
            if columns[..idx].iter().any(|prev| prev.name == column.name) {
                return Err(ModelError::DuplicateColumn {
                    column: column.name.clone(),
                });
            }
        }
        let keys = columns
            .iter()
            .map(|column| Arc::from(column.name.as_str()))
            .collect();
        Ok(Self {
            columns,
            keys,
            rows: Vec::new(),
        })
    }

    /// Append a row given as one cell per column, in column order.
    pub fn push_row(&mut self, cells: Vec<CellValue>) -> Result<()> {
        if cells.len() != self.columns.len() {
            return Err(ModelError::RowWidth {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: cells.len(),
            });
        }
        let cells = self.keys.iter().map(Arc::clone).zip(cells).collect();
        self.rows.push(Row { cells });
        Ok(())
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    fn column(&self, name: &str) -> Result<&ColumnSpec> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .ok_or_else(|| ModelError::unknown_column(name))
    }
}

impl ColumnSource for Dataset {
    fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|column| column.name.clone()).collect()
    }

    fn values_of(&self, column: &str) -> Result<Vec<CellValue>> {
        let spec = self.column(column)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(&spec.name).clone())
            .collect())
    }

    fn declared_type(&self, column: &str) -> Result<ColumnType> {
        self.column(column).map(|spec| spec.column_type)
    }

    fn has_column(&self, column: &str) -> bool {
        self.column(column).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        let mut dataset = Dataset::new(vec![
            ColumnSpec::new("id", ColumnType::Numeric),
            ColumnSpec::new("name", ColumnType::Text),
        ])
        .unwrap();
        dataset
            .push_row(vec![CellValue::Integer(1), CellValue::text("Ada")])
            .unwrap();
        dataset
            .push_row(vec![CellValue::Integer(2), CellValue::Null])
            .unwrap();
        dataset
    }

    #[test]
    fn test_values_in_row_order() {
        let dataset = sample();
        assert_eq!(
            dataset.values_of("name").unwrap(),
            vec![CellValue::text("Ada"), CellValue::Null]
        );
        assert_eq!(dataset.declared_type("id").unwrap(), ColumnType::Numeric);
    }

    #[test]
    fn test_unknown_column() {
        let dataset = sample();
        assert_eq!(
            dataset.values_of("missing"),
            Err(ModelError::unknown_column("missing"))
        );
        assert!(dataset.declared_type("missing").is_err());
        assert!(!dataset.has_column("missing"));
        assert!(dataset.has_column("id"));
    }

    #[test]
    fn test_row_width_mismatch() {
        let mut dataset = sample();
        let err = dataset.push_row(vec![CellValue::Integer(3)]).unwrap_err();
        assert_eq!(
            err,
            ModelError::RowWidth {
                row: 2,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(dataset.height(), 2);
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let err = Dataset::new(vec![
            ColumnSpec::new("a", ColumnType::Text),
            ColumnSpec::new("a", ColumnType::Numeric),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateColumn {
                column: "a".to_string()
            }
        );
    }

    #[test]
    fn test_rows_share_column_keys() {
        let dataset = sample();
        let first = dataset.rows[0].cells.keys().collect::<Vec<_>>();
        let second = dataset.rows[1].cells.keys().collect::<Vec<_>>();

        assert_eq!(first.len(), 2);
        for (a, b) in first.iter().zip(&second) {
            assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn test_missing_cell_reads_as_null() {
        let row = Row::default();
        assert_eq!(row.get("anything"), &CellValue::Null);
    }
}
