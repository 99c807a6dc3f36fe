//! Column access over Polars frames and conversion into datasets.

use std::path::Path;

use polars::prelude::{AnyValue, Column, DataFrame};

use dq_common::{any_to_cell, dtype_to_column_type, infer_column_type};
use dq_model::{CellValue, ColumnSource, ColumnSpec, ColumnType, Dataset, ModelError};

use crate::csv::{CsvHeaders, IngestOptions, read_csv_table};
use crate::error::Result;

/// [`ColumnSource`] over a borrowed Polars `DataFrame`.
///
/// Typed columns take their declared type from the dtype; string columns
/// are classified cell by cell and typed by inference.
#[derive(Debug, Clone, Copy)]
pub struct FrameColumns<'a> {
    df: &'a DataFrame,
}

impl<'a> FrameColumns<'a> {
    #[inline]
    pub fn new(df: &'a DataFrame) -> Self {
        Self { df }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.df.height()
    }

    fn column(&self, name: &str) -> dq_model::Result<&'a Column> {
        self.df
            .column(name)
            .map_err(|_| ModelError::unknown_column(name))
    }

    fn cells(&self, column: &Column) -> Vec<CellValue> {
        (0..self.df.height())
            .map(|idx| any_to_cell(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect()
    }
}

impl ColumnSource for FrameColumns<'_> {
    fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    fn values_of(&self, column: &str) -> dq_model::Result<Vec<CellValue>> {
        let column = self.column(column)?;
        Ok(self.cells(column))
    }

    fn declared_type(&self, column: &str) -> dq_model::Result<ColumnType> {
        let column = self.column(column)?;
        Ok(dtype_to_column_type(column.dtype())
            .unwrap_or_else(|| infer_column_type(&self.cells(column))))
    }

    fn has_column(&self, column: &str) -> bool {
        self.df.column(column).is_ok()
    }
}

/// Materialize a frame as a [`Dataset`].
pub fn dataset_from_frame(df: &DataFrame) -> Result<Dataset> {
    let source = FrameColumns::new(df);
    let mut specs = Vec::with_capacity(df.width());
    let mut columns = Vec::with_capacity(df.width());

    for name in source.column_names() {
        let cells = source.values_of(&name)?;
        let column_type = match dtype_to_column_type(df.column(&name)?.dtype()) {
            Some(column_type) => column_type,
            None => infer_column_type(&cells),
        };
        specs.push(ColumnSpec::new(name, column_type));
        columns.push(cells);
    }

    let mut dataset = Dataset::new(specs)?;
    let mut columns: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();
    for _ in 0..df.height() {
        let cells = columns
            .iter_mut()
            .map(|column| column.next().unwrap_or(CellValue::Null))
            .collect();
        dataset.push_row(cells)?;
    }
    Ok(dataset)
}

/// Load a CSV file as a dataset, returning the header information alongside.
pub fn load_dataset(path: &Path, options: &IngestOptions) -> Result<(Dataset, CsvHeaders)> {
    let (df, headers) = read_csv_table(path, options)?;
    let dataset = dataset_from_frame(&df)?;
    tracing::info!(
        path = %path.display(),
        rows = dataset.height(),
        columns = dataset.width(),
        "loaded dataset"
    );
    Ok((dataset, headers))
}
