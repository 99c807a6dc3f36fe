//! CSV file reading into string-typed Polars frames.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

use super::header::CsvHeaders;

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_INPUT_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Column count above which a loaded file is reported as unusually wide.
const WIDE_DATASET_COLUMNS: usize = 500;

/// Options controlling how a CSV file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// 1 = column names only, 2 = a label row followed by column names.
    pub header_rows: usize,
    /// Files larger than this are rejected before reading.
    pub max_file_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            header_rows: 1,
            max_file_size: MAX_INPUT_FILE_SIZE,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_header_rows(mut self, header_rows: usize) -> Self {
        self.header_rows = header_rows;
        self
    }

    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Check file size against a limit.
pub fn check_file_size(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reject UTF-16 input; only UTF-8 (with or without BOM) is supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Validate the frame shape after loading.
///
/// Zero rows is a valid (empty) dataset. Blank column names are not.
pub fn validate_dataframe_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.width() > WIDE_DATASET_COLUMNS {
        tracing::warn!(
            path = %path.display(),
            columns = df.width(),
            "dataset has more than {WIDE_DATASET_COLUMNS} columns"
        );
    }

    if df
        .get_column_names()
        .iter()
        .any(|name| name.trim().is_empty())
    {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Reads the first N lines from a file, stripping a UTF-8 BOM.
fn read_first_lines(path: &Path, n: usize) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| open_error(path, e))?;

    let reader = BufReader::new(file);
    let mut lines = Vec::with_capacity(n);

    for line_result in reader.lines().take(n) {
        let line = line_result.map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let cleaned = line.strip_prefix('\u{feff}').unwrap_or(&line).to_string();
        lines.push(cleaned);
    }

    Ok(lines)
}

/// Reads the header rows of a CSV file.
///
/// `header_rows` is 1 for column names only, or 2 for a label row followed
/// by column names.
pub fn read_csv_schema(path: &Path, header_rows: usize) -> Result<CsvHeaders> {
    let lines = read_first_lines(path, header_rows.clamp(1, 2))?;

    let Some(headers) = CsvHeaders::from_lines(&lines) else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };

    if headers.is_empty() || headers.is_blank() {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }

    Ok(headers)
}

/// Reads a CSV file into a Polars DataFrame.
///
/// Every column is read as text; typing happens per cell when the frame is
/// turned into a dataset. Column names are replaced by the trimmed header
/// names.
pub fn read_csv_table(path: &Path, options: &IngestOptions) -> Result<(DataFrame, CsvHeaders)> {
    check_file_size(path, options.max_file_size)?;
    validate_encoding(path)?;
    let headers = read_csv_schema(path, options.header_rows)?;

    let csv_error = |e: polars::prelude::PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_skip_rows(headers.header_rows() - 1)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(csv_error)?
        .finish()
        .map_err(csv_error)?;

    if df.width() == headers.len() {
        df.set_column_names(headers.columns.iter().map(String::as_str))?;
    }
    validate_dataframe_shape(&df, path)?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read csv table"
    );

    Ok((df, headers))
}
