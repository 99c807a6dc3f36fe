//! CSV reading utilities.

mod header;
mod reader;

pub use header::{CsvHeaders, split_header_line};
pub use reader::{
    IngestOptions, MAX_INPUT_FILE_SIZE, check_file_size, read_csv_schema, read_csv_table,
    validate_dataframe_shape, validate_encoding,
};
