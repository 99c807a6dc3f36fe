//! CLI argument definitions for the `dq` tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dq",
    version,
    about = "Column-level data quality checks for CSV datasets",
    long_about = "Evaluate data quality rules against the columns of a CSV dataset.\n\n\
                  Rules: accuracy, completeness, reliability, relevance, timeliness.\n\
                  Each requested (column, rule) pair is reported as pass or fail."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate rules against columns of a dataset.
    Check(CheckArgs),

    /// List the columns of a dataset.
    Columns(ColumnsArgs),

    /// List the supported rule kinds.
    Rules,
}

#[derive(Args)]
pub struct DatasetArgs {
    /// Path to the CSV dataset.
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Number of header rows (2 = a label row followed by column names).
    #[arg(
        long = "header-rows",
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u8).range(1..=2)
    )]
    pub header_rows: u8,
}

#[derive(Args)]
#[command(group(
    clap::ArgGroup::new("request_source")
        .required(true)
        .args(["request", "rules"])
))]
pub struct CheckArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// JSON file mapping column names to lists of rule names.
    #[arg(long = "request", value_name = "FILE")]
    pub request: Option<PathBuf>,

    /// Rules for one column, e.g. `age=accuracy,completeness`. Repeatable.
    #[arg(long = "rule", value_name = "COLUMN=KIND[,KIND]")]
    pub rules: Vec<String>,

    /// Evaluate as of this time instead of the current UTC time.
    #[arg(long = "now", value_name = "DATETIME")]
    pub now: Option<String>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Write the report to a file instead of stdout.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Exit with status 2 when any rule fails.
    #[arg(long = "fail-on-violation")]
    pub fail_on_violation: bool,
}

#[derive(Args)]
pub struct ColumnsArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
