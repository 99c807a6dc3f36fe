//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Library crates only emit events; the subscriber is installed here, once,
//! at startup.
//!
//! # Log Levels
//!
//! - `error`: fatal errors
//! - `warn`: skipped rule names, unknown columns, unusually wide inputs
//! - `info`: dataset shape, evaluation summary counts
//! - `debug`: one event per (column, rule) verdict
//! - `trace`: unused
//!
//! Cell values are never logged at any level.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, MakeWriter, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Crates whose events follow the configured level.
const WORKSPACE_CRATES: [&str; 5] = ["dq_cli", "dq_common", "dq_ingest", "dq_model", "dq_validate"];

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Most verbose level that is emitted.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace the level-based filter when it is set.
    pub use_env_filter: bool,
    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    pub format: LogFormat,
    /// When set, logs are appended to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Single-line format.
    Compact,
    /// JSON lines for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    #[must_use]
    pub fn with_target(mut self, enable: bool) -> Self {
        self.with_target = enable;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the log file path (writes to stderr when None).
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        init_logging_with_writer(config, Mutex::new(file));
    } else {
        init_logging_with_writer(config, io::stderr);
    }
    Ok(())
}

/// Initialize logging with a custom writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = match (config.format, config.with_timestamps) {
        (LogFormat::Json, _) => fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(config.with_target)
            .with_span_events(FmtSpan::CLOSE)
            .boxed(),
        (LogFormat::Compact, true) => fmt::layer()
            .compact()
            .with_writer(writer)
            .with_ansi(config.with_ansi)
            .with_target(config.with_target)
            .boxed(),
        (LogFormat::Compact, false) => fmt::layer()
            .compact()
            .without_time()
            .with_writer(writer)
            .with_ansi(config.with_ansi)
            .with_target(config.with_target)
            .boxed(),
        (LogFormat::Pretty, true) => fmt::layer()
            .with_writer(writer)
            .with_ansi(config.with_ansi)
            .with_target(config.with_target)
            .boxed(),
        (LogFormat::Pretty, false) => fmt::layer()
            .without_time()
            .with_writer(writer)
            .with_ansi(config.with_ansi)
            .with_target(config.with_target)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(build_env_filter(config)))
        .init();
}

/// Default filter directives for a level: the level globally and for each
/// workspace crate.
fn default_directives(level_filter: LevelFilter) -> String {
    let level = level_filter.to_string().to_lowercase();
    let mut directives = vec![level.clone()];
    directives.extend(
        WORKSPACE_CRATES
            .iter()
            .map(|krate| format!("{krate}={level}")),
    );
    directives.join(",")
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}
