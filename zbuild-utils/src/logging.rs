//! Logging setup.
//!
//! Diagnostics go to stderr and, optionally, to a log file. Stdout is left
//! alone so the demo output stays byte-exact.

use crate::config::{EnvError, EnvParser, Sourced};
use std::fmt;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt as fmt_layer};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{directive}': {message}")]
    Filter { directive: String, message: String },

    #[error("Log file path has no file name: {}", .0.display())]
    InvalidLogPath(PathBuf),

    #[error("Failed to create log directory {}: {source}", path.display())]
    LogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open log file: {0}")]
    Appender(#[from] InitError),

    #[error("Failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Output format for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging configuration, usually built with [`LogConfig::from_env`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive, with the variable it was read from.
    pub level: Sourced<String>,
    pub format: Sourced<LogFormat>,
    pub stderr: bool,
    pub file: Option<PathBuf>,
    /// Problems found while reading the environment, logged after init.
    pub warnings: Vec<EnvError>,
}

impl LogConfig {
    /// Read `ZBUILD_LOG_LEVEL`, `ZBUILD_VERBOSE`, `ZBUILD_LOG_FORMAT` and
    /// `ZBUILD_LOG_FILE`, falling back to `default_level`.
    ///
    /// Stderr output is off until [`LogConfig::with_stderr`] is called.
    pub fn from_env(default_level: &str) -> Self {
        let mut parser = EnvParser::new();
        let mut level = parser.get_log_level("LOG_LEVEL", default_level);
        let verbose = parser.get_bool("VERBOSE", false);
        if verbose.value && level.value != "trace" {
            level = Sourced {
                value: "debug".to_string(),
                source: verbose.source,
                var: verbose.var,
            };
        }
        let format = parser.get_parsed("LOG_FORMAT", LogFormat::Text, "log format (text/json)");
        let file = parser.get_optional_path("LOG_FILE").into_inner();

        Self {
            level,
            format,
            stderr: false,
            file,
            warnings: parser.take_errors(),
        }
    }

    pub fn with_stderr(mut self) -> Self {
        self.stderr = true;
        self
    }

    /// Build the level filter for this configuration.
    pub fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        EnvFilter::try_new(&self.level.value).map_err(|e| LoggingError::Filter {
            directive: self.level.value.clone(),
            message: e.to_string(),
        })
    }
}

/// Keeps the background log-file writer alive; drop it last.
#[derive(Debug)]
pub struct LoggingGuards {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global tracing subscriber described by `config`.
///
/// Fails if a subscriber is already installed or the log file cannot be
/// opened.
pub fn init_logging(config: &LogConfig) -> Result<LoggingGuards, LoggingError> {
    let filter = config.env_filter()?;
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.stderr {
        let layer = match config.format.value {
            LogFormat::Text => fmt_layer::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .boxed(),
            LogFormat::Json => fmt_layer::layer()
                .json()
                .with_writer(std::io::stderr)
                .boxed(),
        };
        layers.push(layer);
    }

    let mut file_guard = None;
    if let Some(path) = &config.file {
        let (writer, guard) = open_log_file(path)?;
        file_guard = Some(guard);
        let layer = match config.format.value {
            LogFormat::Text => fmt_layer::layer()
                .with_writer(writer)
                .with_ansi(false)
                .boxed(),
            LogFormat::Json => fmt_layer::layer().json().with_writer(writer).boxed(),
        };
        layers.push(layer);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    for warning in &config.warnings {
        warn!("{}", warning);
    }

    Ok(LoggingGuards {
        _file_guard: file_guard,
    })
}

/// Open `path` for appending through a non-blocking writer.
fn open_log_file(path: &Path) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::InvalidLogPath(path.to_path_buf()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|source| LoggingError::LogDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)?;
    Ok(tracing_appender::non_blocking(appender))
}
