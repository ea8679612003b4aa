#![forbid(unsafe_code)]

//! File logging.
//!
//! The terminal belongs to the UI, so log lines never go to stdout or stderr
//! while the program runs. With a log file configured, a `tracing-subscriber`
//! fmt layer writes plain (non-ANSI) lines to it, filtered by `RUST_LOG`
//! (default `info`). Without one, no subscriber is installed.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is unset or does not parse.
pub const DEFAULT_FILTER: &str = "info";

/// Why file logging could not be set up.
#[derive(Debug)]
pub enum LoggingError {
    /// The log file could not be opened for appending.
    Open { path: PathBuf, source: io::Error },
    /// Another global subscriber is already installed.
    AlreadyInstalled,
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
            Self::AlreadyInstalled => write!(f, "a global tracing subscriber is already set"),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::AlreadyInstalled => None,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Open `path` for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Subscriber writing to `file` through `filter`.
pub fn file_subscriber(file: File, filter: EnvFilter) -> impl Subscriber + Send + Sync {
    tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true),
    )
}

/// Install the global file subscriber.
pub fn init_file_logging(path: &Path) -> Result<(), LoggingError> {
    let file = open_log_file(path)?;
    file_subscriber(file, env_filter())
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)
}
