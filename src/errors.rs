use std::{fmt, io};

use thiserror::Error;

/// The two collections an entry can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Record,
    Plan,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Record => f.write_str("record"),
            EntryKind::Plan => f.write_str("plan"),
        }
    }
}

/// Unified error type for the domain, service and storage layers.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("No {kind} with id {id}")]
    NotFound { kind: EntryKind, id: u64 },
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Amount out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    pub fn validation(message: impl Into<String>) -> Self {
        TrackerError::Validation(message.into())
    }

    pub fn not_found(kind: EntryKind, id: u64) -> Self {
        TrackerError::NotFound { kind, id }
    }
}

impl From<io::Error> for TrackerError {
    fn from(err: io::Error) -> Self {
        TrackerError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Persistence(err.to_string())
    }
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] TrackerError),
    #[error("Console error: {0}")]
    Io(#[from] io::Error),
    #[error("Input closed")]
    EndOfInput,
    #[error("Cannot load data file {location}: {source}")]
    Startup {
        location: String,
        #[source]
        source: TrackerError,
    },
}
