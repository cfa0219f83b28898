//! Error types
//!
//! The `Display` output of [`CommandError`] is what the user reads, so every variant
//! is worded as a reply rather than as a diagnostic.

use std::io;
use std::path::PathBuf;

use crate::task::TaskType;

/// Errors that can occur while interpreting or applying a command
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The line does not match any known command shape
    #[error("Oh dear :( I don't understand you")]
    UnrecognizedCommand,

    /// A task command supplied no usable description (or misses one of its markers)
    #[error("Oh no! {0} description is wrong")]
    EmptyDescription(TaskType),

    /// A date/time argument is not in the `dd-mm-yyyy hhmm` format
    #[error("Oh no! \"{0}\" is not a valid date, please use dd-mm-yyyy hhmm")]
    MalformedTimestamp(String),

    /// An event would end before it starts
    #[error("Start date should be before end date.")]
    InvalidEventRange,

    /// An equal task is already in the list
    #[error("This task already exists")]
    DuplicateTask,
}

/// Errors raised by a [`TaskStore`](crate::traits::TaskStore)
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error on the backing file
    #[error("{path:?}: {source}")]
    Io {
        /// The backing file
        path: PathBuf,
        /// The underlying failure
        source: io::Error,
    },

    /// A mocked store has been told to fail
    #[error("{0}")]
    Mocked(String),
}

/// Errors that can occur when reading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be opened
    #[error("Unable to open file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    /// The configuration file is not valid JSON
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
