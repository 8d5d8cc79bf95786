//! Error types for focusdesk.

use thiserror::Error;

use crate::features::timer::TimerError;

/// Errors surfaced by focusdesk commands and widgets.
#[derive(Debug, Error)]
pub enum DeskError {
    /// Configuration, path, or environment problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// `SQLite` failure in the key-value store.
    #[error("Database error: {0}")]
    Database(String),

    /// A task (or other addressed item) does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User input was rejected by a widget.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization or parsing failure.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Timer engine rejected an operation.
    #[error(transparent)]
    Timer(#[from] TimerError),

    /// I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<rusqlite::Error> for DeskError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}
