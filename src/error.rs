//! Error types for the to-do list

use std::io;
use thiserror::Error;

/// Result type alias for to-do operations
pub type Result<T> = std::result::Result<T, TodoError>;

/// Main error type
#[derive(Error, Debug)]
pub enum TodoError {
    /// The list document does not exist yet
    #[error("No list exists, use '--create' to create a new list")]
    NoList,

    /// `--update` / `--mark` received the wrong number of values
    #[error("Mismatched values, please provide two values")]
    Mismatched,

    /// A status or list filter outside the recognized set
    #[error("'{0}' is not a status. Please choose a relevant status option: todo, in-progress, done")]
    InvalidStatus(String),

    #[error("No item available for id {0}")]
    ItemNotFound(String),

    /// A stored key that is not a decimal integer
    #[error("List contains a non-integer id '{0}'")]
    CorruptId(String),

    /// The largest stored id leaves no room for a new one
    #[error("No id left after {0}")]
    IdOverflow(String),

    #[error("Settings error: {0}")]
    Settings(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed list document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TodoError {
    /// Whether the error is reported to the user and the invocation carries on,
    /// as opposed to aborting the process.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TodoError::NoList
                | TodoError::Mismatched
                | TodoError::InvalidStatus(_)
                | TodoError::ItemNotFound(_)
        )
    }
}
