//! Error types for eventboard.

use thiserror::Error;

/// Errors that can occur in eventboard operations.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Unknown organizer '{0}'")]
    UnknownOrganizer(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unsupported calendar window of {0} weeks (expected 1, 4, 8 or 52)")]
    InvalidWindow(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        BoardError::Serialization(e.to_string())
    }
}

/// Result type alias for eventboard operations.
pub type BoardResult<T> = Result<T, BoardError>;
