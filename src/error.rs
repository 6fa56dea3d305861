//! Error types for the month-grid layout engine.

use thiserror::Error;

/// Errors that can occur while building a grid or reading events.
///
/// Layout itself never fails: malformed spans are normalized, and events
/// outside the displayed month are simply dropped.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for grid and layout operations.
pub type GridResult<T> = Result<T, GridError>;
