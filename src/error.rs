//! Error types for todolist
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in todolist
#[derive(Debug, Error)]
pub enum TodoError {
    /// Index does not address an item in the current list
    #[error("Index out of range: {index} (list has {len} items)")]
    IndexOutOfRange { index: i64, len: usize },

    /// Item text was rejected
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Command line could not be parsed
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// The list has handed out every identifier it can
    #[error("Item ids exhausted")]
    IdsExhausted,

    /// A list snapshot violates the list invariants
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TodoError {
    /// Build an out-of-range error for a positional index.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len,
        }
    }
}

/// Result type alias for todolist operations
pub type Result<T> = std::result::Result<T, TodoError>;
