//! Store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Item not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// An item with the same ID already exists.
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
