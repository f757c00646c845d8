//! # Error handling utilities.
//! The store distinguishes backend failures from malformed stored data and
//! from pre-write validation failures, so callers can recover each case
//! differently (alert, fall back to an empty collection, or block the save).

use thiserror::Error;

/// Errors produced by the record store and its storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying key-value backend failed to read or write.
    #[error("storage backend failure: {0}")]
    Io(String),

    /// The value stored under `key` is not a valid JSON array of the
    /// expected record shape.
    #[error("malformed data under key {key}: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record failed field validation; nothing was written.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl From<sled::Error> for StoreError {
    fn from(err: sled::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
