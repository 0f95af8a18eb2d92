//! Core error types for the cash flow engine.
//!
//! Aggregation and ratio code is infallible by design: malformed numeric
//! input degrades to zero instead of raising. Only custom-item validation,
//! local storage, and remote sync can fail, and those failures are meant to
//! be surfaced as non-blocking warnings by the caller.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Sync operation failed: {0}")]
    Sync(#[from] SyncError),

    #[error("Local storage operation failed: {0}")]
    Storage(#[from] StorageError),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// Errors from the remote record store boundary.
///
/// These are always recoverable: the caller keeps its local copy and
/// surfaces a warning. Nothing here may abort the recompute loop.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Transport-level failure (connection, timeout, TLS).
    #[error("Request to record store failed: {0}")]
    Http(String),

    /// The remote API answered with a non-success status.
    #[error("Record store error: {0}")]
    RemoteApi(String),

    /// A record payload could not be encoded or decoded.
    #[error("Failed to serialize record data: {0}")]
    Serialization(String),
}

/// Errors from the local durable store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read local data: {0}")]
    Read(String),

    #[error("Failed to write local data: {0}")]
    Write(String),

    #[error("Stored blob is not valid JSON: {0}")]
    Corrupt(String),
}

// === From implementations for common error types ===

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Read(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Corrupt(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
