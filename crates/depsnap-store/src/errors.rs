//! Error handling for depsnap-store
//!
//! Wraps depsnap-core ExError with store-specific helpers

use depsnap_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an IO error naming the file it happened on
pub fn io_error_at(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    io_error(operation, err).with_path(path.display().to_string())
}

/// Create an invalid input error
pub fn invalid_input(operation: &str, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op(operation.to_string())
        .with_message(reason)
}

/// Create an error for a snapshot document that cannot be parsed
pub fn invalid_snapshot(path: &Path, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidSnapshot)
        .with_op("read_document")
        .with_path(path.display().to_string())
        .with_message(reason)
}

/// Create a remote fetch error
pub fn metadata_fetch(url: &str, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::MetadataFetch)
        .with_op("fetch_remote_metadata")
        .with_path(url.to_string())
        .with_message(reason)
}

/// Create a serialization error
pub fn serialization(operation: &str, err: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
