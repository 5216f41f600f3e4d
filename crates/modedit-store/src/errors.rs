//! Error handling for modedit-store
//!
//! Wraps modedit-core ExError with store-specific helpers

use std::path::Path;

use modedit_core::errors::{ExError, ExErrorKind};
use modedit_core::SchemaError;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

/// The modes file a read targets does not exist
pub fn modes_file_missing(path: &Path) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op("read_records")
        .with_path(path.display().to_string())
        .with_message("Modes file not found")
}

/// The modes file exists but its content cannot be used
pub fn modes_file_malformed(path: &Path, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("read_records")
        .with_path(path.display().to_string())
        .with_message(reason)
}

/// A record inside the modes file failed schema validation
pub fn record_invalid(path: &Path, index: usize, err: &SchemaError) -> ExError {
    let ex = modes_file_malformed(
        path,
        format!("Invalid mode at index {} in modes file: {}", index, err),
    );
    match err.field() {
        Some(field) => ex.with_field(field),
        None => ex,
    }
}

/// Records could not be encoded for writing
pub fn encode_error(path: &Path, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op("write_records")
        .with_path(path.display().to_string())
        .with_message(format!("Could not encode modes: {}", err))
}
