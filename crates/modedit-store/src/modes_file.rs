//! Modes file encoding
//!
//! A modes file is a UTF-8 JSON array of mode objects. Reading validates
//! every entry against the mode schema; writing emits only the fields a
//! record has, pretty-printed, and replaces the file's whole content.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use modedit_core::ModeRecord;
use serde_json::Value;

use crate::errors::{
    encode_error, io_error, modes_file_malformed, modes_file_missing, record_invalid, Result,
};

/// Read and validate every record in the modes file at `path`
///
/// # Errors
///
/// - `ExErrorKind::NotFound` if the file does not exist
/// - `ExErrorKind::Serialization` if it is not a JSON array of valid modes
/// - `ExErrorKind::Io` for any other read failure
pub fn read_records(path: &Path) -> Result<Vec<ModeRecord>> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => modes_file_missing(path),
        _ => io_error("read_records", path, e),
    })?;

    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|e| modes_file_malformed(path, format!("Invalid JSON in modes file: {}", e)))?;

    let entries = value
        .as_array()
        .ok_or_else(|| modes_file_malformed(path, "Modes file must contain a JSON array"))?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| ModeRecord::from_value(entry).map_err(|e| record_invalid(path, i, &e)))
        .collect()
}

/// Encode records the way they are stored on disk
///
/// # Errors
///
/// Returns `ExErrorKind::Serialization` if encoding fails.
pub fn encode_records(path: &Path, records: &[ModeRecord]) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(records).map_err(|e| encode_error(path, e))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Replace the content of `path` with `records`
///
/// Not atomic: a crash mid-write can leave the file truncated.
///
/// # Errors
///
/// Returns `ExErrorKind::Io` if the file cannot be written.
pub fn write_records(path: &Path, records: &[ModeRecord]) -> Result<()> {
    let bytes = encode_records(path, records)?;
    fs::write(path, bytes).map_err(|e| io_error("write_records", path, e))
}
