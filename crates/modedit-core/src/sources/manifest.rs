//! Source manifest loader
//!
//! Reads the TOML manifest and turns every entry of its `sources` array
//! into a [`FileSourceDescriptor`]. Only a missing, unreadable or
//! unparsable manifest is fatal; problems with individual entries are
//! recorded on that entry's descriptor so the UI can show them.
//!
//! Checks run in a fixed order: entry shape, name, path presence, absolute
//! path, existence, regular file, JSON well-formedness. The filesystem
//! checks stop at the first failure.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

use serde::de::IgnoredAny;
use tracing::warn;

use super::descriptor::FileSourceDescriptor;
use crate::errors::{ExError, ExErrorKind, Result};
use crate::{log_op_end, log_op_error, log_op_start};

/// Separator between accumulated validation messages
pub const ERROR_DELIMITER: &str = " | ";

/// Path recorded for entries that do not carry a usable one
pub const MISSING_PATH: &str = "N/A";

const SOURCES_KEY: &str = "sources";

/// Load and validate every source listed in the manifest at `path`
///
/// # Errors
///
/// Returns `ExErrorKind::Config` if the manifest is missing, unreadable,
/// not valid TOML, or its `sources` key is not an array.
pub fn load_manifest(path: &Path) -> Result<Vec<FileSourceDescriptor>> {
    let start = Instant::now();
    log_op_start!("load_manifest", manifest = %path.display());

    let result = read_manifest(path).and_then(|content| parse_manifest_str(&content));

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(descriptors) => {
            let valid_count = descriptors.iter().filter(|d| d.is_valid()).count();
            log_op_end!(
                "load_manifest",
                duration_ms = duration_ms,
                valid_count = valid_count,
                invalid_count = descriptors.len() - valid_count
            );
        }
        Err(err) => {
            log_op_error!("load_manifest", err.clone(), duration_ms = duration_ms);
        }
    }

    result
}

fn read_manifest(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        let message = match e.kind() {
            ErrorKind::NotFound => format!("Manifest file '{}' not found", path.display()),
            _ => format!("Could not read manifest '{}': {}", path.display(), e),
        };
        ExError::new(ExErrorKind::Config)
            .with_op("load_manifest")
            .with_path(path.display().to_string())
            .with_message(message)
    })
}

/// Parse manifest text and validate each entry
///
/// A manifest without a `sources` key yields an empty list.
///
/// # Errors
///
/// Returns `ExErrorKind::Config` if `content` is not valid TOML or
/// `sources` is present but not an array.
pub fn parse_manifest_str(content: &str) -> Result<Vec<FileSourceDescriptor>> {
    let table: toml::Table = content.parse().map_err(|e: toml::de::Error| {
        ExError::new(ExErrorKind::Config)
            .with_op("parse_manifest")
            .with_message(format!("Invalid TOML in manifest: {}", e.message()))
    })?;

    let entries = match table.get(SOURCES_KEY) {
        None => {
            warn!(
                op = "parse_manifest",
                "manifest has no 'sources' array; no file sources configured"
            );
            return Ok(Vec::new());
        }
        Some(toml::Value::Array(entries)) => entries,
        Some(other) => {
            return Err(ExError::new(ExErrorKind::Config)
                .with_op("parse_manifest")
                .with_field(SOURCES_KEY)
                .with_message(format!(
                    "'sources' must be an array of tables, got {}",
                    other.type_str()
                )));
        }
    };

    let descriptors = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| validate_entry(i + 1, entry))
        .collect::<Vec<_>>();

    for d in descriptors.iter().filter(|d| !d.is_valid()) {
        warn!(
            source_name = d.name(),
            file_path = d.path(),
            error = d.error_message().unwrap_or_default(),
            "file source failed validation"
        );
    }

    Ok(descriptors)
}

/// Validate one raw manifest entry; `index` is 1-based
pub fn validate_entry(index: usize, entry: &toml::Value) -> FileSourceDescriptor {
    let Some(table) = entry.as_table() else {
        return FileSourceDescriptor::from_checks(
            format!("Invalid Source Entry {}", index),
            MISSING_PATH,
            vec!["entry is not a valid table/dictionary structure.".to_string()],
        );
    };

    let mut errors = Vec::new();

    let name = match table.get("name").and_then(toml::Value::as_str) {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        // Blank names are accepted but still need a usable label.
        Some(_) => format!("Unnamed Source {}", index),
        None => {
            errors.push("name is missing or not a string.".to_string());
            format!("Unnamed Source {}", index)
        }
    };

    let path = match table.get("path").and_then(toml::Value::as_str) {
        Some(path) => {
            if let Err(message) = check_source_file(path) {
                errors.push(message);
            }
            path.to_string()
        }
        None => {
            errors.push("path is missing or not a string.".to_string());
            MISSING_PATH.to_string()
        }
    };

    FileSourceDescriptor::from_checks(name, path, errors)
}

fn check_source_file(path: &str) -> std::result::Result<(), String> {
    let p = Path::new(path);
    if !p.is_absolute() {
        return Err(format!("Path '{}' is not an absolute path.", path));
    }
    if !p.exists() {
        return Err(format!("File '{}' does not exist.", path));
    }
    if !p.is_file() {
        return Err(format!("Path '{}' exists but is not a file.", path));
    }

    let content =
        fs::read_to_string(p).map_err(|e| format!("Could not read file '{}': {}.", path, e))?;
    serde_json::from_str::<IgnoredAny>(&content)
        .map_err(|e| format!("Invalid JSON in file '{}': {}.", path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entry(src: &str) -> toml::Value {
        let table: toml::Table = src.parse().unwrap();
        toml::Value::Table(table)
    }

    fn named_entry(name: &str, path: &str) -> toml::Value {
        let mut table = toml::Table::new();
        table.insert("name".to_string(), toml::Value::String(name.to_string()));
        table.insert("path".to_string(), toml::Value::String(path.to_string()));
        toml::Value::Table(table)
    }

    #[test]
    fn test_non_table_entry() {
        let d = validate_entry(3, &toml::Value::String("oops".into()));
        assert_eq!(d.name(), "Invalid Source Entry 3");
        assert_eq!(d.path(), MISSING_PATH);
        assert_eq!(
            d.error_message(),
            Some("entry is not a valid table/dictionary structure.")
        );
    }

    #[test]
    fn test_missing_name_and_path() {
        let d = validate_entry(2, &entry("other = 1"));
        assert_eq!(d.name(), "Unnamed Source 2");
        assert_eq!(d.path(), MISSING_PATH);
        assert_eq!(
            d.error_message(),
            Some("name is missing or not a string. | path is missing or not a string.")
        );
    }

    #[test]
    fn test_relative_path_stops_file_checks() {
        let d = validate_entry(1, &entry("name = 'A'\npath = 'modes.json'"));
        assert_eq!(d.path(), "modes.json");
        assert_eq!(
            d.error_message(),
            Some("Path 'modes.json' is not an absolute path.")
        );
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().display().to_string();
        let d = validate_entry(1, &named_entry("D", &path));
        assert_eq!(
            d.error_message().unwrap(),
            format!("Path '{}' exists but is not a file.", dir.path().display())
        );
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("broken.json");
        fs::write(&file, "[{").unwrap();
        let path = file.display().to_string();

        let d = validate_entry(1, &named_entry("B", &path));
        assert!(!d.is_valid());
        assert!(d
            .error_message()
            .unwrap()
            .starts_with(&format!("Invalid JSON in file '{}': ", file.display())));
    }

    #[test]
    fn test_valid_entry() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("modes.json");
        fs::write(&file, "[]").unwrap();
        let path = file.display().to_string();

        let d = validate_entry(1, &named_entry("Good", &path));
        assert!(d.is_valid());
        assert_eq!(d.name(), "Good");
        assert!(d.error_message().is_none());
    }

    #[test]
    fn test_blank_name_gets_label_without_error() {
        let d = validate_entry(4, &entry("name = '  '\npath = 'x.json'"));
        assert_eq!(d.name(), "Unnamed Source 4");
        assert_eq!(d.error_message(), Some("Path 'x.json' is not an absolute path."));
    }

    #[test]
    fn test_manifest_without_sources_is_empty() {
        assert!(parse_manifest_str("title = 'x'").unwrap().is_empty());
    }

    #[test]
    fn test_sources_not_array_is_config_error() {
        let err = parse_manifest_str("sources = 'nope'").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Config);
        assert_eq!(err.field(), Some("sources"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = parse_manifest_str("sources = [").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Config);
    }
}
