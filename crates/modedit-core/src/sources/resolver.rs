//! Source resolution
//!
//! Picks the file a read or write targets. An explicit request must match a
//! descriptor's `path` exactly and that descriptor must be valid; without a
//! request the first valid descriptor in manifest order is used. Both
//! branches take the first match, so duplicate paths in the manifest
//! resolve to the earliest entry.

use tracing::debug;

use super::descriptor::FileSourceDescriptor;
use crate::errors::{ExError, ExErrorKind, Result};

/// Resolve the descriptor a request targets
///
/// # Errors
///
/// - `ExErrorKind::NotFound` if `requested` matches no descriptor
/// - `ExErrorKind::InvalidSource` if it matches an invalid descriptor
/// - `ExErrorKind::NoDefaultSource` if nothing was requested and no
///   descriptor is valid
pub fn resolve_source<'a>(
    descriptors: &'a [FileSourceDescriptor],
    requested: Option<&str>,
) -> Result<&'a FileSourceDescriptor> {
    let Some(requested) = requested else {
        let source = descriptors.iter().find(|d| d.is_valid()).ok_or_else(|| {
            ExError::new(ExErrorKind::NoDefaultSource)
                .with_op("resolve_source")
                .with_message("No valid file source is configured")
        })?;
        debug!(op = "resolve_source", file_path = source.path(), "using default source");
        return Ok(source);
    };

    let source = descriptors
        .iter()
        .find(|d| d.path() == requested)
        .ok_or_else(|| {
            ExError::new(ExErrorKind::NotFound)
                .with_op("resolve_source")
                .with_path(requested)
                .with_message(format!(
                    "File source '{}' not found in configuration",
                    requested
                ))
        })?;

    if !source.is_valid() {
        return Err(ExError::new(ExErrorKind::InvalidSource)
            .with_op("resolve_source")
            .with_path(requested)
            .with_message(format!(
                "File source '{}' is invalid: {}",
                source.name(),
                source.error_message().unwrap_or_default()
            )));
    }

    debug!(op = "resolve_source", file_path = source.path(), "using requested source");
    Ok(source)
}

/// Resolve straight to the target path
///
/// # Errors
///
/// Same as [`resolve_source`].
pub fn resolve_path<'a>(
    descriptors: &'a [FileSourceDescriptor],
    requested: Option<&str>,
) -> Result<&'a str> {
    resolve_source(descriptors, requested).map(FileSourceDescriptor::path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken(path: &str) -> FileSourceDescriptor {
        FileSourceDescriptor::from_checks(
            "Broken",
            path,
            vec![format!("File '{}' does not exist.", path)],
        )
    }

    #[test]
    fn test_default_skips_invalid() {
        let sources = vec![
            broken("/x.json"),
            FileSourceDescriptor::valid("A", "/a.json"),
            FileSourceDescriptor::valid("B", "/b.json"),
        ];
        assert_eq!(resolve_path(&sources, None).unwrap(), "/a.json");
    }

    #[test]
    fn test_no_default_when_all_invalid() {
        let sources = vec![broken("/x.json")];
        let err = resolve_source(&sources, None).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::NoDefaultSource);

        let err = resolve_source(&[], None).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::NoDefaultSource);
    }

    #[test]
    fn test_requested_unknown_is_not_found() {
        let sources = vec![FileSourceDescriptor::valid("A", "/a.json")];
        let err = resolve_source(&sources, Some("/other.json")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::NotFound);
        assert_eq!(err.path(), Some("/other.json"));
    }

    #[test]
    fn test_requested_invalid_does_not_fall_back() {
        let sources = vec![
            FileSourceDescriptor::valid("A", "/a.json"),
            broken("/x.json"),
        ];
        let err = resolve_source(&sources, Some("/x.json")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidSource);
        assert!(err.message().contains("File '/x.json' does not exist."));
    }

    #[test]
    fn test_requested_valid() {
        let sources = vec![
            FileSourceDescriptor::valid("A", "/a.json"),
            FileSourceDescriptor::valid("B", "/b.json"),
        ];
        assert_eq!(resolve_path(&sources, Some("/b.json")).unwrap(), "/b.json");
    }

    #[test]
    fn test_duplicate_paths_first_entry_wins() {
        let sources = vec![broken("/dup.json"), FileSourceDescriptor::valid("Later", "/dup.json")];
        let err = resolve_source(&sources, Some("/dup.json")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidSource);
    }
}
