//! File sources: the manifest of candidate modes files, their validation
//! verdicts, and the policy that picks which one a request targets.

pub mod catalog;
pub mod descriptor;
pub mod manifest;
pub mod resolver;

pub use catalog::SourceCatalog;
pub use descriptor::FileSourceDescriptor;
pub use manifest::{load_manifest, parse_manifest_str, validate_entry, ERROR_DELIMITER, MISSING_PATH};
pub use resolver::{resolve_path, resolve_source};
