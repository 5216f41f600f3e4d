//! modedit Core - file sources, mode records, and shared facilities
//!
//! This crate provides:
//! - The mode record schema and its boundary validator
//! - The file-source manifest loader with per-entry validation verdicts
//! - The source resolver and its default-selection policy
//! - The structured error facility (`ExError`) used by every crate
//! - The structured logging facility and test capture

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod sources;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result};
pub use model::{ModeRecord, SchemaError};
pub use sources::{FileSourceDescriptor, SourceCatalog};
