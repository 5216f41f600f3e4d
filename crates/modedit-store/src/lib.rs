//! modedit Store - snapshotting persistence for modes files
//!
//! Provides:
//! - Reading a modes file into schema-checked records
//! - Timestamped backups of a modes file before it is overwritten
//! - Full overwrite of a modes file with pretty-printed JSON
//! - Per-path serialization of store operations within the process

pub mod backup;
pub mod errors;
pub mod locks;
pub mod modes_file;
pub mod store;

// Re-export key types
pub use errors::Result;
pub use store::{ModeStore, WriteOutcome};
