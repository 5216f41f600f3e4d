use std::path::Path;

use super::descriptor::FileSourceDescriptor;
use super::manifest::load_manifest;
use super::resolver::resolve_source;
use crate::errors::Result;

/// The validated file sources for the lifetime of the process
///
/// Built once at startup and shared read-only; there is no reload. Tests
/// build one directly from synthetic descriptors.
#[derive(Debug, Clone, Default)]
pub struct SourceCatalog {
    descriptors: Vec<FileSourceDescriptor>,
}

impl SourceCatalog {
    pub fn new(descriptors: Vec<FileSourceDescriptor>) -> Self {
        Self { descriptors }
    }

    /// Load and validate the manifest at `manifest_path`
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::Config` if the manifest itself cannot be used.
    pub fn load(manifest_path: &Path) -> Result<Self> {
        load_manifest(manifest_path).map(Self::new)
    }

    /// All descriptors in manifest order, invalid ones included
    pub fn descriptors(&self) -> &[FileSourceDescriptor] {
        &self.descriptors
    }

    /// See [`resolve_source`]
    ///
    /// # Errors
    ///
    /// Propagates resolution failures unchanged.
    pub fn resolve(&self, requested: Option<&str>) -> Result<&FileSourceDescriptor> {
        resolve_source(&self.descriptors, requested)
    }

    /// The source used when a request names none
    pub fn default_source(&self) -> Option<&FileSourceDescriptor> {
        self.descriptors.iter().find(|d| d.is_valid())
    }

    pub fn valid_count(&self) -> usize {
        self.descriptors.iter().filter(|d| d.is_valid()).count()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
