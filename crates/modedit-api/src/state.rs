//! Shared state for API handlers.

use std::sync::Arc;

use modedit_core::SourceCatalog;
use modedit_store::ModeStore;

use crate::config::ApiConfig;

/// Shared, read-only state handed to every handler
///
/// The catalog is loaded once at startup and never replaced.
#[derive(Clone)]
pub struct AppState {
    /// Validated file sources, in manifest order.
    pub catalog: Arc<SourceCatalog>,
    /// Store performing reads and snapshotting writes.
    pub store: Arc<ModeStore>,
}

impl AppState {
    /// Creates state from an already loaded catalog and a store.
    #[must_use]
    pub fn new(catalog: SourceCatalog, store: ModeStore) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store: Arc::new(store),
        }
    }

    /// Loads the manifest named by `config` and prepares the store.
    ///
    /// # Errors
    ///
    /// Returns `ExErrorKind::Config` if the manifest cannot be used.
    pub fn from_config(config: &ApiConfig) -> modedit_core::Result<Self> {
        let catalog = SourceCatalog::load(&config.manifest_path)?;
        Ok(Self::new(catalog, ModeStore::new(&config.backup_dir)))
    }
}
