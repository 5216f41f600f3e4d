//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default manifest location, relative to the working directory
pub const DEFAULT_MANIFEST_PATH: &str = "config/sources.toml";

/// Default backup directory, relative to the working directory
pub const DEFAULT_BACKUP_DIR: &str = "backups";

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:8000";

/// Everything the server needs to start
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address to listen on.
    pub bind: SocketAddr,
    /// TOML manifest listing the file sources.
    pub manifest_path: PathBuf,
    /// Directory receiving snapshots taken before each write.
    pub backup_dir: PathBuf,
    /// Directory holding `index.html` and UI assets; no UI is served if unset.
    pub static_dir: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8000)),
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            backup_dir: PathBuf::from(DEFAULT_BACKUP_DIR),
            static_dir: None,
        }
    }
}
