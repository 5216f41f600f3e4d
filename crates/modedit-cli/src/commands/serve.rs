//! Server command
//!
//! Usage: modedit serve [--manifest PATH] [--backup-dir DIR] [--bind ADDR] [--static-dir DIR]

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Args;
use modedit_api::config::{DEFAULT_BACKUP_DIR, DEFAULT_BIND, DEFAULT_MANIFEST_PATH};
use modedit_api::ApiConfig;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// TOML manifest listing the file sources
    #[arg(long, env = "MODEDIT_MANIFEST", default_value = DEFAULT_MANIFEST_PATH)]
    pub manifest: PathBuf,

    /// Directory receiving a snapshot before every write
    #[arg(long, env = "MODEDIT_BACKUP_DIR", default_value = DEFAULT_BACKUP_DIR)]
    pub backup_dir: PathBuf,

    /// Address to listen on
    #[arg(long, env = "MODEDIT_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Directory with index.html and UI assets
    #[arg(long, env = "MODEDIT_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

impl From<ServeArgs> for ApiConfig {
    fn from(args: ServeArgs) -> Self {
        ApiConfig {
            bind: args.bind,
            manifest_path: args.manifest,
            backup_dir: args.backup_dir,
            static_dir: args.static_dir,
        }
    }
}

/// Execute serve command
pub fn execute(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::from(args);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(modedit_api::serve(config))?;
    Ok(())
}
