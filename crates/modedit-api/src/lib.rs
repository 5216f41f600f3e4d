//! modedit API - HTTP surface over the file sources and the mode store
//!
//! Routes:
//! - `GET /api/file-sources`: every configured source with its verdict
//! - `GET /api/modes[?file_path=..]`: records of the requested or default source
//! - `POST /api/modes`: overwrite a source's records (snapshotting first)
//!
//! When a static directory is configured, `/` serves its `index.html` and
//! `/static/*` its assets.

pub mod config;
pub mod context;
pub mod error;
pub mod router;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use router::app_router;
pub use server::serve;
pub use state::AppState;
