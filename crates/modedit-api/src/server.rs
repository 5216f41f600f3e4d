//! Server startup.

use modedit_core::{ExError, ExErrorKind};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ApiConfig;
use crate::router::app_router;
use crate::state::AppState;

/// Load the manifest, bind, and serve until Ctrl-C
///
/// # Errors
///
/// Returns `ExErrorKind::Config` if the manifest cannot be used and
/// `ExErrorKind::Io` if the listener cannot be bound or the server fails.
pub async fn serve(config: ApiConfig) -> Result<(), ExError> {
    let state = AppState::from_config(&config)?;
    info!(
        manifest = %config.manifest_path.display(),
        source_count = state.catalog.len(),
        valid_count = state.catalog.valid_count(),
        "file sources loaded"
    );
    if state.catalog.valid_count() == 0 {
        tracing::warn!("no valid file source; requests without file_path will fail");
    }

    let app = app_router(state, config.static_dir.as_deref());

    let listener = TcpListener::bind(config.bind).await.map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("serve")
            .with_message(format!("Could not bind {}: {}", config.bind, e))
    })?;
    info!(bind = %config.bind, backup_dir = %config.backup_dir.display(), "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("serve")
                .with_message(format!("Server error: {}", e))
        })
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
