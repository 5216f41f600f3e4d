//! Router assembly.

use std::path::Path;

use axum::http::Uri;
use axum::middleware;
use axum::Router;
use modedit_core::{ExError, ExErrorKind};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::context::request_id_middleware;
use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;

/// Build the application router
///
/// With `static_dir` set, `/` serves `index.html` from it and `/static/*`
/// its other files.
pub fn app_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .merge(routes::sources::routes())
        .merge(routes::modes::routes());

    if let Some(dir) = static_dir {
        router = router
            .route_service("/", ServeFile::new(dir.join("index.html")))
            .nest_service("/static", ServeDir::new(dir));
    }

    router
        .fallback(not_found)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::from(
        ExError::new(ExErrorKind::NotFound)
            .with_op("route")
            .with_message(format!("No route for '{}'", uri.path())),
    )
}
