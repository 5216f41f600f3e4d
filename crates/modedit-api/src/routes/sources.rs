//! `GET /api/file-sources`

use std::time::Instant;

use axum::extract::State;
use axum::routing::get;
use axum::{Extension, Json, Router};
use modedit_core::{log_op_start, FileSourceDescriptor};
use modedit_core_types::RequestId;

use super::finish;
use crate::error::ApiResult;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/file-sources", get(list_sources))
}

/// Every configured source in manifest order, invalid ones included
async fn list_sources(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> ApiResult<Json<Vec<FileSourceDescriptor>>> {
    let start = Instant::now();
    log_op_start!("api.list_sources", request_id = %request_id);

    let descriptors = state.catalog.descriptors().to_vec();
    finish("api.list_sources", &request_id, start, Ok(descriptors)).map(Json)
}
