//! `GET /api/modes` and `POST /api/modes`

use std::path::PathBuf;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Extension, Json, Router};
use modedit_core::{log_op_start, ExError, ModeRecord};
use modedit_core_types::RequestId;
use serde::Deserialize;

use super::{finish, run_blocking};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/modes", get(get_modes).post(save_modes))
}

#[derive(Debug, Default, Deserialize)]
pub struct ModesQuery {
    pub file_path: Option<String>,
}

/// Body of `POST /api/modes`
#[derive(Debug, Deserialize)]
pub struct SaveModesRequest {
    pub modes: Vec<ModeRecord>,
    /// Falls back to the default source when omitted.
    #[serde(default)]
    pub file_path: Option<String>,
}

/// Resolve the request to a path on disk.
fn target_path(state: &AppState, requested: Option<&str>) -> Result<PathBuf, ExError> {
    state
        .catalog
        .resolve(requested)
        .map(|descriptor| PathBuf::from(descriptor.path()))
}

async fn get_modes(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<ModesQuery>,
) -> ApiResult<Json<Vec<ModeRecord>>> {
    let start = Instant::now();
    log_op_start!(
        "api.get_modes",
        request_id = %request_id,
        file_path = ?query.file_path
    );

    let result = match target_path(&state, query.file_path.as_deref()) {
        Ok(path) => {
            let store = state.store.clone();
            run_blocking("api.get_modes", move || store.read_records(&path)).await
        }
        Err(err) => Err(err),
    };

    finish("api.get_modes", &request_id, start, result).map(Json)
}

/// Overwrite the target's records and echo them back
async fn save_modes(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<SaveModesRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<ModeRecord>>> {
    let start = Instant::now();

    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            log_op_start!("api.save_modes", request_id = %request_id);
            let err = ApiError::from_rejection(&rejection).into_inner();
            return finish("api.save_modes", &request_id, start, Err(err));
        }
    };

    log_op_start!(
        "api.save_modes",
        request_id = %request_id,
        file_path = ?request.file_path,
        record_count = request.modes.len()
    );

    let SaveModesRequest { modes, file_path } = request;
    let result = match target_path(&state, file_path.as_deref()) {
        Ok(path) => {
            let store = state.store.clone();
            run_blocking("api.save_modes", move || {
                store.write_records(&path, &modes).map(|_| modes)
            })
            .await
        }
        Err(err) => Err(err),
    };

    finish("api.save_modes", &request_id, start, result).map(Json)
}
