//! Route groups and helpers shared by handlers.

pub mod modes;
pub mod sources;

use std::time::Instant;

use modedit_core::{log_op_end, log_op_error, ExError, ExErrorKind};
use modedit_core_types::RequestId;

use crate::error::{ApiError, ApiResult};

/// Run blocking file IO off the async runtime
pub(crate) async fn run_blocking<T, F>(op: &'static str, f: F) -> Result<T, ExError>
where
    F: FnOnce() -> Result<T, ExError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        ExError::new(ExErrorKind::Internal)
            .with_op(op)
            .with_message(format!("Background task failed: {}", e))
    })?
}

/// Log how a handler finished and tag failures with the request id
pub(crate) fn finish<T>(
    op: &'static str,
    request_id: &RequestId,
    start: Instant,
    result: Result<T, ExError>,
) -> ApiResult<T> {
    let duration_ms = start.elapsed().as_millis() as u64;
    match result {
        Ok(value) => {
            log_op_end!(op, duration_ms = duration_ms, request_id = %request_id);
            Ok(value)
        }
        Err(err) => {
            let err = err.with_request_id(request_id.clone());
            log_op_error!(op, err.clone(), duration_ms = duration_ms, request_id = %request_id);
            Err(ApiError::from(err))
        }
    }
}
