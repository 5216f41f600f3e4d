//! Error mapping for the HTTP surface.
//!
//! Every failure leaves the API as `{"detail": .., "code": ..}` with a
//! status derived from the error kind.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use modedit_core::{ExError, ExErrorKind};
use serde::Serialize;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// An [`ExError`] on its way to becoming an HTTP response
#[derive(Debug)]
pub struct ApiError {
    inner: ExError,
}

/// Wire shape of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: &'static str,
}

/// HTTP status for an error kind
#[must_use]
pub fn status_for(kind: ExErrorKind) -> StatusCode {
    match kind {
        ExErrorKind::NotFound | ExErrorKind::NoDefaultSource => StatusCode::NOT_FOUND,
        ExErrorKind::InvalidSource => StatusCode::BAD_REQUEST,
        ExErrorKind::InvalidInput => StatusCode::UNPROCESSABLE_ENTITY,
        ExErrorKind::Config
        | ExErrorKind::Io
        | ExErrorKind::Serialization
        | ExErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ApiError {
    /// A request body that could not be decoded into the expected shape.
    ///
    /// Syntax errors, wrong content types and schema failures all land on
    /// 422 so clients only have one "bad body" status to handle.
    #[must_use]
    pub fn from_rejection(rejection: &JsonRejection) -> Self {
        Self {
            inner: ExError::new(ExErrorKind::InvalidInput)
                .with_op("decode_body")
                .with_message(rejection.body_text()),
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        status_for(self.inner.kind())
    }

    #[must_use]
    pub fn error(&self) -> &ExError {
        &self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> ExError {
        self.inner
    }
}

impl From<ExError> for ApiError {
    fn from(inner: ExError) -> Self {
        Self { inner }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = if self.inner.message().is_empty() {
            self.inner.code().to_string()
        } else {
            self.inner.message().to_string()
        };
        let body = ErrorBody {
            detail,
            code: self.inner.code(),
        };
        (self.status(), Json(body)).into_response()
    }
}
