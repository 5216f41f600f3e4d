//! Request correlation.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use modedit_core_types::correlation::REQUEST_ID_HEADER;
use modedit_core_types::RequestId;

/// Attach a [`RequestId`] to the request extensions and echo it back
///
/// The caller's `x-request-id` is reused when usable.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = RequestId::from_external(
        req.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok()),
    );
    req.extensions_mut().insert(request_id.clone());

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
