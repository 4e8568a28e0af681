//! The echo endpoint handler.

use axum::body::{to_bytes, Body};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Response body sent to the client when the request body cannot be
/// read. The underlying error detail is logged, never leaked.
pub const BODY_READ_FAILURE: &str = "Failed to read request body";

/// Echo the request body back verbatim.
///
/// Routing guarantees only `POST /echo` reaches this handler. The body
/// is collected into memory in full before the response is written; a
/// read failure (client abort, malformed transfer encoding) becomes a
/// 500 with a generic message and one diagnostic log record. Success
/// leaves the status untouched, so the response goes out as 200.
pub async fn handle(body: Body) -> Response {
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes.into_response(),
        Err(error) => {
            tracing::error!(%error, "Failed to read request body");
            (StatusCode::INTERNAL_SERVER_ERROR, BODY_READ_FAILURE).into_response()
        }
    }
}
