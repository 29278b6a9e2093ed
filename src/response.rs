//! Uniform plain-text response shape shared by success and error paths.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Builds a response with the given status. A non-blank payload is trimmed
/// and sent as a `text/plain; charset=utf-8` body; a blank payload produces
/// an empty body with the status only.
pub fn formalize(status: StatusCode, payload: &str) -> Response {
    let payload = payload.trim();
    if payload.is_empty() {
        status.into_response()
    } else {
        (
            status,
            [("Content-Type", "text/plain; charset=utf-8")],
            payload.to_owned(),
        )
            .into_response()
    }
}
