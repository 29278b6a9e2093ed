use axum::http::StatusCode;
use axum::response::IntoResponse;

/// GET /health
///
/// Liveness only; the service holds no connections worth probing.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
