// ============================================================================
// Routes
// ============================================================================
//
// Router assembly for the gateway:
// - mod.rs: router + middleware stack
// - authenticate.rs: POST /api/Authenticate (token issuance)
// - send_email.rs: POST /api/SendEmailMessage (verified submission)
// - health.rs: GET /health
// - middleware.rs: request logging
//
// ============================================================================

mod authenticate;
mod health;
mod middleware;
mod send_email;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;

/// Builds the application router.
pub fn create_router(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/Authenticate", post(authenticate::authenticate))
        .route(
            "/api/SendEmailMessage",
            post(send_email::send_email_message),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .into_inner(),
        )
        .with_state(context)
}
