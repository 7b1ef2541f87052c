// src/api/http/router.rs
// Router composition for the analysis endpoint

use axum::{Router, routing::post};
use tower_http::trace::TraceLayer;

use super::handlers::analyze_handler;
use crate::state::AppState;

/// Build the service router.
///
/// Only `POST /analyze` is mounted; axum's method router answers any
/// other method on that path with 405 and an empty body.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
