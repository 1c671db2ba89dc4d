//! API route configuration.

use crate::api::handlers::{resolve_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /api`          - Create or fetch the short URL for a long URL
/// - `GET  /api/{alias}`  - Resolve an alias to its long URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api", post(shorten_handler))
        .route("/api/{alias}", get(resolve_handler))
}
