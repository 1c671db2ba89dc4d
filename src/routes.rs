//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{alias}`       - Redirect to the long URL (302)
//! - `GET  /health`        - Storage health check
//! - `POST /api`           - Shorten a URL
//! - `GET  /api/{alias}`   - Resolve an alias
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{timeout, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the route table with tracing, without the outer middleware stack.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - deadline applied to every request
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let router = router(state).layer(timeout::layer(request_timeout));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
