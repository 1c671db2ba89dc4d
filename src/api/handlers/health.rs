//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthResponse};
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Storage answered
/// - **503 Service Unavailable**: Storage lookup failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "storage": {
///     "backend": "postgresql",
///     "status": "ok",
///     "message": "Last id: 42"
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage = check_storage(&state).await;
    let healthy = storage.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage,
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Probes storage by reading the last assigned id.
async fn check_storage(state: &AppState) -> CheckStatus {
    let backend = state.storage.as_str();

    match state.url_service.last_id().await {
        Ok(last_id) => CheckStatus {
            backend,
            status: "ok".to_string(),
            message: Some(format!("Last id: {}", last_id)),
        },
        Err(_) => CheckStatus {
            backend,
            status: "error".to_string(),
            message: Some("Storage unavailable".to_string()),
        },
    }
}
