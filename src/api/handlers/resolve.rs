//! Handler for alias lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::resolve::LongUrlResponse;
use crate::api::handlers::path_alias;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the long URL behind an alias.
///
/// # Endpoint
///
/// `GET /api/{alias}`
///
/// # Response
///
/// ```json
/// { "long_url": "https://example.com" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn resolve_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LongUrlResponse>, AppError> {
    let alias = path_alias(&alias)?;

    let long_url = state.url_service.get_long_url_by_alias(alias).await?;

    Ok(Json(LongUrlResponse { long_url }))
}
