//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::warn;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns the existing) short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://localhost:8080/aB3_xYz09Q" }
/// ```
///
/// # Errors
///
/// - 400 if the body is not valid JSON of this shape or the URL is invalid
/// - 409 if no free alias was found within the retry budget
/// - 500 on storage or generator failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "rejected shorten request body");
        AppError::InvalidInput
    })?;

    payload.validate().map_err(|e| {
        warn!(error = %e, "shorten request failed validation");
        AppError::InvalidInput
    })?;

    let short_url = state.url_service.create_or_get(&payload.long_url).await?;

    Ok(Json(ShortenResponse { short_url }))
}
