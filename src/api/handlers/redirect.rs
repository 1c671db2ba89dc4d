//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::api::handlers::path_alias;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its original URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Responds with `302 Found` and a `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist, using the same JSON
/// error envelope as the API.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let alias = path_alias(&alias)?;

    let long_url = state.url_service.get_long_url_by_alias(alias).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]).into_response())
}
