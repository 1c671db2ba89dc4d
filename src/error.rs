//! Service-level error taxonomy and its HTTP representation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON error envelope returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Errors surfaced by [`crate::application::services::UrlService`].
///
/// Storage and generator failures never pass through verbatim: anything
/// unexpected is logged where it happens and reported as [`AppError::Internal`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// Malformed client input. Never retried.
    #[error("invalid input")]
    InvalidInput,

    #[error("not found")]
    NotFound,

    /// The retry budget ran out while every generated alias collided.
    #[error("alias collision")]
    AliasCollision,

    #[error("internal server error")]
    Internal,
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::AliasCollision => StatusCode::CONFLICT,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            AppError::InvalidInput => "invalid input",
            AppError::NotFound => "not found",
            AppError::AliasCollision => "alias collision",
            AppError::Internal => "internal server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}
