//! Storage-level error taxonomy shared by all repository implementations.

use thiserror::Error;

/// Errors reported by [`super::UrlRepository`] implementations.
///
/// These never cross the HTTP boundary: the service layer translates each
/// variant into an [`crate::error::AppError`].
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The candidate alias is already bound to a different long URL.
    #[error("alias already exists")]
    Conflict,

    #[error("url not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}
