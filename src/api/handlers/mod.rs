//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod redirect;
pub mod resolve;
pub mod shorten;

pub use health::health_handler;
pub use redirect::redirect_handler;
pub use resolve::resolve_handler;
pub use shorten::shorten_handler;

use crate::error::AppError;

/// Trims an alias taken from the request path, rejecting blank values.
pub(crate) fn path_alias(raw: &str) -> Result<&str, AppError> {
    let alias = raw.trim();
    if alias.is_empty() {
        return Err(AppError::InvalidInput);
    }
    Ok(alias)
}
