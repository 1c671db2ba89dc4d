//! Absolute URL validation for submitted long URLs.
//!
//! Long URLs are stored exactly as submitted, so this module only checks
//! shape and never rewrites the input.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),

    /// Whitespace or control characters anywhere in the input. The URL
    /// parser silently strips some of these, but the stored string keeps them.
    #[error("URL must not contain whitespace or control characters")]
    InvalidCharacter,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is a well-formed absolute URL with a scheme and an authority.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for strings the URL parser rejects,
/// including relative references without a scheme.
/// Returns [`UrlValidationError::InvalidCharacter`] if the input contains
/// whitespace or control characters.
/// Returns [`UrlValidationError::MissingHost`] for absolute URLs without a
/// written `//` authority, such as `mailto:` URLs or `http:example.com`.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com/path?q=1").is_ok());
/// assert!(validate_url("example.com").is_err());
/// assert!(validate_url("mailto:someone@example.com").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input
        .chars()
        .any(|c| c.is_ascii_control() || c.is_whitespace())
    {
        return Err(UrlValidationError::InvalidCharacter);
    }

    let url = Url::parse(input)?;

    if url.cannot_be_a_base() || url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    // The parser fills in a missing `//` for special schemes.
    let has_authority = input
        .get(url.scheme().len()..)
        .is_some_and(|rest| rest.starts_with("://"));
    if !has_authority {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(())
}
