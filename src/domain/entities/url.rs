//! URL record entity representing a stored alias mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a short alias and its long URL.
///
/// Records are created once by the repository and never updated in place.
/// Every value handed out by a repository is an owned copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub long_url: String,
    pub alias: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, long_url: String, alias: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            long_url,
            alias,
            created_at,
        }
    }
}

/// Candidate record submitted to [`crate::domain::repositories::UrlRepository::create_or_get`].
///
/// `id` and `created_at` are assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrl {
    pub long_url: String,
    pub alias: String,
}

impl NewUrl {
    pub fn new(long_url: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            alias: alias.into(),
        }
    }
}
