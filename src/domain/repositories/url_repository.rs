//! Repository trait for alias mapping storage.

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;

/// Storage contract for alias mappings.
///
/// Implementations must keep both `alias` and `long_url` unique across all
/// records and must perform [`create_or_get`](Self::create_or_get) atomically.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-process maps behind a lock
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts the candidate or returns the record already stored for its long URL.
    ///
    /// When the long URL is already known the existing record is returned
    /// unchanged and the candidate alias is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] if the alias is bound to a different
    /// long URL. The caller is expected to retry with a fresh alias.
    async fn create_or_get(&self, new_url: NewUrl) -> Result<UrlRecord, RepositoryError>;

    /// Finds the full record for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the alias is unknown.
    async fn get_by_alias(&self, alias: &str) -> Result<UrlRecord, RepositoryError>;

    /// Finds only the long URL for an alias.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the alias is unknown.
    async fn get_long_url_by_alias(&self, alias: &str) -> Result<String, RepositoryError>;

    /// Returns the highest assigned id, or `0` when storage is empty.
    ///
    /// Used to seed the counter alias generator at startup.
    async fn get_last_id(&self) -> Result<i64, RepositoryError>;
}
