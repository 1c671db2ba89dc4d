//! Alias creation and resolution service.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::{RepositoryError, UrlRepository};
use crate::error::AppError;
use crate::utils::alias::AliasGenerator;
use crate::utils::url_validator::validate_url;

/// Alias generation attempts per create call when none is configured.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Service for shortening URLs and resolving aliases.
///
/// Validates input, asks the generator for aliases, and retries on storage
/// collisions up to a fixed budget. Every repository or generator failure is
/// translated into an [`AppError`] here.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    generator: Arc<dyn AliasGenerator>,
    base_url: String,
    max_attempts: usize,
}

impl UrlService {
    /// Creates a new URL service with the default retry budget.
    ///
    /// A trailing `/` on `base_url` is dropped.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        generator: Arc<dyn AliasGenerator>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        info!(base_url = %base_url, "url service initialized");

        Self {
            repository,
            generator,
            base_url,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the retry budget. Values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Shortens `long_url` and returns the full short URL.
    ///
    /// Submitting the same long URL again returns the same short URL.
    ///
    /// # Errors
    ///
    /// See [`Self::create_or_get_record`].
    pub async fn create_or_get(&self, long_url: &str) -> Result<String, AppError> {
        let record = self.create_or_get_record(long_url).await?;
        Ok(self.short_url(&record.alias))
    }

    /// Shortens `long_url` and returns the stored record.
    ///
    /// # Retry Protocol
    ///
    /// Each attempt requests a fresh alias and calls
    /// [`UrlRepository::create_or_get`]. An alias conflict triggers another
    /// attempt; any other failure ends the call immediately.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidInput`] if the trimmed input is not an absolute URL.
    ///   Neither the generator nor the repository is called.
    /// - [`AppError::AliasCollision`] if every attempt in the budget collided.
    /// - [`AppError::Internal`] on generator or unexpected storage failures.
    pub async fn create_or_get_record(&self, long_url: &str) -> Result<UrlRecord, AppError> {
        let long_url = long_url.trim();

        if let Err(e) = validate_url(long_url) {
            warn!(url = %long_url, error = %e, "invalid url");
            return Err(AppError::InvalidInput);
        }

        for attempt in 1..=self.max_attempts {
            let alias = self.generator.new_alias().map_err(|e| {
                error!(error = %e, "failed to generate alias");
                AppError::Internal
            })?;

            match self
                .repository
                .create_or_get(NewUrl::new(long_url, alias.clone()))
                .await
            {
                Ok(record) => {
                    info!(
                        id = record.id,
                        long_url = %record.long_url,
                        alias = %record.alias,
                        created_at = %record.created_at,
                        "alias url created"
                    );
                    return Ok(record);
                }
                Err(RepositoryError::Conflict) => {
                    warn!(alias = %alias, attempt, "alias collision, retrying");
                }
                Err(e) => {
                    error!(
                        error = %e,
                        url = %long_url,
                        alias = %alias,
                        attempt,
                        "failed to create url in storage"
                    );
                    return Err(AppError::Internal);
                }
            }
        }

        warn!(url = %long_url, attempts = self.max_attempts, "alias collision limit reached");
        Err(AppError::AliasCollision)
    }

    /// Resolves an alias to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias is unknown.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_long_url_by_alias(&self, alias: &str) -> Result<String, AppError> {
        let alias = alias.trim();

        self.repository
            .get_long_url_by_alias(alias)
            .await
            .map_err(|e| translate_lookup_error(alias, e))
    }

    /// Resolves an alias to its full stored record.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_long_url_by_alias`].
    pub async fn get_by_alias(&self, alias: &str) -> Result<UrlRecord, AppError> {
        let alias = alias.trim();

        self.repository
            .get_by_alias(alias)
            .await
            .map_err(|e| translate_lookup_error(alias, e))
    }

    /// Returns the highest id in storage.
    ///
    /// Doubles as a storage liveness probe for health checks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn last_id(&self) -> Result<i64, AppError> {
        self.repository.get_last_id().await.map_err(|e| {
            error!(error = %e, "failed to read last id");
            AppError::Internal
        })
    }

    /// Constructs the full short URL for an alias.
    pub fn short_url(&self, alias: &str) -> String {
        format!("{}/{}", self.base_url, alias)
    }
}

fn translate_lookup_error(alias: &str, e: RepositoryError) -> AppError {
    match e {
        RepositoryError::NotFound => {
            warn!(alias = %alias, "alias not found");
            AppError::NotFound
        }
        e => {
            error!(error = %e, alias = %alias, "failed to get url by alias");
            AppError::Internal
        }
    }
}
