//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::{RepositoryError, UrlRepository};

/// Row shape shared by every query returning a full record.
#[derive(Debug, sqlx::FromRow)]
struct UrlRow {
    id: i64,
    long_url: String,
    alias: String,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(row.id, row.long_url, row.alias, row.created_at)
    }
}

/// PostgreSQL repository for alias mappings.
///
/// Atomicity of create-or-get comes from a single upsert statement and the
/// unique constraints on `long_url` and `alias`.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create_or_get(&self, new_url: NewUrl) -> Result<UrlRecord, RepositoryError> {
        // The no-op update makes RETURNING yield the existing row on a long_url
        // conflict. An alias clash still violates urls_alias_key.
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (long_url, alias)
            VALUES ($1, $2)
            ON CONFLICT (long_url) DO UPDATE
            SET long_url = EXCLUDED.long_url
            RETURNING id, long_url, alias, created_at
            "#,
        )
        .bind(&new_url.long_url)
        .bind(&new_url.alias)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn get_by_alias(&self, alias: &str) -> Result<UrlRecord, RepositoryError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, long_url, alias, created_at
            FROM urls
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn get_long_url_by_alias(&self, alias: &str) -> Result<String, RepositoryError> {
        let long_url = sqlx::query_scalar::<_, String>("SELECT long_url FROM urls WHERE alias = $1")
            .bind(alias)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(long_url)
    }

    async fn get_last_id(&self) -> Result<i64, RepositoryError> {
        let last_id = sqlx::query_scalar::<_, i64>("SELECT COALESCE(MAX(id), 0) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(last_id)
    }
}
