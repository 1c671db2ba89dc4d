//! PostgreSQL connection pool construction.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::DatabaseConfig;

/// Opens a bounded connection pool and applies pending migrations.
///
/// Pool exhaustion surfaces as [`sqlx::Error::PoolTimedOut`] once
/// `connect_timeout` elapses, instead of queuing without bound.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .connect(&config.url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}
