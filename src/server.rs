//! HTTP server initialization and runtime setup.
//!
//! Builds the storage backend and alias generator selected by configuration,
//! wires them into the URL service, and runs the Axum server lifecycle.

use crate::application::services::UrlService;
use crate::config::{AliasStrategy, Config, StorageBackend};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::persistence::{MemoryUrlRepository, PgUrlRepository, pool};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::alias::{AliasGenerator, CounterAliasGenerator, RandomAliasGenerator};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// Upper bound on reading the counter seed from storage at startup.
const SEED_TIMEOUT: Duration = Duration::from_secs(10);

/// Creates the repository selected by `config.storage`.
///
/// # Errors
///
/// Returns an error if PostgreSQL is selected and the pool cannot be opened
/// or migrated.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn UrlRepository>> {
    match config.storage {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage");
            Ok(Arc::new(MemoryUrlRepository::new()))
        }
        StorageBackend::Postgresql => {
            let db = config
                .database
                .as_ref()
                .context("database configuration is required for postgresql storage")?;
            let pool = pool::connect(db).await?;
            Ok(Arc::new(PgUrlRepository::new(Arc::new(pool))))
        }
    }
}

/// Creates the alias generator selected by `config.alias_strategy`.
///
/// The counter strategy is seeded from the repository's last id so aliases
/// issued before a restart are not reissued.
///
/// # Errors
///
/// Returns an error if the configured length is invalid, the counter secret is
/// missing, or the seed cannot be read in time.
pub async fn build_generator(
    config: &Config,
    repository: &dyn UrlRepository,
) -> Result<Arc<dyn AliasGenerator>> {
    match config.alias_strategy {
        AliasStrategy::Random => {
            let generator = RandomAliasGenerator::new(config.alias_length)
                .context("Failed to initialize alias generator")?;
            Ok(Arc::new(generator))
        }
        AliasStrategy::Counter => {
            let secret = config
                .alias_secret
                .context("ALIAS_SECRET is required for the counter strategy")?;

            let last_id = tokio::time::timeout(SEED_TIMEOUT, repository.get_last_id())
                .await
                .context("Timed out reading last id")?
                .context("Failed to read last id")?;
            let seed = u64::try_from(last_id).unwrap_or(0);
            tracing::info!(seed, "Seeding counter alias generator");

            let generator = CounterAliasGenerator::new(seed, secret, config.alias_length)
                .context("Failed to initialize alias generator")?;
            Ok(Arc::new(generator))
        }
    }
}

/// Builds a fully wired [`UrlService`] from configuration.
///
/// # Errors
///
/// See [`build_repository`] and [`build_generator`].
pub async fn build_service(config: &Config) -> Result<UrlService> {
    let repository = build_repository(config).await?;
    let generator = build_generator(config, repository.as_ref()).await?;

    Ok(
        UrlService::new(repository, generator, config.base_url.clone())
            .with_max_attempts(config.alias_max_attempts),
    )
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes storage, the alias generator and the URL service, then serves
/// until SIGINT/SIGTERM. In-flight requests get `shutdown_timeout` seconds to
/// finish.
///
/// # Errors
///
/// Returns an error if:
/// - Storage or generator setup fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let url_service = Arc::new(build_service(&config).await?);
    let state = AppState::new(url_service, config.storage);

    let app = app_router(state, Duration::from_secs(config.request_timeout));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    let shutdown_started = Arc::new(Notify::new());
    let serve = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown({
            let shutdown_started = Arc::clone(&shutdown_started);
            async move {
                shutdown_signal().await;
                shutdown_started.notify_one();
            }
        })
        .into_future();

    let grace = Duration::from_secs(config.shutdown_timeout);
    tokio::select! {
        result = serve => result?,
        _ = async {
            shutdown_started.notified().await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!("Graceful shutdown timed out after {}s", config.shutdown_timeout);
        }
    }

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
