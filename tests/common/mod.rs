#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use url_alias::application::services::UrlService;
use url_alias::config::StorageBackend;
use url_alias::domain::entities::{NewUrl, UrlRecord};
use url_alias::domain::repositories::{RepositoryError, UrlRepository};
use url_alias::infrastructure::persistence::MemoryUrlRepository;
use url_alias::routes::router;
use url_alias::state::AppState;
use url_alias::utils::alias::{AliasGenerator, GenerationError, RandomAliasGenerator};

pub const BASE_URL: &str = "http://sho.rt";

/// Issues the same alias on every call.
pub struct FixedAliasGenerator(pub &'static str);

impl AliasGenerator for FixedAliasGenerator {
    fn new_alias(&self) -> Result<String, GenerationError> {
        Ok(self.0.to_string())
    }
}

/// Rejects every insert as an alias conflict.
pub struct ConflictingRepository;

#[async_trait]
impl UrlRepository for ConflictingRepository {
    async fn create_or_get(&self, _new_url: NewUrl) -> Result<UrlRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    async fn get_by_alias(&self, _alias: &str) -> Result<UrlRecord, RepositoryError> {
        Err(RepositoryError::NotFound)
    }

    async fn get_long_url_by_alias(&self, _alias: &str) -> Result<String, RepositoryError> {
        Err(RepositoryError::NotFound)
    }

    async fn get_last_id(&self) -> Result<i64, RepositoryError> {
        Ok(0)
    }
}

/// Fails every call as if the database were unreachable.
pub struct UnavailableRepository;

#[async_trait]
impl UrlRepository for UnavailableRepository {
    async fn create_or_get(&self, _new_url: NewUrl) -> Result<UrlRecord, RepositoryError> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn get_by_alias(&self, _alias: &str) -> Result<UrlRecord, RepositoryError> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn get_long_url_by_alias(&self, _alias: &str) -> Result<String, RepositoryError> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn get_last_id(&self) -> Result<i64, RepositoryError> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub fn create_state(
    repository: Arc<dyn UrlRepository>,
    generator: Arc<dyn AliasGenerator>,
    storage: StorageBackend,
) -> AppState {
    let service = UrlService::new(repository, generator, BASE_URL);
    AppState::new(Arc::new(service), storage)
}

/// State backed by in-memory storage and random 10-symbol aliases.
pub fn create_memory_state() -> AppState {
    create_state(
        Arc::new(MemoryUrlRepository::new()),
        Arc::new(RandomAliasGenerator::new(10).unwrap()),
        StorageBackend::Memory,
    )
}

pub fn create_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

/// Shortens `long_url` through the API and returns the issued alias.
pub async fn shorten(server: &TestServer, long_url: &str) -> String {
    let response = server
        .post("/api")
        .json(&serde_json::json!({ "long_url": long_url }))
        .await;
    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let short_url = json["short_url"].as_str().unwrap();
    short_url
        .strip_prefix(&format!("{BASE_URL}/"))
        .unwrap()
        .to_string()
}
