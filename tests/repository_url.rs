//! PostgreSQL repository tests.
//!
//! `#[sqlx::test]` creates a fresh migrated database per test from `DATABASE_URL`.

use sqlx::PgPool;
use std::sync::Arc;
use url_alias::domain::entities::NewUrl;
use url_alias::domain::repositories::{RepositoryError, UrlRepository};
use url_alias::infrastructure::persistence::PgUrlRepository;

fn repository(pool: PgPool) -> PgUrlRepository {
    PgUrlRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_create_or_get_inserts_new_record(pool: PgPool) {
    let repo = repository(pool);

    let record = repo
        .create_or_get(NewUrl::new("https://example.com", "abc"))
        .await
        .unwrap();

    assert!(record.id > 0);
    assert_eq!(record.long_url, "https://example.com");
    assert_eq!(record.alias, "abc");
}

#[sqlx::test]
async fn test_create_or_get_returns_existing_record(pool: PgPool) {
    let repo = repository(pool);

    let first = repo
        .create_or_get(NewUrl::new("https://example.com", "first"))
        .await
        .unwrap();
    let second = repo
        .create_or_get(NewUrl::new("https://example.com", "second"))
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(second.alias, "first");
}

#[sqlx::test]
async fn test_create_or_get_alias_conflict(pool: PgPool) {
    let repo = repository(pool);

    repo.create_or_get(NewUrl::new("https://example.com/a", "same"))
        .await
        .unwrap();
    let result = repo
        .create_or_get(NewUrl::new("https://example.com/b", "same"))
        .await;

    assert!(matches!(result, Err(RepositoryError::Conflict)));
}

#[sqlx::test]
async fn test_get_by_alias(pool: PgPool) {
    let repo = repository(pool);

    let created = repo
        .create_or_get(NewUrl::new("https://example.com", "xyz"))
        .await
        .unwrap();

    let found = repo.get_by_alias("xyz").await.unwrap();
    assert_eq!(found, created);

    let long_url = repo.get_long_url_by_alias("xyz").await.unwrap();
    assert_eq!(long_url, "https://example.com");
}

#[sqlx::test]
async fn test_get_by_alias_not_found(pool: PgPool) {
    let repo = repository(pool);

    assert!(matches!(
        repo.get_by_alias("missing").await,
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.get_long_url_by_alias("missing").await,
        Err(RepositoryError::NotFound)
    ));
}

#[sqlx::test]
async fn test_get_last_id(pool: PgPool) {
    let repo = repository(pool);

    assert_eq!(repo.get_last_id().await.unwrap(), 0);

    let record = repo
        .create_or_get(NewUrl::new("https://example.com/1", "one"))
        .await
        .unwrap();
    repo.create_or_get(NewUrl::new("https://example.com/1", "ignored"))
        .await
        .unwrap();

    assert_eq!(repo.get_last_id().await.unwrap(), record.id);
}

#[sqlx::test]
async fn test_concurrent_create_or_get_same_url(pool: PgPool) {
    let repo = Arc::new(repository(pool));

    let mut handles = Vec::new();
    for i in 0..8 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo.create_or_get(NewUrl::new("https://race.example.com", format!("alias{i}")))
                .await
                .unwrap()
        }));
    }

    let mut aliases = Vec::new();
    for handle in handles {
        aliases.push(handle.await.unwrap().alias);
    }

    aliases.dedup();
    assert_eq!(aliases.len(), 1);
}
