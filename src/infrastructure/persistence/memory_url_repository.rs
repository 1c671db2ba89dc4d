//! In-process implementation of the URL repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::{RepositoryError, UrlRepository};

/// Records plus the two indexes into them.
///
/// Records live in an append-only arena; a record's id is its position + 1.
#[derive(Debug, Default)]
struct Store {
    records: Vec<UrlRecord>,
    by_alias: HashMap<String, usize>,
    by_long_url: HashMap<String, usize>,
}

/// In-memory repository guarded by a single reader/writer lock.
///
/// `create_or_get` holds the write lock for the whole check-then-insert
/// sequence, lookups share the read lock. The lock is never held across an
/// `.await`. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    store: RwLock<Store>,
}

impl MemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .len()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn create_or_get(&self, new_url: NewUrl) -> Result<UrlRecord, RepositoryError> {
        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(&index) = store.by_long_url.get(&new_url.long_url) {
            return Ok(store.records[index].clone());
        }

        if store.by_alias.contains_key(&new_url.alias) {
            return Err(RepositoryError::Conflict);
        }

        let index = store.records.len();
        let record = UrlRecord::new(
            index as i64 + 1,
            new_url.long_url,
            new_url.alias,
            Utc::now(),
        );

        store.by_alias.insert(record.alias.clone(), index);
        store.by_long_url.insert(record.long_url.clone(), index);
        store.records.push(record.clone());

        Ok(record)
    }

    async fn get_by_alias(&self, alias: &str) -> Result<UrlRecord, RepositoryError> {
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);

        store
            .by_alias
            .get(alias)
            .map(|&index| store.records[index].clone())
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_long_url_by_alias(&self, alias: &str) -> Result<String, RepositoryError> {
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);

        store
            .by_alias
            .get(alias)
            .map(|&index| store.records[index].long_url.clone())
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_last_id(&self) -> Result<i64, RepositoryError> {
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);

        Ok(store.records.last().map_or(0, |record| record.id))
    }
}
