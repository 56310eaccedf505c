use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::store::{DocumentStore, PurgeFilter, StoreError};

/// In-memory document store, used by tests and dry runs.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<BTreeMap<String, BTreeMap<i64, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get_raw(&self, collection: &str, id: i64) -> Result<Option<Value>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard.get(collection).and_then(|c| c.get(&id)).cloned())
    }

    async fn put_raw(&self, collection: &str, id: i64, doc: Value) -> Result<(), StoreError> {
        let mut guard = self.collections.write().await;
        guard.entry(collection.to_string()).or_default().insert(id, doc);
        Ok(())
    }

    async fn list_ids(&self, collection: &str) -> Result<Vec<i64>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .map(|c| c.keys().copied().collect())
            .unwrap_or_default())
    }

    async fn purge(&self, collection: &str, filter: &PurgeFilter) -> Result<u64, StoreError> {
        let mut guard = self.collections.write().await;
        let Some(docs) = guard.get_mut(collection) else {
            return Ok(0);
        };
        let before = docs.len();
        docs.retain(|id, doc| !filter.matches(*id, doc));
        Ok((before - docs.len()) as u64)
    }
}
