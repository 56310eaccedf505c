//! Document store abstraction.
//!
//! The pipeline only ever reads a whole document, writes a whole document,
//! or purges documents out-of-band; that is the entire contract. Concurrent
//! writes to *different* ids are safe (disjoint documents). The
//! read-modify-write reconcile above this layer is not compare-and-swap, so
//! two overlapping orchestrator runs over the same ids can lose an update;
//! a single in-process orchestrator instance is assumed.

mod fs;
mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::models::CanonicalDoc;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error")]
    Io(#[from] std::io::Error),

    #[error("document (de)serialization failed")]
    Serde(#[from] serde_json::Error),
}

/// Filter for the out-of-band purge operation. Both filters are optional;
/// an empty filter matches every document in the collection.
#[derive(Debug, Clone, Default)]
pub struct PurgeFilter {
    /// Restrict the purge to these ids.
    pub ids: Option<Vec<i64>>,
    /// Only purge documents last synced strictly before this instant.
    pub last_synced_before: Option<DateTime<Utc>>,
}

impl PurgeFilter {
    pub(crate) fn matches(&self, id: i64, doc: &Value) -> bool {
        if let Some(ids) = &self.ids
            && !ids.contains(&id)
        {
            return false;
        }
        if let Some(cutoff) = self.last_synced_before {
            let synced = doc
                .get("last_synced")
                .and_then(Value::as_str)
                .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                .map(|dt| dt.with_timezone(&Utc));
            match synced {
                Some(ts) if ts < cutoff => {}
                // Keep documents with no parseable timestamp.
                _ => return false,
            }
        }
        true
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_raw(&self, collection: &str, id: i64) -> Result<Option<Value>, StoreError>;
    async fn put_raw(&self, collection: &str, id: i64, doc: Value) -> Result<(), StoreError>;
    async fn list_ids(&self, collection: &str) -> Result<Vec<i64>, StoreError>;
    /// Deletes matching documents, returning how many were removed. The only
    /// delete path in the system; the sync pipeline itself never deletes.
    async fn purge(&self, collection: &str, filter: &PurgeFilter) -> Result<u64, StoreError>;
}

/// Typed read through the raw store interface.
pub async fn get_doc<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: &str,
    id: i64,
) -> Result<Option<T>, StoreError> {
    match store.get_raw(collection, id).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Typed write; the document routes itself to its collection.
pub async fn put_doc<T: CanonicalDoc>(
    store: &dyn DocumentStore,
    doc: &T,
) -> Result<(), StoreError> {
    let value = serde_json::to_value(doc)?;
    store.put_raw(doc.collection(), doc.korastats_id(), value).await
}
