use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use crate::store::{DocumentStore, PurgeFilter, StoreError};

/// Filesystem-backed document store: one pretty-printed JSON file per
/// document under `<root>/<collection>/<id>.json`.
///
/// Writes go through a temp file and an atomic rename so a crashed run never
/// leaves a torn document behind.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn doc_path(&self, collection: &str, id: i64) -> PathBuf {
        self.root.join(collection).join(format!("{id}.json"))
    }

    fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(collection)
    }
}

fn id_from_path(path: &Path) -> Option<i64> {
    path.file_stem()?.to_str()?.parse().ok()
}

#[async_trait]
impl DocumentStore for FsStore {
    async fn get_raw(&self, collection: &str, id: i64) -> Result<Option<Value>, StoreError> {
        match fs::read(self.doc_path(collection, id)).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn put_raw(&self, collection: &str, id: i64, doc: Value) -> Result<(), StoreError> {
        let dir = self.collection_dir(collection);
        fs::create_dir_all(&dir).await?;

        let tmp = dir.join(format!("{id}.json.tmp"));
        let bytes = serde_json::to_vec_pretty(&doc)?;
        fs::write(&tmp, bytes).await?;
        fs::rename(&tmp, self.doc_path(collection, id)).await?;
        Ok(())
    }

    async fn list_ids(&self, collection: &str) -> Result<Vec<i64>, StoreError> {
        let dir = self.collection_dir(collection);
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };

        let mut ids = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(id) = id_from_path(&path)
            {
                ids.push(id);
            }
        }
        ids.sort_unstable();
        Ok(ids)
    }

    async fn purge(&self, collection: &str, filter: &PurgeFilter) -> Result<u64, StoreError> {
        let mut removed = 0;
        for id in self.list_ids(collection).await? {
            let Some(doc) = self.get_raw(collection, id).await? else {
                continue;
            };
            if filter.matches(id, &doc) {
                fs::remove_file(self.doc_path(collection, id)).await?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}
