use chrono::{Duration, Utc};
use competition_sync::store::{DocumentStore, FsStore, PurgeFilter};
use serde_json::json;
use tempfile::TempDir;

fn store() -> (TempDir, FsStore) {
    let dir = TempDir::new().expect("tempdir");
    let store = FsStore::new(dir.path());
    (dir, store)
}

#[tokio::test]
async fn round_trips_documents() {
    let (_dir, store) = store();

    let doc = json!({"korastats_id": 840, "name": "Pro League"});
    store.put_raw("tournaments", 840, doc.clone()).await.unwrap();

    let loaded = store.get_raw("tournaments", 840).await.unwrap();
    assert_eq!(loaded, Some(doc));
    assert_eq!(store.get_raw("tournaments", 999).await.unwrap(), None);
}

#[tokio::test]
async fn overwrites_in_place() {
    let (_dir, store) = store();

    store
        .put_raw("teams", 1, json!({"sync_version": 1}))
        .await
        .unwrap();
    store
        .put_raw("teams", 1, json!({"sync_version": 2}))
        .await
        .unwrap();

    let loaded = store.get_raw("teams", 1).await.unwrap().expect("doc");
    assert_eq!(loaded["sync_version"], 2);
    assert_eq!(store.list_ids("teams").await.unwrap(), vec![1]);
}

#[tokio::test]
async fn lists_ids_sorted_and_tolerates_missing_collection() {
    let (_dir, store) = store();

    for id in [30, 10, 20] {
        store.put_raw("matches", id, json!({})).await.unwrap();
    }
    assert_eq!(store.list_ids("matches").await.unwrap(), vec![10, 20, 30]);
    assert!(store.list_ids("nothing").await.unwrap().is_empty());
}

#[tokio::test]
async fn purge_by_ids() {
    let (_dir, store) = store();

    for id in [1, 2, 3] {
        store.put_raw("players", id, json!({})).await.unwrap();
    }
    let filter = PurgeFilter {
        ids: Some(vec![1, 3]),
        last_synced_before: None,
    };
    let removed = store.purge("players", &filter).await.unwrap();
    assert_eq!(removed, 2);
    assert_eq!(store.list_ids("players").await.unwrap(), vec![2]);
}

#[tokio::test]
async fn purge_by_age_keeps_fresh_and_unstamped_documents() {
    let (_dir, store) = store();
    let now = Utc::now();

    let stale = (now - Duration::days(30)).to_rfc3339();
    let fresh = now.to_rfc3339();
    store
        .put_raw("teams", 1, json!({"last_synced": stale}))
        .await
        .unwrap();
    store
        .put_raw("teams", 2, json!({"last_synced": fresh}))
        .await
        .unwrap();
    // No timestamp at all: never purged by age.
    store.put_raw("teams", 3, json!({})).await.unwrap();

    let filter = PurgeFilter {
        ids: None,
        last_synced_before: Some(now - Duration::days(7)),
    };
    let removed = store.purge("teams", &filter).await.unwrap();
    assert_eq!(removed, 1);
    assert_eq!(store.list_ids("teams").await.unwrap(), vec![2, 3]);
}

#[tokio::test]
async fn empty_filter_purges_whole_collection() {
    let (_dir, store) = store();

    for id in [1, 2] {
        store.put_raw("referees", id, json!({})).await.unwrap();
    }
    let removed = store.purge("referees", &PurgeFilter::default()).await.unwrap();
    assert_eq!(removed, 2);
    assert!(store.list_ids("referees").await.unwrap().is_empty());
}
