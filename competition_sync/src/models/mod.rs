//! Canonical documents persisted to the store.
//!
//! Every document carries the provider-assigned `korastats_id`, plus the
//! sync metadata (`last_synced`, `sync_version`) maintained by the
//! merge-upsert engine.

pub mod fixture;
pub mod person;
pub mod standings;
pub mod team;
pub mod tournament;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A document the pipeline persists: knows its collection and identity.
pub trait CanonicalDoc: Serialize + DeserializeOwned + Send + Sync {
    fn collection(&self) -> &'static str;
    fn korastats_id(&self) -> i64;
}

/// A `{id, name}` reference to a person (coach, referee, scorer).
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct PersonRef {
    pub id: i64,
    pub name: String,
}

impl PersonRef {
    /// Placeholder used when the provider does not name a coach.
    pub fn unknown_coach() -> Self {
        Self {
            id: 0,
            name: "Unknown Coach".to_string(),
        }
    }
}

/// Venue sub-document shared by teams and matches.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
}
