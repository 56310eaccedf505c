use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::CanonicalDoc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    Player,
    Coach,
    Referee,
}

impl PersonKind {
    pub fn collection(self) -> &'static str {
        match self {
            PersonKind::Player => "players",
            PersonKind::Coach => "coaches",
            PersonKind::Referee => "referees",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            PersonKind::Player => "player",
            PersonKind::Coach => "coach",
            PersonKind::Referee => "referee",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub korastats_id: i64,
    pub kind: PersonKind,
    /// Cleaned display name (suffixes stripped, "Last, First" reordered,
    /// long multi-part names shortened).
    pub name: String,
    pub nationality: Option<String>,
    pub birth: Option<BirthInfo>,
    pub photo: Option<String>,
    pub position: Option<String>,
    pub last_synced: DateTime<Utc>,
    pub sync_version: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInfo {
    pub date: Option<NaiveDate>,
    pub place: Option<String>,
}

impl CanonicalDoc for Person {
    fn collection(&self) -> &'static str {
        self.kind.collection()
    }

    fn korastats_id(&self) -> i64 {
        self.korastats_id
    }
}
