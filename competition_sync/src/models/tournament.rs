use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::CanonicalDoc;

pub const COLLECTION: &str = "tournaments";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub korastats_id: i64,
    pub name: String,
    pub season: String,
    pub organizer: Option<String>,
    pub age_group: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Round labels in stage order, as published by the provider.
    pub rounds: Vec<String>,
    pub status: TournamentStatus,
    pub top_scorer: Option<TopPlayerRef>,
    pub top_assister: Option<TopPlayerRef>,
    pub last_synced: DateTime<Utc>,
    pub sync_version: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Upcoming,
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPlayerRef {
    pub id: i64,
    pub name: String,
    pub value: f64,
}

impl CanonicalDoc for Tournament {
    fn collection(&self) -> &'static str {
        COLLECTION
    }

    fn korastats_id(&self) -> i64 {
        self.korastats_id
    }
}
