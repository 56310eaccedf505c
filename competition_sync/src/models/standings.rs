use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::CanonicalDoc;

pub const COLLECTION: &str = "standings";

/// Standings history for one tournament, one snapshot per season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    /// The tournament's provider id.
    pub korastats_id: i64,
    /// Season-keyed snapshots; same merge invariant as
    /// `Team::tournament_stats`.
    pub seasons: Vec<SeasonStandings>,
    pub last_synced: DateTime<Utc>,
    pub sync_version: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonStandings {
    pub season: String,
    pub rows: Vec<StandingRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub rank: u32,
    pub team_id: i64,
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: i32,
}

impl CanonicalDoc for Standings {
    fn collection(&self) -> &'static str {
        COLLECTION
    }

    fn korastats_id(&self) -> i64 {
        self.korastats_id
    }
}
