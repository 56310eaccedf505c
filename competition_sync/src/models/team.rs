use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CanonicalDoc, Venue};

pub const COLLECTION: &str = "teams";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub korastats_id: i64,
    pub name: String,
    pub code: Option<String>,
    pub logo: Option<String>,
    pub country: Option<String>,
    pub venue: Option<Venue>,
    pub coaches: Vec<StaffRef>,
    /// One element per `(league.id, league.season)`; the merge engine
    /// replaces matching elements in place and never duplicates a key.
    pub tournament_stats: Vec<TeamTournamentStats>,
    /// Aggregate fold over the full `tournament_stats` array; recomputed
    /// after every merge, never patched incrementally.
    pub stats_summary: StatsSummary,
    pub tournaments: Vec<TournamentRef>,
    pub last_synced: DateTime<Utc>,
    pub sync_version: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffRef {
    pub id: i64,
    pub name: String,
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamTournamentStats {
    pub league: LeagueKey,
    pub fixtures: FixtureTally,
    pub goals: GoalTally,
    pub clean_sheet: u32,
}

/// The composite key of one per-season statistics element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueKey {
    pub id: i64,
    pub season: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureTally {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalTally {
    #[serde(rename = "for")]
    pub for_: u32,
    pub against: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub seasons: u32,
    pub fixtures_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub clean_sheets: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentRef {
    pub id: i64,
    pub season: String,
}

impl CanonicalDoc for Team {
    fn collection(&self) -> &'static str {
        COLLECTION
    }

    fn korastats_id(&self) -> i64 {
        self.korastats_id
    }
}
