use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CanonicalDoc, PersonRef, Venue};

pub const COLLECTION: &str = "matches";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDoc {
    pub korastats_id: i64,
    pub tournament_id: i64,
    pub season: Option<String>,
    pub round: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub venue: Option<Venue>,
    pub referee: Option<PersonRef>,
    pub teams: MatchTeams,
    pub goals: GoalsPair,
    pub score: ScoreBreakdown,
    pub events: Vec<MatchEvent>,
    pub lineups: Vec<Lineup>,
    pub statistics: Vec<TeamStatistics>,
    #[serde(rename = "playersStats")]
    pub players_stats: Vec<PlayerStatistics>,
    pub momentum: Vec<MomentumBucket>,
    pub highlights: Option<String>,
    /// Which optional sub-resources were actually present for this fixture.
    #[serde(rename = "dataAvailable")]
    pub data_available: Vec<String>,
    pub last_synced: DateTime<Utc>,
    pub sync_version: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchTeams {
    pub home: MatchTeam,
    pub away: MatchTeam,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchTeam {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
    pub score: Option<u32>,
    pub coach: PersonRef,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalsPair {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub halftime: ScorePair,
    pub fulltime: ScorePair,
    pub extratime: ScorePair,
    pub penalty: ScorePair,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScorePair {
    pub home: u32,
    pub away: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub minute: u32,
    pub kind: String,
    pub team_id: i64,
    pub player: Option<PersonRef>,
    pub assist: Option<PersonRef>,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub team_id: i64,
    /// Normalized dash-separated outfield lines, e.g. `"4-3-3"`.
    pub formation: String,
    pub starters: Vec<LineupPlayer>,
    pub substitutes: Vec<LineupPlayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupPlayer {
    pub id: i64,
    pub name: String,
    pub number: Option<u32>,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStatistics {
    pub team_id: i64,
    pub stats: Vec<StatValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatistics {
    pub player_id: i64,
    pub team_id: i64,
    pub stats: Vec<StatValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub name: String,
    pub value: f64,
}

/// One 10-minute window of the momentum series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumBucket {
    pub minute: u32,
    pub home: MomentumSide,
    pub away: MomentumSide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumSide {
    /// Truncated possession percentage for this window.
    pub possession: u32,
    pub goals: Vec<MomentumGoal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumGoal {
    pub minute: u32,
    pub player: Option<PersonRef>,
}

impl CanonicalDoc for MatchDoc {
    fn collection(&self) -> &'static str {
        COLLECTION
    }

    fn korastats_id(&self) -> i64 {
        self.korastats_id
    }
}
