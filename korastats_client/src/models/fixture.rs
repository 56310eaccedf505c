use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::team::VenueInfo;

/// One entry of `TournamentMatchList`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub id: i64,
    pub tournament_id: i64,
    pub season: Option<String>,
    pub round: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// `MatchSummary`: header data for one fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: i64,
    pub tournament_id: i64,
    pub season: Option<String>,
    pub round: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub venue: Option<VenueInfo>,
    pub referee: Option<OfficialRef>,
    pub home: MatchTeamSide,
    pub away: MatchTeamSide,
    /// Per-15-minute goal counts; absent for thinly covered fixtures.
    pub goal_intervals: Option<GoalIntervals>,
    pub penalty_home: Option<u32>,
    pub penalty_away: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficialRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchTeamSide {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
    pub score: Option<u32>,
    pub coach: Option<OfficialRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalIntervals {
    #[serde(default)]
    pub home: Vec<IntervalCount>,
    #[serde(default)]
    pub away: Vec<IntervalCount>,
}

/// Goals scored in `[from_minute, from_minute + 15)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalCount {
    pub from_minute: u32,
    pub goals: u32,
}

/// `MatchTimeline`: the full event list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchTimeline {
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub minute: u32,
    pub event_type: String,
    pub team_id: i64,
    pub player_id: Option<i64>,
    pub player_name: Option<String>,
    pub assist_id: Option<i64>,
    pub assist_name: Option<String>,
    pub detail: Option<String>,
}

/// `MatchSquad`: lineups and formations for both sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSquad {
    pub home: SquadSide,
    pub away: SquadSide,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadSide {
    pub team_id: i64,
    /// Raw formation text, e.g. `"1-433"` (keeper prefix + outfield digits).
    pub formation: Option<String>,
    #[serde(default)]
    pub players: Vec<SquadPlayer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SquadPlayer {
    pub id: i64,
    pub name: String,
    pub number: Option<u32>,
    pub position: Option<String>,
    #[serde(default)]
    pub starter: bool,
}

/// `MatchPlayerStats`: per-player stat values keyed by free-text stat name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchPlayerStats {
    #[serde(default)]
    pub players: Vec<PlayerMatchStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerMatchStats {
    pub player_id: i64,
    pub team_id: i64,
    #[serde(default)]
    pub stats: IndexMap<String, f64>,
}

/// `MatchTeamStats`: per-side stat values plus possession periods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchTeamStats {
    pub home: TeamMatchStats,
    pub away: TeamMatchStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMatchStats {
    pub team_id: i64,
    #[serde(default)]
    pub stats: IndexMap<String, f64>,
    #[serde(default)]
    pub possession_periods: Vec<PossessionPeriod>,
}

/// Home possession percentage over `[from_minute, to_minute)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PossessionPeriod {
    pub from_minute: u32,
    pub to_minute: u32,
    pub possession: f64,
}

/// `MatchVideo`: highlights reference, when the provider has one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchVideo {
    pub url: Option<String>,
}
