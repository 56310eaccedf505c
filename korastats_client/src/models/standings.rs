use serde::{Deserialize, Serialize};

/// `TournamentStandings`: the table for one (tournament, season).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsTable {
    pub tournament_id: i64,
    pub season: String,
    #[serde(default)]
    pub rows: Vec<StandingRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
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
