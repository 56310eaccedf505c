use serde::{Deserialize, Serialize};

/// One entry of `TournamentTeamList`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamEntry {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
    pub logo: Option<String>,
    pub country: Option<String>,
}

/// `TeamInfo`: the full team card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamInfo {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
    pub logo: Option<String>,
    pub country: Option<String>,
    pub venue: Option<VenueInfo>,
    #[serde(default)]
    pub staff: Vec<StaffEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueInfo {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffEntry {
    pub id: i64,
    pub name: String,
    pub role: Option<String>,
}

/// `TournamentTeamStats`: one team's totals for one (tournament, season).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSeasonStats {
    #[serde(default)]
    pub matches_played: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
    #[serde(default)]
    pub clean_sheets: u32,
}
