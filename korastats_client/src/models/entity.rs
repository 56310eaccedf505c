use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One id/name row of a per-tournament person listing
/// (`TournamentPlayerList` and friends).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonEntry {
    pub id: i64,
    pub name: String,
}

/// The full person card (`PlayerInfo` / `CoachInfo` / `RefereeInfo`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonInfo {
    pub id: i64,
    pub name: String,
    pub nationality: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub birth_place: Option<String>,
    pub photo: Option<String>,
    pub position: Option<String>,
}
