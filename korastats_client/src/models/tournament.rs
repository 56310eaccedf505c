use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry of the `TournamentList` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub id: i64,
    pub name: String,
    pub season: String,
    pub organizer: Option<String>,
    pub age_group: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// `TournamentStructure`: stages with their ordered round labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentStructure {
    #[serde(default)]
    pub stages: Vec<Stage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub name: String,
    pub order: Option<u32>,
}

/// One row of the free-text statistic-type listing (`StatTypes`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatType {
    pub id: i64,
    pub name: String,
}

/// One row of `TournamentTopPerformers` for a given stat type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPerformer {
    pub player_id: i64,
    pub player_name: String,
    #[serde(default)]
    pub value: f64,
}
