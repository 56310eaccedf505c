//! Provider abstraction for the statistics API.
//!
//! [`StatsProvider`] is the unified interface the sync pipeline talks to.
//! The real implementation is [`korastats::KorastatsClient`]; tests swap in
//! mock providers through `dyn StatsProvider` / generic bounds.

pub mod korastats;

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::models::entity::{PersonEntry, PersonInfo};
use crate::models::fixture::{
    MatchEntry, MatchPlayerStats, MatchSquad, MatchSummary, MatchTeamStats, MatchTimeline,
    MatchVideo,
};
use crate::models::standings::StandingsTable;
use crate::models::team::{TeamEntry, TeamInfo, TeamSeasonStats};
use crate::models::tournament::{StatType, TopPerformer, TournamentStructure, TournamentSummary};

#[async_trait]
pub trait StatsProvider: Send + Sync {
    // Listings (phase preconditions)
    async fn tournament_list(
        &self,
        season: Option<&str>,
    ) -> Result<Vec<TournamentSummary>, ProviderError>;
    async fn tournament_team_list(
        &self,
        tournament_id: i64,
        season: Option<&str>,
    ) -> Result<Vec<TeamEntry>, ProviderError>;
    async fn tournament_match_list(
        &self,
        tournament_id: i64,
        season: Option<&str>,
    ) -> Result<Vec<MatchEntry>, ProviderError>;
    async fn tournament_player_list(
        &self,
        tournament_id: i64,
        season: Option<&str>,
    ) -> Result<Vec<PersonEntry>, ProviderError>;
    async fn tournament_coach_list(
        &self,
        tournament_id: i64,
        season: Option<&str>,
    ) -> Result<Vec<PersonEntry>, ProviderError>;
    async fn tournament_referee_list(
        &self,
        tournament_id: i64,
        season: Option<&str>,
    ) -> Result<Vec<PersonEntry>, ProviderError>;

    // Tournament sub-resources
    async fn tournament_structure(&self, id: i64) -> Result<TournamentStructure, ProviderError>;
    async fn stat_types(&self) -> Result<Vec<StatType>, ProviderError>;
    async fn tournament_top_performers(
        &self,
        tournament_id: i64,
        stat_type: i64,
    ) -> Result<Vec<TopPerformer>, ProviderError>;

    // Team sub-resources
    async fn team_info(&self, id: i64) -> Result<TeamInfo, ProviderError>;
    async fn tournament_team_stats(
        &self,
        tournament_id: i64,
        team_id: i64,
        season: Option<&str>,
    ) -> Result<TeamSeasonStats, ProviderError>;

    // Match sub-resources
    async fn match_summary(&self, id: i64) -> Result<MatchSummary, ProviderError>;
    async fn match_timeline(&self, id: i64) -> Result<MatchTimeline, ProviderError>;
    async fn match_squad(&self, id: i64) -> Result<MatchSquad, ProviderError>;
    async fn match_player_stats(&self, id: i64) -> Result<MatchPlayerStats, ProviderError>;
    async fn match_team_stats(&self, id: i64) -> Result<MatchTeamStats, ProviderError>;
    async fn match_video(&self, id: i64) -> Result<MatchVideo, ProviderError>;

    // People
    async fn player_info(&self, id: i64) -> Result<PersonInfo, ProviderError>;
    async fn coach_info(&self, id: i64) -> Result<PersonInfo, ProviderError>;
    async fn referee_info(&self, id: i64) -> Result<PersonInfo, ProviderError>;

    // Standings
    async fn tournament_standings(
        &self,
        tournament_id: i64,
        season: Option<&str>,
    ) -> Result<StandingsTable, ProviderError>;
}
