use std::time::Duration;

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use shared_utils::env::{get_env_var, get_env_var_or};

use crate::envelope::ApiEnvelope;
use crate::errors::ProviderError;
use crate::models::entity::{PersonEntry, PersonInfo};
use crate::models::fixture::{
    MatchEntry, MatchPlayerStats, MatchSquad, MatchSummary, MatchTeamStats, MatchTimeline,
    MatchVideo,
};
use crate::models::standings::StandingsTable;
use crate::models::team::{TeamEntry, TeamInfo, TeamSeasonStats};
use crate::models::tournament::{StatType, TopPerformer, TournamentStructure, TournamentSummary};
use crate::providers::StatsProvider;

const DEFAULT_BASE_URL: &str = "https://korastats.pro/pro/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Live Korastats client.
///
/// Reads the API key from `KORASTATS_API_KEY` and an optional base-URL
/// override from `KORASTATS_BASE_URL`. Every call waits on a direct rate
/// limiter first so batch bursts stay inside the provider's quota, and
/// carries its own request timeout; a timed-out call surfaces as an ordinary
/// [`ProviderError`] for the caller to record.
pub struct KorastatsClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
    limiter: DefaultDirectRateLimiter,
}

impl KorastatsClient {
    pub fn new() -> Result<Self, ProviderError> {
        let api_key = SecretString::new(get_env_var("KORASTATS_API_KEY")?.into());
        let base_url = get_env_var_or("KORASTATS_BASE_URL", DEFAULT_BASE_URL);

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
            // 5 req/s keeps a full batch of sub-fetches under the provider cap.
            limiter: RateLimiter::direct(Quota::per_second(nonzero!(5u32))),
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        self.limiter.until_ready().await;

        let mut query: Vec<(String, String)> = vec![(
            "key".to_string(),
            self.api_key.expose_secret().to_string(),
        )];
        for (k, v) in params {
            query.push((k.to_string(), v.clone()));
        }

        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.client.get(&url).query(&query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api {
                endpoint: endpoint.to_string(),
                message: format!("HTTP {status}: {body}"),
            });
        }

        let envelope = response.json::<ApiEnvelope<T>>().await?;
        envelope.into_data(endpoint)
    }
}

fn id_param(id: i64) -> (&'static str, String) {
    ("id", id.to_string())
}

fn season_param(season: Option<&str>) -> Option<(&'static str, String)> {
    season.map(|s| ("season", s.to_string()))
}

fn with_season(mut params: Vec<(&'static str, String)>, season: Option<&str>) -> Vec<(&'static str, String)> {
    if let Some(p) = season_param(season) {
        params.push(p);
    }
    params
}

#[async_trait]
impl StatsProvider for KorastatsClient {
    async fn tournament_list(
        &self,
        season: Option<&str>,
    ) -> Result<Vec<TournamentSummary>, ProviderError> {
        self.call("TournamentList", &with_season(vec![], season)).await
    }

    async fn tournament_team_list(
        &self,
        tournament_id: i64,
        season: Option<&str>,
    ) -> Result<Vec<TeamEntry>, ProviderError> {
        self.call(
            "TournamentTeamList",
            &with_season(vec![id_param(tournament_id)], season),
        )
        .await
    }

    async fn tournament_match_list(
        &self,
        tournament_id: i64,
        season: Option<&str>,
    ) -> Result<Vec<MatchEntry>, ProviderError> {
        self.call(
            "TournamentMatchList",
            &with_season(vec![id_param(tournament_id)], season),
        )
        .await
    }

    async fn tournament_player_list(
        &self,
        tournament_id: i64,
        season: Option<&str>,
    ) -> Result<Vec<PersonEntry>, ProviderError> {
        self.call(
            "TournamentPlayerList",
            &with_season(vec![id_param(tournament_id)], season),
        )
        .await
    }

    async fn tournament_coach_list(
        &self,
        tournament_id: i64,
        season: Option<&str>,
    ) -> Result<Vec<PersonEntry>, ProviderError> {
        self.call(
            "TournamentCoachList",
            &with_season(vec![id_param(tournament_id)], season),
        )
        .await
    }

    async fn tournament_referee_list(
        &self,
        tournament_id: i64,
        season: Option<&str>,
    ) -> Result<Vec<PersonEntry>, ProviderError> {
        self.call(
            "TournamentRefereeList",
            &with_season(vec![id_param(tournament_id)], season),
        )
        .await
    }

    async fn tournament_structure(&self, id: i64) -> Result<TournamentStructure, ProviderError> {
        self.call("TournamentStructure", &[id_param(id)]).await
    }

    async fn stat_types(&self) -> Result<Vec<StatType>, ProviderError> {
        self.call("StatTypes", &[]).await
    }

    async fn tournament_top_performers(
        &self,
        tournament_id: i64,
        stat_type: i64,
    ) -> Result<Vec<TopPerformer>, ProviderError> {
        self.call(
            "TournamentTopPerformers",
            &[id_param(tournament_id), ("stat_type", stat_type.to_string())],
        )
        .await
    }

    async fn team_info(&self, id: i64) -> Result<TeamInfo, ProviderError> {
        self.call("TeamInfo", &[id_param(id)]).await
    }

    async fn tournament_team_stats(
        &self,
        tournament_id: i64,
        team_id: i64,
        season: Option<&str>,
    ) -> Result<TeamSeasonStats, ProviderError> {
        self.call(
            "TournamentTeamStats",
            &with_season(
                vec![id_param(tournament_id), ("team_id", team_id.to_string())],
                season,
            ),
        )
        .await
    }

    async fn match_summary(&self, id: i64) -> Result<MatchSummary, ProviderError> {
        self.call("MatchSummary", &[id_param(id)]).await
    }

    async fn match_timeline(&self, id: i64) -> Result<MatchTimeline, ProviderError> {
        self.call("MatchTimeline", &[id_param(id)]).await
    }

    async fn match_squad(&self, id: i64) -> Result<MatchSquad, ProviderError> {
        self.call("MatchSquad", &[id_param(id)]).await
    }

    async fn match_player_stats(&self, id: i64) -> Result<MatchPlayerStats, ProviderError> {
        self.call("MatchPlayerStats", &[id_param(id)]).await
    }

    async fn match_team_stats(&self, id: i64) -> Result<MatchTeamStats, ProviderError> {
        self.call("MatchTeamStats", &[id_param(id)]).await
    }

    async fn match_video(&self, id: i64) -> Result<MatchVideo, ProviderError> {
        self.call("MatchVideo", &[id_param(id)]).await
    }

    async fn player_info(&self, id: i64) -> Result<PersonInfo, ProviderError> {
        self.call("PlayerInfo", &[id_param(id)]).await
    }

    async fn coach_info(&self, id: i64) -> Result<PersonInfo, ProviderError> {
        self.call("CoachInfo", &[id_param(id)]).await
    }

    async fn referee_info(&self, id: i64) -> Result<PersonInfo, ProviderError> {
        self.call("RefereeInfo", &[id_param(id)]).await
    }

    async fn tournament_standings(
        &self,
        tournament_id: i64,
        season: Option<&str>,
    ) -> Result<StandingsTable, ProviderError> {
        self.call(
            "TournamentGroupStandings",
            &with_season(vec![id_param(tournament_id)], season),
        )
        .await
    }
}
