use std::sync::Arc;

use korastats_client::models::team::{TeamInfo, TeamSeasonStats};
use korastats_client::providers::StatsProvider;

use crate::collect::{CollectionError, require};

/// Everything needed to build one canonical team for one
/// (tournament, season) scope.
#[derive(Debug, Clone)]
pub struct TeamBundle {
    pub info: TeamInfo,
    pub stats: TeamSeasonStats,
    pub tournament_id: i64,
    pub season: String,
}

/// Collector for the teams phase, scoped to one tournament and season.
#[derive(Clone)]
pub struct TeamCollector {
    provider: Arc<dyn StatsProvider>,
    tournament_id: i64,
    season: String,
}

impl TeamCollector {
    pub fn new(provider: Arc<dyn StatsProvider>, tournament_id: i64, season: String) -> Self {
        Self {
            provider,
            tournament_id,
            season,
        }
    }

    pub async fn collect(&self, id: i64) -> Result<TeamBundle, CollectionError> {
        let (info, stats) = tokio::join!(
            self.provider.team_info(id),
            self.provider
                .tournament_team_stats(self.tournament_id, id, Some(&self.season)),
        );

        let mut missing = Vec::new();
        let info = require(info, "team info", &mut missing);
        let stats = require(stats, "tournament team stats", &mut missing);

        let (Some(info), Some(stats)) = (info, stats) else {
            return Err(CollectionError::Incomplete {
                entity: "team",
                id,
                missing,
            });
        };

        Ok(TeamBundle {
            info,
            stats,
            tournament_id: self.tournament_id,
            season: self.season.clone(),
        })
    }
}
