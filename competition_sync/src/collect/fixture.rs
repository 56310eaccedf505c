use std::sync::Arc;

use korastats_client::models::fixture::{
    MatchPlayerStats, MatchSquad, MatchSummary, MatchTeamStats, MatchTimeline, MatchVideo,
};
use korastats_client::providers::StatsProvider;
use tracing::debug;

use crate::collect::{CollectionError, require};

/// Everything needed to build one canonical match document.
#[derive(Debug, Clone)]
pub struct FixtureBundle {
    pub summary: MatchSummary,
    pub timeline: MatchTimeline,
    pub squad: MatchSquad,
    pub player_stats: MatchPlayerStats,
    pub team_stats: MatchTeamStats,
    /// Highlights are the only optional sub-resource; absence is recorded
    /// in the document's `dataAvailable` set, not failed.
    pub video: Option<MatchVideo>,
}

/// Collector for the matches phase.
#[derive(Clone)]
pub struct FixtureCollector {
    provider: Arc<dyn StatsProvider>,
}

impl FixtureCollector {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }

    pub async fn collect(&self, id: i64) -> Result<FixtureBundle, CollectionError> {
        let (summary, timeline, squad, player_stats, team_stats, video) = tokio::join!(
            self.provider.match_summary(id),
            self.provider.match_timeline(id),
            self.provider.match_squad(id),
            self.provider.match_player_stats(id),
            self.provider.match_team_stats(id),
            self.provider.match_video(id),
        );

        let mut missing = Vec::new();
        let summary = require(summary, "summary", &mut missing);
        let timeline = require(timeline, "timeline", &mut missing);
        let squad = require(squad, "squad", &mut missing);
        let player_stats = require(player_stats, "player stats", &mut missing);
        let team_stats = require(team_stats, "team stats", &mut missing);

        // A squad with no players on either side cannot produce lineups.
        if let Some(s) = &squad
            && s.home.players.is_empty()
            && s.away.players.is_empty()
        {
            missing.push("squad players");
        }

        let (Some(summary), Some(timeline), Some(squad), Some(player_stats), Some(team_stats)) =
            (summary, timeline, squad, player_stats, team_stats)
        else {
            return Err(CollectionError::Incomplete {
                entity: "match",
                id,
                missing,
            });
        };

        if !missing.is_empty() {
            return Err(CollectionError::Incomplete {
                entity: "match",
                id,
                missing,
            });
        }

        let video = match video {
            Ok(v) => Some(v),
            Err(e) => {
                debug!(fixture = id, error = %e, "highlights unavailable");
                None
            }
        };

        Ok(FixtureBundle {
            summary,
            timeline,
            squad,
            player_stats,
            team_stats,
            video,
        })
    }
}
