use std::collections::HashMap;
use std::sync::Arc;

use korastats_client::models::tournament::{
    StatType, TopPerformer, TournamentStructure, TournamentSummary,
};
use korastats_client::providers::StatsProvider;
use tracing::debug;

use crate::collect::{CollectionError, require};
use crate::map::stats::find_stat_type;

/// Everything needed to build one canonical tournament.
#[derive(Debug, Clone)]
pub struct TournamentBundle {
    pub summary: TournamentSummary,
    pub structure: TournamentStructure,
    pub top_scorer: Option<TopPerformer>,
    pub top_assister: Option<TopPerformer>,
}

/// Collector for the tournaments phase.
///
/// Built from the phase's master listing so `collect(id)` never re-fetches
/// it. Top scorer/assister use stat-type discovery: when the provider does
/// not expose a matching stat type the reference is simply absent.
#[derive(Clone)]
pub struct TournamentCollector {
    provider: Arc<dyn StatsProvider>,
    index: Arc<HashMap<i64, TournamentSummary>>,
    goals_stat: Option<i64>,
    assists_stat: Option<i64>,
}

impl TournamentCollector {
    pub fn new(
        provider: Arc<dyn StatsProvider>,
        listing: &[TournamentSummary],
        stat_types: &[StatType],
    ) -> Self {
        let index = listing.iter().map(|t| (t.id, t.clone())).collect();
        Self {
            provider,
            index: Arc::new(index),
            goals_stat: find_stat_type(stat_types, "goals").map(|t| t.id),
            assists_stat: find_stat_type(stat_types, "assists").map(|t| t.id),
        }
    }

    pub async fn collect(&self, id: i64) -> Result<TournamentBundle, CollectionError> {
        let mut missing = Vec::new();

        let summary = self.index.get(&id).cloned();
        if summary.is_none() {
            missing.push("list entry");
        }

        let structure = require(
            self.provider.tournament_structure(id).await,
            "structure",
            &mut missing,
        );

        let (Some(summary), Some(structure)) = (summary, structure) else {
            return Err(CollectionError::Incomplete {
                entity: "tournament",
                id,
                missing,
            });
        };

        let top_scorer = self.top_performer(id, self.goals_stat).await;
        let top_assister = self.top_performer(id, self.assists_stat).await;

        Ok(TournamentBundle {
            summary,
            structure,
            top_scorer,
            top_assister,
        })
    }

    /// Best-effort: an undiscovered stat type or a failed fetch both mean
    /// "feature unavailable", never an item failure.
    async fn top_performer(&self, id: i64, stat: Option<i64>) -> Option<TopPerformer> {
        let stat = stat?;
        match self.provider.tournament_top_performers(id, stat).await {
            Ok(mut performers) if !performers.is_empty() => Some(performers.remove(0)),
            Ok(_) => None,
            Err(e) => {
                debug!(tournament = id, stat, error = %e, "top performers unavailable");
                None
            }
        }
    }
}
