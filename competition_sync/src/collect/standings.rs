use std::sync::Arc;

use korastats_client::models::standings::StandingsTable;
use korastats_client::providers::StatsProvider;

use crate::collect::{CollectionError, require};

/// Everything needed to build one tournament's standings snapshot.
#[derive(Debug, Clone)]
pub struct StandingsBundle {
    pub table: StandingsTable,
}

/// Collector for the standings phase; ids are tournament ids.
#[derive(Clone)]
pub struct StandingsCollector {
    provider: Arc<dyn StatsProvider>,
    season: Option<String>,
}

impl StandingsCollector {
    pub fn new(provider: Arc<dyn StatsProvider>, season: Option<String>) -> Self {
        Self { provider, season }
    }

    pub async fn collect(&self, tournament_id: i64) -> Result<StandingsBundle, CollectionError> {
        let mut missing = Vec::new();
        let table = require(
            self.provider
                .tournament_standings(tournament_id, self.season.as_deref())
                .await,
            "standings table",
            &mut missing,
        );

        // An empty table carries no snapshot worth persisting.
        if let Some(t) = &table
            && t.rows.is_empty()
        {
            missing.push("standings rows");
        }

        match table {
            Some(table) if missing.is_empty() => Ok(StandingsBundle { table }),
            _ => Err(CollectionError::Incomplete {
                entity: "standings",
                id: tournament_id,
                missing,
            }),
        }
    }
}
