use std::sync::Arc;

use korastats_client::models::entity::PersonInfo;
use korastats_client::providers::StatsProvider;

use crate::collect::{CollectionError, require};
use crate::models::person::PersonKind;

/// Everything needed to build one canonical person record.
#[derive(Debug, Clone)]
pub struct PersonBundle {
    pub kind: PersonKind,
    pub info: PersonInfo,
}

/// Collector for the entities phase (players, coaches, referees).
#[derive(Clone)]
pub struct PersonCollector {
    provider: Arc<dyn StatsProvider>,
}

impl PersonCollector {
    pub fn new(provider: Arc<dyn StatsProvider>) -> Self {
        Self { provider }
    }

    pub async fn collect(&self, kind: PersonKind, id: i64) -> Result<PersonBundle, CollectionError> {
        let result = match kind {
            PersonKind::Player => self.provider.player_info(id).await,
            PersonKind::Coach => self.provider.coach_info(id).await,
            PersonKind::Referee => self.provider.referee_info(id).await,
        };

        let mut missing = Vec::new();
        let Some(info) = require(result, "info", &mut missing) else {
            return Err(CollectionError::Incomplete {
                entity: kind.describe(),
                id,
                missing,
            });
        };

        Ok(PersonBundle { kind, info })
    }
}
