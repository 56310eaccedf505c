use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sync run configuration. Loaded from an optional TOML file, then
/// overridden field-by-field from the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Restrict the run to these tournaments; `None` syncs every tournament
    /// in the provider listing.
    pub tournament_ids: Option<Vec<i64>>,
    /// Season filter forwarded to the provider listings.
    pub season: Option<String>,
    /// Items processed concurrently per batch.
    pub batch_size: usize,
    /// Pause between batches, for provider rate limiting.
    pub delay_between_batches_ms: u64,
    /// Re-sync documents even when `skip_existing` would skip them.
    pub force_resync: bool,
    /// Skip ids that already have a stored document.
    pub skip_existing: bool,
    /// Cap items per phase; useful for smoke runs.
    pub limit: Option<usize>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            tournament_ids: None,
            season: None,
            batch_size: 8,
            delay_between_batches_ms: 1500,
            force_resync: false,
            skip_existing: false,
            limit: None,
        }
    }
}

impl SyncConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Whether an already-stored document should be skipped.
    pub fn should_skip_existing(&self) -> bool {
        self.skip_existing && !self.force_resync
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SyncConfig::default();
        assert_eq!(cfg.batch_size, 8);
        assert_eq!(cfg.delay_between_batches_ms, 1500);
        assert!(!cfg.should_skip_existing());
    }

    #[test]
    fn parses_partial_toml() {
        let cfg: SyncConfig = toml::from_str(
            r#"
            season = "2025/2026"
            tournament_ids = [840, 912]
            skip_existing = true
            limit = 25
            "#,
        )
        .unwrap();
        assert_eq!(cfg.season.as_deref(), Some("2025/2026"));
        assert_eq!(cfg.tournament_ids, Some(vec![840, 912]));
        assert_eq!(cfg.batch_size, 8);
        assert!(cfg.should_skip_existing());
        assert_eq!(cfg.limit, Some(25));
    }

    #[test]
    fn force_resync_overrides_skip() {
        let cfg = SyncConfig {
            skip_existing: true,
            force_resync: true,
            ..Default::default()
        };
        assert!(!cfg.should_skip_existing());
    }
}
