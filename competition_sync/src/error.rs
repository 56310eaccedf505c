use korastats_client::errors::ProviderError;
use thiserror::Error;

use crate::collect::CollectionError;
use crate::store::StoreError;

/// Pipeline error taxonomy.
///
/// Every variant except [`SyncError::PhaseFatal`] is recovered locally by the
/// orchestrator: the item is recorded as failed and the batch continues.
/// `PhaseFatal` means the phase could not even enumerate its work items and
/// propagates out of `run_phase`.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A provider call outside a collector failed (timeout, non-success
    /// envelope, transport error).
    #[error("provider call failed: {0}")]
    Provider(#[from] ProviderError),

    /// One or more required sub-resources were missing for an entity; no
    /// partial record was persisted.
    #[error(transparent)]
    Collection(#[from] CollectionError),

    /// Structurally invalid input reached a mapper. Rare: the collector's
    /// completeness check catches these first.
    #[error("mapping failed for {entity} {id}: {message}")]
    Mapping {
        entity: &'static str,
        id: i64,
        message: String,
    },

    /// The merge-upsert write itself failed. Not retried automatically.
    #[error("persistence failed: {0}")]
    Persistence(#[from] StoreError),

    /// The phase could not enumerate its work items at all.
    #[error("phase {phase} could not enumerate work items: {source}")]
    PhaseFatal {
        phase: &'static str,
        #[source]
        source: ProviderError,
    },
}
