//! Per-entity collectors.
//!
//! A collector fetches every provider sub-resource needed to build one
//! canonical record, in parallel, and decides completeness atomically: if
//! any required sub-fetch fails or comes back empty, the whole id fails
//! with a [`CollectionError::Incomplete`] naming every missing
//! sub-resource. Partial bundles never reach a mapper.

pub mod fixture;
pub mod person;
pub mod standings;
pub mod team;
pub mod tournament;

use korastats_client::errors::ProviderError;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CollectionError {
    /// A listing-level provider failure, before any sub-fetch fan-out.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// One or more required sub-resources failed or came back empty.
    #[error("{entity} {id}: missing required sub-resources: {}", missing.join(", "))]
    Incomplete {
        entity: &'static str,
        id: i64,
        missing: Vec<&'static str>,
    },
}

/// Unwraps one required sub-fetch, recording its name on failure.
pub(crate) fn require<T>(
    result: Result<T, ProviderError>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(sub_resource = name, error = %e, "required sub-fetch failed");
            missing.push(name);
            None
        }
    }
}
