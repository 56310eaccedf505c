//! Typed payload models, one struct per provider endpoint.
//!
//! Every optional field the provider is known to omit is `Option` or
//! `#[serde(default)]`; validation beyond shape happens in the collectors.

pub mod entity;
pub mod fixture;
pub mod standings;
pub mod team;
pub mod tournament;
