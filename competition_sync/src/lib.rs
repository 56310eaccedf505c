//! Korastats-to-canonical sync pipeline.
//!
//! Pulls competition data (tournaments, teams, matches, people, standings)
//! from the Korastats API, maps it into canonical documents, and merge-upserts
//! them into a document store. The flow per item is Collect -> Map ->
//! Reconcile -> Persist; the [`orchestrator`] drives items through it in
//! rate-limited concurrent batches.

pub mod collect;
pub mod config;
pub mod error;
pub mod map;
pub mod merge;
pub mod models;
pub mod orchestrator;
pub mod progress;
pub mod store;
