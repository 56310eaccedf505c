//! Pure mappers from validated bundles to canonical documents.
//!
//! No I/O, no clock reads (callers pass `now`); missing optional provider
//! data gets explicit defaults, never an error. A mapper errors only on
//! structurally impossible input the collector should have rejected.

pub mod fixture;
pub mod names;
pub mod person;
pub mod standings;
pub mod stats;
pub mod team;
pub mod tournament;
