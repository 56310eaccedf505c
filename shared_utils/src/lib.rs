//! Small helpers shared by the provider client and the sync pipeline.

pub mod env;
