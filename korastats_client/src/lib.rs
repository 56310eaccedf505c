//! Typed async client for the Korastats sports-statistics API.
//!
//! This crate wraps every provider endpoint the sync pipeline consumes in a
//! typed call: the raw `{result, message, data}` envelope is decoded and
//! validated once, here, so downstream code only ever sees fully-typed
//! payload structs.

pub mod envelope;
pub mod errors;
pub mod models;
pub mod providers;
