//! Reconciles the runtime statistics and lifecycle metadata of an
//! application's instances into one view per instance.

pub mod actor;
pub mod api;
pub mod config;
pub mod models;
pub mod utils;
