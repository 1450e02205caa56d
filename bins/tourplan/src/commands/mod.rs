//! CLI command implementations

pub mod config;
pub mod distance;
pub mod nearby;
pub mod plan;
