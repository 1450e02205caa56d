//! Shared utilities for tourplan
//!
//! - **Error handling**: errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based planner configuration with validation
//!
//! # Example
//!
//! ```rust,no_run
//! use tourplan_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("average speed: {} km/h", config.schema.planner.average_speed_kmh);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};

