//! Terminal output helpers for tourplan
//!
//! - Status messages
//! - Distance and count formatting

#![warn(missing_docs)]

pub mod output;
