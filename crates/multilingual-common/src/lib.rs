//! # Multilingual Common
//!
//! Shared types, logging setup, and test helpers for the multilingual workspace.
//!
//! This crate provides the foundational pieces used across the config and
//! object crates: entity identifiers and the tracing subscriber bootstrap.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod logging;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use logging::{init_default_logging, init_dev_logging, init_logging, LoggingConfig};
pub use types::*;
