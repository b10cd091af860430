//! # Multilingual Config
//!
//! Type-safe localization settings for translation resolution.
//!
//! This crate provides configuration loading (YAML with environment
//! overrides), validation, and a lock-free settings cache that the
//! translation resolver reads on every request.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cache::ConfigCache;
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use schema::*;
