//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions (Config, InputConfig, OutputConfig, LogConfig)
//! - [`defaults`]: Default value functions used by serde

mod defaults;
mod types;

pub use types::{Config, ConfigError, InputConfig, LogConfig, LoginConfig, Source, SummaryFormat};
