//! Configuration management for ghfeed.
//!
//! This crate handles loading and validating the `ghfeed.toml` configuration
//! file. Every section is optional; a missing file means all defaults.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config, find_and_load_config_from, load_config};
pub use schema::{Config, EventsConfig, GitHubConfig, OutputConfig};
