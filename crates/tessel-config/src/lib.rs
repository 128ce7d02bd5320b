//! Tessel configuration system.
//!
//! Provides TOML-based configuration for the grid engine and the command
//! line tool. All sections use defaults so partial configs work out of
//! the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{GridConfig, LogLevel, LoggingConfig, TesselConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{load_default, load_from_path};

use std::path::Path;
use tessel_common::ConfigError;

/// Load and strictly validate a config.
///
/// With `Some(path)` the file must exist; with `None` the platform default
/// path is used and a missing file yields defaults.
pub fn load_config(path: Option<&Path>) -> Result<TesselConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TesselConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
