//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod grid;
mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::TesselConfig;
use tessel_common::ConfigError;

pub use grid::MAX_COLUMNS;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TesselConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    grid::validate_grid(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
