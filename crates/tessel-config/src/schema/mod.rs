//! Configuration schema types for Tessel.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod grid;
mod logging;

pub use grid::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TesselConfig {
    pub grid: GridConfig,
    pub logging: LoggingConfig,
}
