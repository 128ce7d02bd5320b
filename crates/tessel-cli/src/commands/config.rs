//! `config` and `init-config`.

use std::path::Path;

use tessel_common::{Result, TesselError};
use tessel_config::toml_loader::{create_default_config, default_config_path};
use tessel_config::{config_to_json, TesselConfig};

use super::Outcome;

pub fn show(config: &TesselConfig) -> Result<Outcome> {
    println!("{}", config_to_json(config));
    Ok(Outcome::Success)
}

/// Write the default config, refusing to overwrite an existing file.
pub fn init(path: Option<&Path>) -> Result<Outcome> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_config_path()?,
    };
    if path.exists() {
        return Err(TesselError::Other(format!(
            "config already exists at {}",
            path.display()
        )));
    }
    create_default_config(&path)?;
    println!("{}", path.display());
    Ok(Outcome::Success)
}
