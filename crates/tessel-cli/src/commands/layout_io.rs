//! Reading layout files and printing layouts.

use std::path::Path;

use tessel_common::Result;
use tessel_grid::{validate_keys, GridItem};
use tracing::debug;

/// Read a JSON array of items and reject empty or duplicate keys.
pub fn read_layout(path: &Path) -> Result<Vec<GridItem>> {
    let content = std::fs::read_to_string(path)?;
    let layout: Vec<GridItem> = serde_json::from_str(&content)?;
    validate_keys(&layout)?;
    debug!(items = layout.len(), "read layout from {}", path.display());
    Ok(layout)
}

pub fn render_layout(layout: &[GridItem]) -> Result<String> {
    Ok(serde_json::to_string_pretty(layout)?)
}

pub fn print_layout(layout: &[GridItem]) -> Result<()> {
    println!("{}", render_layout(layout)?);
    Ok(())
}
