//! `handle`: classify a pointer position against an item.

use std::path::Path;

use tessel_common::{LayoutError, Point, Result};
use tessel_config::GridConfig;
use tessel_grid::{classify_handle, find_item, GridMetrics};
use tracing::debug;

use super::layout_io::read_layout;
use super::Outcome;

pub fn run(
    path: &Path,
    config: &GridConfig,
    key: &str,
    container_width: f64,
    x: f64,
    y: f64,
) -> Result<Outcome> {
    let layout = read_layout(path)?;
    let item = find_item(&layout, key).ok_or_else(|| LayoutError::UnknownKey(key.to_string()))?;
    let bounds = GridMetrics::new(container_width, config).item_rect(item);
    debug!(?bounds, "item bounds");

    match classify_handle(&bounds, Point::new(x, y), config) {
        Some(handle) => println!("{handle}"),
        None => println!("none"),
    }
    Ok(Outcome::Success)
}
