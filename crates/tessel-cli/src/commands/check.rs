//! `check`: list invariant violations.

use std::path::Path;

use tessel_common::Result;
use tessel_config::GridConfig;
use tessel_grid::check_layout;
use tracing::info;

use super::layout_io::read_layout;
use super::Outcome;

pub fn run(path: &Path, config: &GridConfig) -> Result<Outcome> {
    let layout = read_layout(path)?;
    let violations = check_layout(&layout, config);
    if violations.is_empty() {
        info!(items = layout.len(), "layout ok");
        println!("ok");
        return Ok(Outcome::Success);
    }
    for violation in &violations {
        println!("{violation}");
    }
    Ok(Outcome::Violations)
}
