//! Grid configuration validation (columns, row metrics, gaps, handles).

use std::collections::HashSet;

use crate::schema::TesselConfig;

use super::helpers::{validate_non_negative, validate_positive, validate_range};

/// Upper bound on the column count accepted from config files.
pub const MAX_COLUMNS: u32 = 256;

/// Validate all grid-related constraints.
pub(crate) fn validate_grid(errors: &mut Vec<String>, config: &TesselConfig) {
    let grid = &config.grid;
    validate_range(errors, "grid.columns", grid.columns, 1, MAX_COLUMNS);
    validate_positive(errors, "grid.row_height", grid.row_height);
    validate_non_negative(errors, "grid.gap", grid.gap);
    if let Some(column_gap) = grid.column_gap {
        validate_non_negative(errors, "grid.column_gap", column_gap);
    }
    if let Some(row_gap) = grid.row_gap {
        validate_non_negative(errors, "grid.row_gap", row_gap);
    }
    validate_non_negative(errors, "grid.resize_threshold", grid.resize_threshold);

    let mut seen = HashSet::new();
    for handle in &grid.resize_handles {
        if !seen.insert(*handle) {
            errors.push(format!("grid.resize_handles lists '{handle}' more than once"));
        }
    }
}
