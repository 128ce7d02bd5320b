//! Tests for the full validation pipeline.

use super::*;
use tessel_common::ResizeHandle;

#[test]
fn default_config_validates() {
    let config = TesselConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_columns() {
    let mut config = TesselConfig::default();
    config.grid.columns = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("grid.columns"));
}

#[test]
fn catches_too_many_columns() {
    let mut config = TesselConfig::default();
    config.grid.columns = MAX_COLUMNS + 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("grid.columns"));
}

#[test]
fn catches_non_positive_row_height() {
    let mut config = TesselConfig::default();
    config.grid.row_height = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("grid.row_height"));
}

#[test]
fn catches_negative_gaps() {
    let mut config = TesselConfig::default();
    config.grid.gap = -1.0;
    config.grid.row_gap = Some(-2.0);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("grid.gap"));
    assert!(err.contains("grid.row_gap"));
    assert!(!err.contains("grid.column_gap"));
}

#[test]
fn catches_nan_threshold() {
    let mut config = TesselConfig::default();
    config.grid.resize_threshold = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("grid.resize_threshold"));
}

#[test]
fn catches_duplicate_handles() {
    let mut config = TesselConfig::default();
    config.grid.resize_handles = vec![ResizeHandle::Se, ResizeHandle::S, ResizeHandle::Se];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("'se' more than once"));
}

#[test]
fn empty_handle_list_is_valid() {
    let mut config = TesselConfig::default();
    config.grid.resize_handles.clear();
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = TesselConfig::default();
    config.grid.columns = 0;
    config.grid.row_height = -5.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("grid.columns"));
    assert!(err.contains("grid.row_height"));
    assert!(err.contains("; "));
}
