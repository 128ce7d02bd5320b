//! Grid geometry and interaction configuration.

use serde::{Deserialize, Serialize};
use tessel_common::ResizeHandle;

pub const DEFAULT_COLUMNS: u32 = 12;
pub const DEFAULT_ROW_HEIGHT: f64 = 30.0;
pub const DEFAULT_GAP: f64 = 0.0;
pub const DEFAULT_RESIZE_THRESHOLD: f64 = 10.0;

/// Grid configuration consumed by the layout engine.
///
/// `column_gap` and `row_gap` fall back to `gap` when unset; use the
/// accessor methods rather than reading the raw fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of columns (valid range: 1-256).
    pub columns: u32,
    /// Height of one grid row in pixels.
    pub row_height: f64,
    /// Gap in pixels between cells, used for both axes unless overridden.
    pub gap: f64,
    pub column_gap: Option<f64>,
    pub row_gap: Option<f64>,
    /// Resize grips a pointer may grab.
    pub resize_handles: Vec<ResizeHandle>,
    /// Distance in pixels from an edge at which a resize grip activates.
    pub resize_threshold: f64,
    /// When false, no drag or resize gesture is applied.
    pub editable: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            row_height: DEFAULT_ROW_HEIGHT,
            gap: DEFAULT_GAP,
            column_gap: None,
            row_gap: None,
            resize_handles: ResizeHandle::DEFAULT_SET.to_vec(),
            resize_threshold: DEFAULT_RESIZE_THRESHOLD,
            editable: true,
        }
    }
}

impl GridConfig {
    /// Column count as signed grid units. Never less than one.
    pub fn column_count(&self) -> i32 {
        i32::try_from(self.columns).unwrap_or(i32::MAX).max(1)
    }

    pub fn column_gap(&self) -> f64 {
        self.column_gap.unwrap_or(self.gap)
    }

    pub fn row_gap(&self) -> f64 {
        self.row_gap.unwrap_or(self.gap)
    }

    pub fn allows_handle(&self, handle: ResizeHandle) -> bool {
        self.resize_handles.contains(&handle)
    }

    /// Builder-style column override, handy in tests and tools.
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }
}
