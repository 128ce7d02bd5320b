//! The grid item record and its geometric helpers.

use serde::{Deserialize, Serialize};
use tessel_common::ItemKey;

fn default_min_size() -> i32 {
    1
}

/// One rectangle on the grid, measured in grid units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridItem {
    pub key: ItemKey,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    #[serde(default = "default_min_size")]
    pub min_w: i32,
    #[serde(default = "default_min_size")]
    pub min_h: i32,
    /// Defaults to the column count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_w: Option<i32>,
    /// Unbounded when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_h: Option<i32>,
    /// Static items are obstacles: compaction never moves them.
    #[serde(rename = "static", default)]
    pub is_static: bool,
}

impl GridItem {
    pub fn new(key: impl Into<ItemKey>, x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            key: key.into(),
            x,
            y,
            w,
            h,
            min_w: 1,
            min_h: 1,
            max_w: None,
            max_h: None,
            is_static: false,
        }
    }

    pub fn pinned(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_min(mut self, min_w: i32, min_h: i32) -> Self {
        self.min_w = min_w;
        self.min_h = min_h;
        self
    }

    pub fn with_max(mut self, max_w: Option<i32>, max_h: Option<i32>) -> Self {
        self.max_w = max_w;
        self.max_h = max_h;
        self
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Position and size as `(x, y, w, h)`.
    pub fn geometry(&self) -> (i32, i32, i32, i32) {
        (self.x, self.y, self.w, self.h)
    }

    pub fn same_geometry(&self, other: &GridItem) -> bool {
        self.geometry() == other.geometry()
    }

    pub fn shares_columns(&self, other: &GridItem) -> bool {
        self.x < other.right() && other.x < self.right()
    }

    pub fn shares_rows(&self, other: &GridItem) -> bool {
        self.y < other.bottom() && other.y < self.bottom()
    }

    pub fn overlaps(&self, other: &GridItem) -> bool {
        self.shares_columns(other) && self.shares_rows(other)
    }
}
