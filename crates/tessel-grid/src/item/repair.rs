//! Clamping a single item to the grid and its own size bounds.

use std::borrow::Cow;

use tessel_config::GridConfig;

use super::GridItem;

/// `value` limited to `[min, max]`. When the bounds are inverted the upper
/// bound wins; this never panics, unlike `Ord::clamp`.
pub(crate) fn clamp(value: i32, min: i32, max: i32) -> i32 {
    value.max(min).min(max)
}

impl GridItem {
    /// Widest this item may be on the given grid, at least one column.
    pub fn width_limit(&self, columns: i32) -> i32 {
        self.max_w.unwrap_or(columns).min(columns).max(1)
    }

    /// Tallest this item may be, at least one row.
    pub fn height_limit(&self) -> i32 {
        self.max_h.unwrap_or(i32::MAX).max(1)
    }

    /// Clamp size into the item's bounds, then position onto the grid.
    ///
    /// Returns `Cow::Borrowed(self)` when the item already fits.
    pub fn repair(&self, config: &GridConfig) -> Cow<'_, GridItem> {
        let columns = config.column_count();
        let w = clamp(self.w, self.min_w.max(1), self.width_limit(columns));
        let h = clamp(self.h, self.min_h.max(1), self.height_limit());
        let x = clamp(self.x, 0, columns - w);
        let y = self.y.max(0);

        if (x, y, w, h) == self.geometry() {
            Cow::Borrowed(self)
        } else {
            Cow::Owned(GridItem {
                x,
                y,
                w,
                h,
                ..self.clone()
            })
        }
    }
}
