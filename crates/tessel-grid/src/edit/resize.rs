//! Edge adjustments for a single item, then repacking in top-left order.

use std::borrow::Cow;

use tessel_common::ResizeHandle;
use tessel_config::GridConfig;
use tracing::debug;

use crate::compact::compact_owned;
use crate::item::{clamp, GridItem};
use crate::layout::LayoutUpdate;
use crate::order::by_top_left;

/// Drag the edges named by `handle` of the item `key` by `(dx, dy)` and compact.
///
/// A missing key or an unchanged geometry returns the input layout.
pub fn resize_item<'a>(
    layout: &'a [GridItem],
    config: &GridConfig,
    key: &str,
    handle: ResizeHandle,
    dx: i32,
    dy: i32,
) -> LayoutUpdate<'a> {
    if dx == 0 && dy == 0 {
        return Cow::Borrowed(layout);
    }
    let Some(index) = layout.iter().position(|item| item.key.as_str() == key) else {
        debug!(key, "resize target not in layout");
        return Cow::Borrowed(layout);
    };

    let resized = resized_geometry(&layout[index], config, handle, dx, dy);
    if resized.same_geometry(&layout[index]) {
        return Cow::Borrowed(layout);
    }

    let mut items = layout.to_vec();
    items[index] = resized;
    Cow::Owned(compact_owned(items, config, by_top_left))
}

/// New geometry for `item` after moving the edges of `handle`.
///
/// Each moving edge stops one cell short of the opposite, fixed edge, and
/// the size stays within the item's declared bounds and the grid width.
pub fn resized_geometry(
    item: &GridItem,
    config: &GridConfig,
    handle: ResizeHandle,
    dx: i32,
    dy: i32,
) -> GridItem {
    let columns = config.column_count();
    let min_w = item.min_w.max(1);
    let min_h = item.min_h.max(1);
    let max_w = item.width_limit(columns);
    let max_h = item.height_limit();

    let mut next = item.clone();

    if handle.moves_north() {
        let bottom = item.bottom();
        let top = clamp(item.y.saturating_add(dy), 0, bottom - 1);
        next.h = clamp(bottom - top, min_h, max_h);
        next.y = bottom - next.h;
    }
    if handle.moves_south() {
        next.h = clamp(item.h.saturating_add(dy), min_h, max_h);
    }
    if handle.moves_east() {
        next.w = clamp(item.w.saturating_add(dx), min_w, max_w.min(columns - item.x).max(1));
    }
    if handle.moves_west() {
        let right = item.right();
        let left = clamp(item.x.saturating_add(dx), 0, right - 1);
        next.w = clamp(right - left, min_w, max_w.min(right).max(1));
        next.x = right - next.w;
    }

    next
}
