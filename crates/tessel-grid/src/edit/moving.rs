//! Translating the selected items, then repacking by midpoint.

use std::borrow::Cow;

use tessel_config::GridConfig;

use crate::compact::{compact_by_midpoint, compact_owned};
use crate::item::GridItem;
use crate::layout::{LayoutUpdate, Selection};
use crate::order::by_midpoint;

/// Shift every selected item by `(dx, dy)` grid units and compact.
///
/// Unknown keys in `selection` are skipped. Items are not clamped here;
/// out-of-grid positions are repaired by the compactor.
pub fn move_selection<'a>(
    layout: &'a [GridItem],
    config: &GridConfig,
    selection: &Selection,
    dx: i32,
    dy: i32,
) -> LayoutUpdate<'a> {
    if (dx == 0 && dy == 0) || selection.is_empty() {
        return Cow::Borrowed(layout);
    }

    let mut moved: Option<Vec<GridItem>> = None;
    for (index, item) in layout.iter().enumerate() {
        if !selection.contains(item.key.as_str()) {
            continue;
        }
        let x = item.x.saturating_add(dx);
        let y = item.y.saturating_add(dy);
        if x == item.x && y == item.y {
            continue;
        }
        let items = moved.get_or_insert_with(|| layout.to_vec());
        items[index].x = x;
        items[index].y = y;
    }

    match moved {
        Some(items) => Cow::Owned(compact_owned(items, config, by_midpoint)),
        None => compact_by_midpoint(layout, config),
    }
}
