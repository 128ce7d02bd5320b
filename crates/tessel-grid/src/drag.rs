//! Per-frame gesture dispatch.

use std::borrow::Cow;

use tessel_common::ResizeHandle;
use tessel_config::GridConfig;
use tracing::debug;

use crate::edit::{move_selection, resize_item};
use crate::item::GridItem;
use crate::layout::{LayoutUpdate, Selection};

/// Apply one frame of a gesture to the committed `layout`.
///
/// With a `handle` the sole selected item is resized; without one the whole
/// selection is moved. `(dx, dy)` is the cumulative delta since the gesture
/// began. Nothing happens when the grid is not editable.
pub fn drag<'a>(
    layout: &'a [GridItem],
    config: &GridConfig,
    selection: &Selection,
    dx: i32,
    dy: i32,
    handle: Option<ResizeHandle>,
) -> LayoutUpdate<'a> {
    if !config.editable {
        return Cow::Borrowed(layout);
    }
    match handle {
        Some(handle) => match selection.sole() {
            Some(key) => resize_item(layout, config, key.as_str(), handle, dx, dy),
            None => {
                debug!(selected = selection.len(), %handle, "resize needs exactly one selected item");
                Cow::Borrowed(layout)
            }
        },
        None => move_selection(layout, config, selection, dx, dy),
    }
}
