//! Gesture state between pointer-down and pointer-up.
//!
//! A session keeps the committed layout untouched and recomputes the
//! provisional layout from it on every frame using the cumulative delta.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tessel_common::{Point, ResizeHandle};
use tessel_config::GridConfig;
use tracing::debug;

use crate::drag::drag;
use crate::handles::classify_handle;
use crate::item::GridItem;
use crate::layout::{find_item, Selection};
use crate::metrics::{GridDelta, GridMetrics};

/// What the active gesture does to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "handle")]
pub enum Gesture {
    Move,
    Resize(ResizeHandle),
}

impl Gesture {
    pub fn handle(self) -> Option<ResizeHandle> {
        match self {
            Gesture::Move => None,
            Gesture::Resize(handle) => Some(handle),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DragSession {
    committed: Vec<GridItem>,
    selection: Selection,
    gesture: Gesture,
    origin: Point,
    delta: GridDelta,
    provisional: Option<Vec<GridItem>>,
}

impl DragSession {
    /// Begin a gesture with the pointer pressed at `pointer` on item `key`.
    ///
    /// Pressing on a resize grip starts a resize of that item alone.
    /// Otherwise the item is moved together with the selection, or alone
    /// when it is not part of the selection. Returns `None` when the grid
    /// is read-only or `key` is not in `layout`.
    pub fn start(
        layout: &[GridItem],
        config: &GridConfig,
        container_width: f64,
        selection: &Selection,
        key: &str,
        pointer: Point,
    ) -> Option<Self> {
        if !config.editable {
            return None;
        }
        let item = find_item(layout, key)?;
        let bounds = GridMetrics::new(container_width, config).item_rect(item);

        let (gesture, selection) = match classify_handle(&bounds, pointer, config) {
            Some(handle) => (Gesture::Resize(handle), Selection::single(key)),
            None if selection.contains(key) => (Gesture::Move, selection.clone()),
            None => (Gesture::Move, Selection::single(key)),
        };
        debug!(key, ?gesture, selected = selection.len(), "gesture started");

        Some(Self {
            committed: layout.to_vec(),
            selection,
            gesture,
            origin: pointer,
            delta: GridDelta::default(),
            provisional: None,
        })
    }

    /// Recompute the provisional layout for the pointer now at `pointer`.
    ///
    /// Returns `true` when the provisional layout differs from the one
    /// produced by the previous frame.
    pub fn update(&mut self, pointer: Point, container_width: f64, config: &GridConfig) -> bool {
        let delta = GridMetrics::new(container_width, config).delta(self.origin, pointer);
        if delta == self.delta {
            return false;
        }
        self.delta = delta;

        let next = match drag(
            &self.committed,
            config,
            &self.selection,
            delta.dx,
            delta.dy,
            self.gesture.handle(),
        ) {
            Cow::Borrowed(_) => None,
            Cow::Owned(items) => Some(items),
        };
        let changed = next.as_deref().unwrap_or(&self.committed) != self.layout();
        self.provisional = next;
        changed
    }

    /// The layout to render for the current frame.
    pub fn layout(&self) -> &[GridItem] {
        self.provisional.as_deref().unwrap_or(&self.committed)
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Cumulative grid delta applied by the last update.
    pub fn delta(&self) -> GridDelta {
        self.delta
    }

    /// End the gesture, returning the layout to commit.
    pub fn finish(self) -> Vec<GridItem> {
        self.provisional.unwrap_or(self.committed)
    }

    /// Abandon the gesture, returning the layout from before it began.
    pub fn cancel(self) -> Vec<GridItem> {
        self.committed
    }
}
