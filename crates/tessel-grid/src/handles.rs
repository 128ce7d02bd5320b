//! Which resize grip, if any, a pointer is over.

use tessel_common::{Point, Rect, ResizeHandle};
use tessel_config::GridConfig;

/// Order in which grips are tried when the pointer is near several edges.
/// South-facing grips win, then north-facing, then the side edges.
const PRIORITY: [ResizeHandle; 8] = [
    ResizeHandle::Se,
    ResizeHandle::Sw,
    ResizeHandle::S,
    ResizeHandle::Ne,
    ResizeHandle::Nw,
    ResizeHandle::N,
    ResizeHandle::E,
    ResizeHandle::W,
];

/// Edges of a box the pointer is within threshold distance of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Proximity {
    north: bool,
    south: bool,
    east: bool,
    west: bool,
}

impl Proximity {
    fn measure(bounds: &Rect, pointer: Point, threshold: f64) -> Self {
        Self {
            north: (pointer.y - bounds.y).abs() <= threshold,
            south: (pointer.y - bounds.bottom()).abs() <= threshold,
            east: (pointer.x - bounds.right()).abs() <= threshold,
            west: (pointer.x - bounds.x).abs() <= threshold,
        }
    }

    fn matches(&self, handle: ResizeHandle) -> bool {
        (!handle.moves_north() || self.north)
            && (!handle.moves_south() || self.south)
            && (!handle.moves_east() || self.east)
            && (!handle.moves_west() || self.west)
    }
}

/// Classify `pointer` against an item's pixel `bounds`.
///
/// Resolves the highest-priority grip the pointer is near and returns it
/// only when the config allows it. `None` means no resize starts: the
/// pointer is in the body, outside the item, or on a disallowed grip.
pub fn classify_handle(bounds: &Rect, pointer: Point, config: &GridConfig) -> Option<ResizeHandle> {
    let threshold = config.resize_threshold.max(0.0);
    if !bounds.contains_with_margin(pointer, threshold) {
        return None;
    }
    let near = Proximity::measure(bounds, pointer, threshold);
    PRIORITY
        .into_iter()
        .find(|&handle| near.matches(handle))
        .filter(|&handle| config.allows_handle(handle))
}
