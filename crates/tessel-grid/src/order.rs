//! Packing orders for the compactor.
//!
//! Both orders break ties on the item key so the result never depends on
//! the caller's insertion order.

use std::cmp::Ordering;

use crate::item::GridItem;

/// Row-major order by top-left corner: `y`, then `x`, then key.
pub fn by_top_left(a: &GridItem, b: &GridItem) -> Ordering {
    a.y.cmp(&b.y)
        .then(a.x.cmp(&b.x))
        .then_with(|| a.key.cmp(&b.key))
}

/// Order by vertical center, then left edge, then key.
///
/// Used after a group move: a dragged item is ranked by where its body now
/// sits rather than by a stale top edge, so dragging a tall item downward
/// past a short neighbour swaps their packing order.
pub fn by_midpoint(a: &GridItem, b: &GridItem) -> Ordering {
    // Doubled centers keep the comparison in integers.
    let center = |item: &GridItem| i64::from(item.y) * 2 + i64::from(item.h);
    center(a)
        .cmp(&center(b))
        .then(a.x.cmp(&b.x))
        .then_with(|| a.key.cmp(&b.key))
}
