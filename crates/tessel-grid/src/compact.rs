//! Compaction: gravity packing against a per-column tide.
//!
//! Items are sorted, repaired, and walked once. `tide[c]` holds the first
//! free row of column `c`; a movable item settles at the highest tide over
//! its columns and is then pushed below any static obstacle it would hit.
//! Static items never move but raise the tide like any other item.
//!
//! Obstacle scans run over a row-sorted array of static items starting at a
//! cursor past the statics already walked. A push restarts the scan from
//! the cursor, so the per-item cost is bounded by the number of statics.
//! Overlap between two static items is left as-is.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::ops::Range;

use tessel_config::GridConfig;
use tracing::debug;

use crate::item::GridItem;
use crate::layout::LayoutUpdate;
use crate::order::{by_midpoint, by_top_left};

/// Compact with the default top-left order.
pub fn compact<'a>(layout: &'a [GridItem], config: &GridConfig) -> LayoutUpdate<'a> {
    compact_with(layout, config, by_top_left)
}

/// Compact with the midpoint order used after group moves.
pub fn compact_by_midpoint<'a>(layout: &'a [GridItem], config: &GridConfig) -> LayoutUpdate<'a> {
    compact_with(layout, config, by_midpoint)
}

/// Compact `layout` using `compare` as the packing order.
///
/// Returns `Cow::Borrowed(layout)` when every item is already in place;
/// otherwise the items in packing order with positions resolved.
pub fn compact_with<'a, F>(layout: &'a [GridItem], config: &GridConfig, compare: F) -> LayoutUpdate<'a>
where
    F: Fn(&GridItem, &GridItem) -> Ordering,
{
    let mut sorted: Vec<&GridItem> = layout.iter().collect();
    sorted.sort_by(|a, b| compare(a, b));

    let repaired: Vec<Cow<'_, GridItem>> = sorted.iter().map(|item| item.repair(config)).collect();

    // Statics in row order, plus each walked item's slot in that order.
    let mut obstacles: Vec<usize> = (0..repaired.len())
        .filter(|&i| repaired[i].is_static)
        .collect();
    obstacles.sort_by(|&a, &b| by_top_left(&repaired[a], &repaired[b]));
    let mut slot_of = vec![None; repaired.len()];
    for (slot, &index) in obstacles.iter().enumerate() {
        slot_of[index] = Some(slot);
    }
    let obstacles: Vec<&GridItem> = obstacles.iter().map(|&i| &*repaired[i]).collect();

    let columns = config.column_count() as usize;
    let mut tide = vec![0i32; columns];
    let mut visited = vec![false; obstacles.len()];
    let mut cursor = 0usize;
    let mut packed: Option<Vec<GridItem>> = None;

    for (index, item) in repaired.iter().enumerate() {
        let mut changed = matches!(item, Cow::Owned(_));
        let mut y = item.y;

        if let Some(slot) = slot_of[index] {
            visited[slot] = true;
            while cursor < visited.len() && visited[cursor] {
                cursor += 1;
            }
        } else {
            y = settle(item, &tide, &obstacles[cursor..]);
            changed |= y != item.y;
        }

        let span = column_span(item, columns);
        let bottom = y.saturating_add(item.h);
        for level in &mut tide[span] {
            *level = (*level).max(bottom);
        }

        if changed && packed.is_none() {
            packed = Some(sorted[..index].iter().map(|&done| done.clone()).collect());
        }
        if let Some(items) = packed.as_mut() {
            let mut placed = (**item).clone();
            placed.y = y;
            items.push(placed);
        }
    }

    match packed {
        Some(items) => Cow::Owned(items),
        None => Cow::Borrowed(layout),
    }
}

/// Compact an already-owned layout, reusing it when nothing moves.
pub(crate) fn compact_owned<F>(items: Vec<GridItem>, config: &GridConfig, compare: F) -> Vec<GridItem>
where
    F: Fn(&GridItem, &GridItem) -> Ordering,
{
    let packed = match compact_with(&items, config, compare) {
        Cow::Owned(packed) => Some(packed),
        Cow::Borrowed(_) => None,
    };
    packed.unwrap_or(items)
}

/// Row at which a movable `item` comes to rest.
fn settle(item: &GridItem, tide: &[i32], obstacles: &[&GridItem]) -> i32 {
    let span = column_span(item, tide.len());
    let gap = tide[span]
        .iter()
        .map(|&level| item.y - level)
        .min()
        .unwrap_or(0);
    let mut y = item.y - gap;

    let mut i = 0;
    while i < obstacles.len() {
        let obstacle = obstacles[i];
        let bottom = y.saturating_add(item.h);
        if obstacle.y >= bottom {
            break;
        }
        if obstacle.shares_columns(item) && obstacle.y < bottom && y < obstacle.bottom() {
            debug!(
                item = %item.key,
                obstacle = %obstacle.key,
                from = y,
                to = obstacle.bottom(),
                "pushed below static item"
            );
            y = obstacle.bottom();
            i = 0;
            continue;
        }
        i += 1;
    }
    y
}

/// Columns occupied by a repaired item, as tide indices.
fn column_span(item: &GridItem, columns: usize) -> Range<usize> {
    let start = usize::try_from(item.x).unwrap_or(0).min(columns);
    let end = usize::try_from(item.right()).unwrap_or(0).min(columns);
    start..end.max(start)
}
