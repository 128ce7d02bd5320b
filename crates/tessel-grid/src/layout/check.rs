//! Invariant checking for whole layouts.
//!
//! The engine never validates at call time; these checks back the tests
//! and the `check` command.

use std::collections::HashSet;
use std::fmt;

use tessel_common::{ItemKey, LayoutError};
use tessel_config::GridConfig;

use crate::compact::compact;
use crate::item::GridItem;

/// A broken layout invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Position or size falls outside the grid or the item's own bounds.
    OutOfBounds(ItemKey),
    /// Two items intersect and at least one of them is movable.
    Overlap(ItemKey, ItemKey),
    /// A movable item could float higher than it sits.
    Displaced(ItemKey),
    DuplicateKey(ItemKey),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::OutOfBounds(key) => write!(f, "{key}: outside grid or size bounds"),
            Violation::Overlap(a, b) => write!(f, "{a} overlaps {b}"),
            Violation::Displaced(key) => write!(f, "{key}: not compacted"),
            Violation::DuplicateKey(key) => write!(f, "{key}: duplicate key"),
        }
    }
}

/// Report every invariant violation in `layout`.
///
/// Overlaps between two static items are allowed and not reported.
pub fn check_layout(layout: &[GridItem], config: &GridConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut seen = HashSet::new();
    for item in layout {
        if !seen.insert(item.key.as_str()) {
            violations.push(Violation::DuplicateKey(item.key.clone()));
        }
        if !item.repair(config).same_geometry(item) {
            violations.push(Violation::OutOfBounds(item.key.clone()));
        }
    }

    for (i, a) in layout.iter().enumerate() {
        for b in &layout[i + 1..] {
            if !(a.is_static && b.is_static) && a.overlaps(b) {
                violations.push(Violation::Overlap(a.key.clone(), b.key.clone()));
            }
        }
    }

    // Displacement is only meaningful once keys are unique.
    if seen.len() == layout.len() {
        let packed = compact(layout, config);
        for item in packed.iter() {
            let before = layout.iter().find(|original| original.key == item.key);
            if before.is_some_and(|original| !original.is_static && original.y != item.y) {
                violations.push(Violation::Displaced(item.key.clone()));
            }
        }
    }

    violations
}

/// Reject layouts with empty or repeated keys.
pub fn validate_keys(layout: &[GridItem]) -> Result<(), LayoutError> {
    let mut seen = HashSet::new();
    for (index, item) in layout.iter().enumerate() {
        if item.key.is_empty() {
            return Err(LayoutError::EmptyKey(index));
        }
        if !seen.insert(item.key.as_str()) {
            return Err(LayoutError::DuplicateKey(item.key.to_string()));
        }
    }
    Ok(())
}
