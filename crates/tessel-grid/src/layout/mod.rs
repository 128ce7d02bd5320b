//! Layout-level types: update results, selections, and invariant checks.

mod check;
mod selection;

use std::borrow::Cow;

pub use check::*;
pub use selection::*;

use crate::item::GridItem;

/// Result of every layout operation.
///
/// `Cow::Borrowed` hands back the caller's own slice and means nothing
/// changed; `Cow::Owned` is a freshly built replacement. Renderers use the
/// distinction as a dirty flag.
pub type LayoutUpdate<'a> = Cow<'a, [GridItem]>;

/// Dirty-flag accessors for `LayoutUpdate`.
pub trait Changed {
    fn is_changed(&self) -> bool;
}

impl Changed for LayoutUpdate<'_> {
    fn is_changed(&self) -> bool {
        matches!(self, Cow::Owned(_))
    }
}

/// Lowest occupied row boundary: the largest `y + h`, or 0 when empty.
pub fn layout_bottom(layout: &[GridItem]) -> i32 {
    layout.iter().map(GridItem::bottom).max().unwrap_or(0).max(0)
}

/// Find an item by key.
pub fn find_item<'a>(layout: &'a [GridItem], key: &str) -> Option<&'a GridItem> {
    layout.iter().find(|item| item.key.as_str() == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_common::LayoutError;
    use tessel_config::GridConfig;

    fn sample() -> Vec<GridItem> {
        vec![
            GridItem::new("a", 0, 0, 2, 1),
            GridItem::new("b", 2, 0, 1, 3),
            GridItem::new("c", 0, 1, 2, 1),
        ]
    }

    #[test]
    fn bottom_of_empty_layout_is_zero() {
        assert_eq!(layout_bottom(&[]), 0);
        assert_eq!(layout_bottom(&sample()), 3);
    }

    #[test]
    fn find_item_by_key() {
        let layout = sample();
        assert_eq!(find_item(&layout, "b").map(|i| i.h), Some(3));
        assert!(find_item(&layout, "zz").is_none());
    }

    #[test]
    fn changed_reflects_ownership() {
        let layout = sample();
        let same: LayoutUpdate = Cow::Borrowed(layout.as_slice());
        let fresh: LayoutUpdate = Cow::Owned(layout.clone());
        assert!(!same.is_changed());
        assert!(fresh.is_changed());
    }

    // -- Selection --

    #[test]
    fn selection_toggle_and_sole() {
        let mut selection = Selection::new();
        assert!(selection.sole().is_none());
        assert!(selection.toggle("a"));
        assert_eq!(selection.sole().map(|k| k.as_str()), Some("a"));
        assert!(selection.toggle("b"));
        assert!(selection.sole().is_none());
        assert!(!selection.toggle("a"));
        assert_eq!(selection.len(), 1);
        assert!(selection.contains("b"));
    }

    #[test]
    fn selection_from_iter_is_ordered() {
        let selection: Selection = ["c", "a", "b", "a"].into_iter().collect();
        let keys: Vec<_> = selection.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn selection_retain_existing_drops_ghosts() {
        let mut selection: Selection = ["a", "ghost"].into_iter().collect();
        assert!(selection.retain_existing(&sample()));
        assert_eq!(selection, Selection::single("a"));
        assert!(!selection.retain_existing(&sample()));
    }

    // -- Checks --

    #[test]
    fn compacted_layout_has_no_violations() {
        let layout = sample();
        assert!(check_layout(&layout, &GridConfig::default()).is_empty());
    }

    #[test]
    fn check_reports_overlap_and_bounds() {
        let layout = vec![
            GridItem::new("a", 0, 0, 2, 2),
            GridItem::new("b", 1, 1, 2, 1),
            GridItem::new("c", 11, 0, 3, 1),
        ];
        let violations = check_layout(&layout, &GridConfig::default());
        assert!(violations.contains(&Violation::Overlap("a".into(), "b".into())));
        assert!(violations.contains(&Violation::OutOfBounds("c".into())));
    }

    #[test]
    fn check_reports_floating_item() {
        let layout = vec![GridItem::new("a", 0, 4, 1, 1)];
        let violations = check_layout(&layout, &GridConfig::default());
        assert_eq!(violations, vec![Violation::Displaced("a".into())]);
    }

    #[test]
    fn static_items_may_overlap_each_other() {
        let layout = vec![
            GridItem::new("s1", 0, 0, 2, 2).pinned(),
            GridItem::new("s2", 1, 1, 2, 2).pinned(),
        ];
        assert!(check_layout(&layout, &GridConfig::default()).is_empty());
    }

    #[test]
    fn check_reports_duplicates() {
        let layout = vec![GridItem::new("a", 0, 0, 1, 1), GridItem::new("a", 1, 0, 1, 1)];
        let violations = check_layout(&layout, &GridConfig::default());
        assert_eq!(violations, vec![Violation::DuplicateKey("a".into())]);
    }

    #[test]
    fn violation_display() {
        assert_eq!(
            Violation::Overlap("a".into(), "b".into()).to_string(),
            "a overlaps b"
        );
        assert_eq!(Violation::Displaced("x".into()).to_string(), "x: not compacted");
    }

    #[test]
    fn validate_keys_rejects_empty_and_duplicate() {
        assert!(validate_keys(&sample()).is_ok());

        let empty = vec![GridItem::new("", 0, 0, 1, 1)];
        assert!(matches!(validate_keys(&empty), Err(LayoutError::EmptyKey(0))));

        let dup = vec![GridItem::new("a", 0, 0, 1, 1), GridItem::new("a", 1, 0, 1, 1)];
        assert!(matches!(
            validate_keys(&dup),
            Err(LayoutError::DuplicateKey(key)) if key == "a"
        ));
    }
}
