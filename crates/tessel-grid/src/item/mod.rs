//! Grid items and per-item bounds repair.

mod repair;
mod types;

pub(crate) use repair::clamp;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;
    use tessel_config::GridConfig;

    fn grid() -> GridConfig {
        GridConfig::default()
    }

    #[test]
    fn fitting_item_is_borrowed() {
        let item = GridItem::new("a", 2, 3, 4, 2);
        assert!(matches!(item.repair(&grid()), Cow::Borrowed(_)));
    }

    #[test]
    fn negative_position_is_floored() {
        let item = GridItem::new("a", -3, -2, 2, 1);
        let fixed = item.repair(&grid());
        assert_eq!(fixed.geometry(), (0, 0, 2, 1));
    }

    #[test]
    fn overflowing_right_edge_is_pulled_back() {
        let item = GridItem::new("a", 11, 0, 3, 1);
        assert_eq!(item.repair(&grid()).geometry(), (9, 0, 3, 1));
    }

    #[test]
    fn width_is_capped_at_column_count() {
        let item = GridItem::new("a", 0, 0, 20, 1);
        assert_eq!(item.repair(&grid()).geometry(), (0, 0, 12, 1));
    }

    #[test]
    fn size_respects_declared_bounds() {
        let item = GridItem::new("a", 0, 0, 1, 9)
            .with_min(2, 1)
            .with_max(None, Some(4));
        assert_eq!(item.repair(&grid()).geometry(), (0, 0, 2, 4));

        let wide = GridItem::new("b", 0, 0, 8, 1).with_max(Some(5), None);
        assert_eq!(wide.repair(&grid()).geometry(), (0, 0, 5, 1));
    }

    #[test]
    fn zero_size_grows_to_one_cell() {
        let item = GridItem::new("a", 0, 0, 0, 0).with_min(0, 0);
        assert_eq!(item.repair(&grid()).geometry(), (0, 0, 1, 1));
    }

    #[test]
    fn inverted_bounds_do_not_panic() {
        let item = GridItem::new("a", 0, 0, 3, 3)
            .with_min(6, 6)
            .with_max(Some(2), Some(2));
        assert_eq!(item.repair(&grid()).geometry(), (0, 0, 2, 2));
    }

    #[test]
    fn repair_keeps_identity_fields() {
        let item = GridItem::new("keep", 40, 0, 2, 1).pinned();
        let fixed = item.repair(&grid()).into_owned();
        assert_eq!(fixed.key.as_str(), "keep");
        assert!(fixed.is_static);
        assert_eq!(fixed.x, 10);
    }

    #[test]
    fn overlap_requires_both_axes() {
        let a = GridItem::new("a", 0, 0, 2, 2);
        assert!(a.overlaps(&GridItem::new("b", 1, 1, 2, 2)));
        assert!(!a.overlaps(&GridItem::new("c", 2, 0, 1, 2)));
        assert!(!a.overlaps(&GridItem::new("d", 0, 2, 2, 1)));
    }

    #[test]
    fn json_uses_camel_case_and_static_flag() {
        let json = r#"{"key":"a","x":1,"y":2,"w":3,"h":4,"maxW":6,"static":true}"#;
        let item: GridItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.geometry(), (1, 2, 3, 4));
        assert_eq!(item.min_w, 1);
        assert_eq!(item.max_w, Some(6));
        assert_eq!(item.max_h, None);
        assert!(item.is_static);

        let out = serde_json::to_string(&item).unwrap();
        assert!(out.contains("\"minW\":1"));
        assert!(!out.contains("maxH"));
    }
}
