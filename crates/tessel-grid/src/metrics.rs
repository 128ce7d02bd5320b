//! Pixel geometry: grid units to pixels and pointer deltas back to grid units.

use serde::{Deserialize, Serialize};
use tessel_common::{Point, Rect};
use tessel_config::GridConfig;

use crate::item::GridItem;
use crate::layout::layout_bottom;

/// A pointer movement expressed in whole grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridDelta {
    pub dx: i32,
    pub dy: i32,
}

impl GridDelta {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Cell sizes for one container width, resolved once from the config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    pub column_width: f64,
    pub column_gap: f64,
    pub row_height: f64,
    pub row_gap: f64,
}

impl GridMetrics {
    pub fn new(container_width: f64, config: &GridConfig) -> Self {
        let columns = f64::from(config.column_count());
        let column_gap = config.column_gap();
        Self {
            column_width: (container_width - (columns - 1.0) * column_gap) / columns,
            column_gap,
            row_height: config.row_height,
            row_gap: config.row_gap(),
        }
    }

    /// Distance between the left edges of adjacent columns.
    pub fn column_pitch(&self) -> f64 {
        self.column_width + self.column_gap
    }

    /// Distance between the top edges of adjacent rows.
    pub fn row_pitch(&self) -> f64 {
        self.row_height + self.row_gap
    }

    /// Pixel box of `item` relative to the container's top-left corner.
    pub fn item_rect(&self, item: &GridItem) -> Rect {
        Rect {
            x: f64::from(item.x) * self.column_pitch(),
            y: f64::from(item.y) * self.row_pitch(),
            width: span(item.w, self.column_width, self.column_gap),
            height: span(item.h, self.row_height, self.row_gap),
        }
    }

    /// Pixel height needed to show every item; 0 for an empty layout.
    pub fn container_height(&self, layout: &[GridItem]) -> f64 {
        span(layout_bottom(layout), self.row_height, self.row_gap)
    }

    /// Convert a pointer movement from `start` to `end` into grid units,
    /// rounding half away from zero.
    pub fn delta(&self, start: Point, end: Point) -> GridDelta {
        GridDelta {
            dx: to_units(end.x - start.x, self.column_pitch()),
            dy: to_units(end.y - start.y, self.row_pitch()),
        }
    }
}

/// Convert a pointer movement in a container of `container_width` pixels.
pub fn grid_delta(container_width: f64, config: &GridConfig, start: Point, end: Point) -> GridDelta {
    GridMetrics::new(container_width, config).delta(start, end)
}

fn span(cells: i32, size: f64, gap: f64) -> f64 {
    if cells <= 0 {
        return 0.0;
    }
    let cells = f64::from(cells);
    cells * size + (cells - 1.0) * gap
}

fn to_units(pixels: f64, pitch: f64) -> i32 {
    let units = (pixels / pitch).round();
    if units.is_finite() {
        // `as` saturates at the i32 range.
        units as i32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn column_width_without_gaps() {
        let metrics = GridMetrics::new(1200.0, &GridConfig::default());
        assert!(approx(metrics.column_width, 100.0));
    }

    #[test]
    fn column_width_subtracts_gaps() {
        let config = GridConfig {
            gap: 10.0,
            ..GridConfig::default()
        };
        let metrics = GridMetrics::new(1210.0, &config);
        // 1210 - 11 * 10 = 1100 over 12 columns.
        assert!(approx(metrics.column_width, 1100.0 / 12.0));
    }

    #[test]
    fn drag_of_two_and_a_half_columns_rounds_up() {
        let delta = grid_delta(
            1200.0,
            &GridConfig::default(),
            Point::new(10.0, 10.0),
            Point::new(260.0, 10.0),
        );
        assert_eq!(delta, GridDelta::new(3, 0));
    }

    #[test]
    fn negative_half_rounds_away_from_zero() {
        let metrics = GridMetrics::new(1200.0, &GridConfig::default());
        let delta = metrics.delta(Point::new(300.0, 90.0), Point::new(50.0, 45.0));
        // -250px is -2.5 columns; -45px is -1.5 rows of 30px.
        assert_eq!(delta, GridDelta::new(-3, -2));
    }

    #[test]
    fn small_moves_round_to_zero() {
        let metrics = GridMetrics::new(1200.0, &GridConfig::default());
        let delta = metrics.delta(Point::new(0.0, 0.0), Point::new(49.0, 14.0));
        assert!(delta.is_zero());
    }

    #[test]
    fn row_gap_widens_row_pitch() {
        let config = GridConfig {
            row_gap: Some(10.0),
            ..GridConfig::default()
        };
        let delta = grid_delta(1200.0, &config, Point::default(), Point::new(0.0, 80.0));
        assert_eq!(delta.dy, 2);
    }

    #[test]
    fn degenerate_container_yields_zero_delta() {
        let config = GridConfig::default().with_columns(1);
        let delta = grid_delta(0.0, &config, Point::default(), Point::new(500.0, 0.0));
        assert_eq!(delta.dx, 0);

        let flat = GridConfig {
            row_height: 0.0,
            ..GridConfig::default()
        };
        let delta = grid_delta(1200.0, &flat, Point::default(), Point::new(0.0, 0.0));
        assert_eq!(delta.dy, 0);
    }

    #[test]
    fn item_rect_spans_inner_gaps() {
        let config = GridConfig {
            gap: 10.0,
            ..GridConfig::default()
        };
        let metrics = GridMetrics::new(1210.0, &config);
        let rect = metrics.item_rect(&GridItem::new("a", 2, 1, 3, 2));
        let column = 1100.0 / 12.0;
        assert!(approx(rect.x, 2.0 * (column + 10.0)));
        assert!(approx(rect.y, 40.0));
        assert!(approx(rect.width, 3.0 * column + 20.0));
        assert!(approx(rect.height, 70.0));
    }

    #[test]
    fn container_height_tracks_lowest_item() {
        let config = GridConfig {
            gap: 5.0,
            ..GridConfig::default()
        };
        let metrics = GridMetrics::new(600.0, &config);
        let layout = vec![
            GridItem::new("a", 0, 0, 1, 2),
            GridItem::new("b", 1, 1, 1, 3),
        ];
        // Four rows of 30px and three gaps of 5px.
        assert!(approx(metrics.container_height(&layout), 135.0));
        assert_eq!(metrics.container_height(&[]), 0.0);
    }
}
