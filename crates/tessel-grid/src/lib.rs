pub mod compact;
pub mod drag;
pub mod edit;
pub mod handles;
pub mod item;
pub mod layout;
pub mod metrics;
pub mod order;
pub mod session;

pub use compact::{compact, compact_by_midpoint, compact_with};
pub use drag::drag;
pub use edit::{move_selection, resize_item, resized_geometry};
pub use handles::classify_handle;
pub use item::GridItem;
pub use layout::{
    check_layout, find_item, layout_bottom, validate_keys, Changed, LayoutUpdate, Selection,
    Violation,
};
pub use metrics::{grid_delta, GridDelta, GridMetrics};
pub use order::{by_midpoint, by_top_left};
pub use session::{DragSession, Gesture};
