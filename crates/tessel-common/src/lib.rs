pub mod errors;
pub mod types;

pub use errors::{ConfigError, LayoutError, TesselError};
pub use types::{ItemKey, Point, Rect, ResizeHandle};

pub type Result<T> = std::result::Result<T, TesselError>;
