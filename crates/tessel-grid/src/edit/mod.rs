//! Layout edits: group moves and single-item resizes.

mod moving;
mod resize;

pub use moving::*;
pub use resize::*;
