mod core;
mod handle;

pub use self::core::*;
pub use handle::*;
