pub(crate) mod stdlib;

// Only re-export files with top-level functions
pub use stdlib::*;
