//! Operator families. Each file adds methods to [`Sequence`](crate::Sequence)
//! through its own `impl` block.

pub mod aggregate;
pub mod fallible;
pub mod lookback;
pub mod search;
pub mod stateless;
pub mod windowing;

pub use stateless::concat;
