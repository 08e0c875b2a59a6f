//! Built-in combiners for [`Sequence::combine`](crate::Sequence::combine).
//!
//! A combiner describes a fold in three steps: build an empty accumulator,
//! absorb elements one at a time, and turn the accumulator into the result.
//! Evaluation is sequential, so there is no merge step.
//!
//! - [`Sum<T>`] -- sum of values.
//! - [`Product<T>`] -- product of values.
//! - [`Count`] -- number of values.
//! - [`AverageF64`] -- average as `f64` (values convertible to `f64`).
//! - [`DistinctCount<T>`] -- number of distinct values.
//! - [`PriorityReservoir<T>`] -- seeded uniform sample of `k` values.
//!
//! # Examples
//! ```
//! use ironseq::*;
//! use ironseq::combiners::{AverageF64, DistinctCount, PriorityReservoir};
//!
//! let avg = from_vec(vec![1u32, 2, 3]).combine(AverageF64);
//! assert_eq!(avg, 2.0);
//!
//! let dc = from_vec(vec![1, 1, 2]).combine(DistinctCount::new());
//! assert_eq!(dc, 2);
//!
//! let sample = from_iter(0..100).combine(PriorityReservoir::new(5, 42));
//! assert_eq!(sample.len(), 5);
//! ```

mod basic;
mod distinct;
mod sampling;
mod statistical;

pub use basic::{Count, Product, Sum};
pub use distinct::DistinctCount;
pub(crate) use sampling::SplitMix64;
pub use sampling::{PRAcc, PriorityReservoir};
pub use statistical::{AverageF64, MeanAcc};

/// A fold described by its accumulator `A`.
///
/// `V` is the input element type and `O` the result.
pub trait CombineFn<V, A, O> {
    fn create(&self) -> A;
    fn add_input(&self, acc: &mut A, v: V);
    fn finish(&self, acc: A) -> O;
}
