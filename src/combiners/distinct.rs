//! Distinct value combiners: `DistinctCount`

use super::CombineFn;
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

/// Count of **distinct** values.
///
/// - Accumulator: `HashSet<T>`
/// - Output: `usize`
///
/// Requires `T: Eq + Hash`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DistinctCount<T>(pub PhantomData<T>);
impl<T> DistinctCount<T> {
    /// Convenience constructor (same as `Default`).
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, HashSet<T>, usize> for DistinctCount<T>
where
    T: Eq + Hash,
{
    fn create(&self) -> HashSet<T> {
        HashSet::new()
    }

    fn add_input(&self, acc: &mut HashSet<T>, v: T) {
        acc.insert(v);
    }

    fn finish(&self, acc: HashSet<T>) -> usize {
        acc.len()
    }
}
