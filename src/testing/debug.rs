//! Debug utilities for inspecting chains during test execution.
//!
//! The operators here pass elements through unchanged and report what they
//! see as `tracing` events at `DEBUG` level under the `ironseq::debug` target.
//! Install a subscriber in the test (e.g. `tracing-subscriber`) to see them.

use std::fmt::Debug;

use crate::sequence::{Pull, Sequence, Step};

const TARGET: &str = "ironseq::debug";

/// Debug operator that logs elements as they are pulled through.
pub(crate) struct DebugInspectOp<'a, T, F> {
    input: Sequence<'a, T>,
    label: String,
    inspector: F,
    limit: usize,
    seen: usize,
}

impl<T, F> Pull for DebugInspectOp<'_, T, F>
where
    T: Debug,
    F: FnMut(&T),
{
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        let step = self.input.pull();
        match &step {
            Step::Emit(item) => {
                (self.inspector)(item);
                if self.seen < self.limit {
                    tracing::debug!(target: TARGET, label = %self.label, index = self.seen, item = ?item);
                } else if self.seen == self.limit {
                    tracing::debug!(target: TARGET, label = %self.label, "further elements not logged");
                }
                self.seen += 1;
            }
            Step::Exhausted => {
                tracing::debug!(target: TARGET, label = %self.label, total = self.seen, "exhausted");
            }
        }
        step
    }
}

/// Debug operator that logs how many elements passed once the input ends.
pub(crate) struct DebugCountOp<'a, T> {
    input: Sequence<'a, T>,
    label: String,
    seen: usize,
}

impl<T> Pull for DebugCountOp<'_, T> {
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        let step = self.input.pull();
        if step.is_exhausted() {
            tracing::debug!(target: TARGET, label = %self.label, count = self.seen, "count");
        } else {
            self.seen += 1;
        }
        step
    }
}

/// Extension trait adding debug operators to [`Sequence`].
pub trait SequenceDebugExt<'a, T: 'a>: Sized {
    /// Log the first 10 elements pulled through this point, then a marker,
    /// then the total on exhaustion.
    ///
    /// # Example
    ///
    /// ```
    /// use ironseq::*;
    /// use ironseq::testing::SequenceDebugExt;
    ///
    /// let result = from_vec(vec![1, 2, 3])
    ///     .debug_inspect("after source")
    ///     .map(|x| x * 2)
    ///     .debug_inspect("after map")
    ///     .to_vec();
    /// assert_eq!(result, vec![2, 4, 6]);
    /// ```
    fn debug_inspect(self, label: &str) -> Sequence<'a, T>
    where
        T: Debug,
    {
        self.debug_inspect_with(label, |_| {})
    }

    /// Like [`debug_inspect`](Self::debug_inspect), also calling `inspector`
    /// on every element.
    fn debug_inspect_with<F>(self, label: &str, inspector: F) -> Sequence<'a, T>
    where
        T: Debug,
        F: FnMut(&T) + 'a;

    /// Log the number of elements that passed this point once it is
    /// exhausted.
    fn debug_count(self, label: &str) -> Sequence<'a, T>;

    /// Log the first `n` elements only.
    fn debug_sample(self, n: usize, label: &str) -> Sequence<'a, T>
    where
        T: Debug;
}

impl<'a, T: 'a> SequenceDebugExt<'a, T> for Sequence<'a, T> {
    fn debug_inspect_with<F>(self, label: &str, inspector: F) -> Self
    where
        T: Debug,
        F: FnMut(&T) + 'a,
    {
        let label = label.to_string();
        self.chain("debug_inspect", |input| DebugInspectOp {
            input,
            label,
            inspector,
            limit: 10,
            seen: 0,
        })
    }

    fn debug_count(self, label: &str) -> Self {
        let label = label.to_string();
        self.chain("debug_count", |input| DebugCountOp {
            input,
            label,
            seen: 0,
        })
    }

    fn debug_sample(self, n: usize, label: &str) -> Self
    where
        T: Debug,
    {
        let label = label.to_string();
        self.chain("debug_sample", |input| DebugInspectOp {
            input,
            label,
            inspector: |_: &T| {},
            limit: n,
            seen: 0,
        })
    }
}
