//! Count-based windows for the chunking operators.
//!
//! A [`WindowSet`] is the ordered arena of in-flight windows behind
//! [`Sequence::chunk_every`](crate::Sequence::chunk_every). A new window opens
//! every `step` elements (the first element included), every open window
//! receives each incoming element until it holds `count` of them, and full
//! windows leave the set oldest first.
//!
//! At most `ceil(count / step)` windows are ever open at once.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::error::{require_positive, SeqResult};

/// What to do with windows that never filled when the input runs out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Leftover {
    /// Emit every partial window as-is, oldest first.
    #[default]
    Emit,
    /// Drop partial windows.
    Discard,
}

/// Options for [`Sequence::chunk_every_with`](crate::Sequence::chunk_every_with).
///
/// `step` defaults to `count` (tiling chunks) and `leftover` to
/// [`Leftover::Emit`].
///
/// ```
/// use ironseq::*;
///
/// let opts = ChunkEvery::new(3).step(2).leftover(Leftover::Discard);
/// let out = from_iter(1..=6).chunk_every_with(opts)?.to_vec();
/// assert_eq!(out, vec![vec![1, 2, 3], vec![3, 4, 5]]);
/// # Ok::<_, ironseq::SeqError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkEvery {
    pub count: usize,
    pub step: usize,
    #[serde(default)]
    pub leftover: Leftover,
}

impl ChunkEvery {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            step: count,
            leftover: Leftover::Emit,
        }
    }

    #[must_use]
    pub fn step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn leftover(mut self, leftover: Leftover) -> Self {
        self.leftover = leftover;
        self
    }

    /// Reject a zero `count` or `step`.
    pub fn validate(&self) -> SeqResult<()> {
        require_positive("chunk_every", "count", self.count)?;
        require_positive("chunk_every", "step", self.step)?;
        Ok(())
    }

    /// Upper bound on concurrently open windows: `ceil(count / step)`.
    pub fn max_open_windows(&self) -> usize {
        self.count.div_ceil(self.step.max(1))
    }
}

/// One fixed-capacity buffer, opened when the element at `start` arrived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window<T> {
    pub start: usize,
    capacity: usize,
    items: Vec<T>,
}

impl<T> Window<T> {
    fn new(start: usize, capacity: usize) -> Self {
        Self {
            start,
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Ordered set of open windows, oldest at the front.
#[derive(Clone, Debug)]
pub struct WindowSet<T> {
    count: usize,
    step: usize,
    position: usize,
    open: VecDeque<Window<T>>,
}

impl<T: Clone> WindowSet<T> {
    /// Build an empty set for `count`-element windows opening every `step`
    /// elements.
    pub fn new(count: usize, step: usize) -> SeqResult<Self> {
        let opts = ChunkEvery::new(count).step(step);
        opts.validate()?;
        Ok(Self::from_options(&opts))
    }

    pub(crate) fn from_options(opts: &ChunkEvery) -> Self {
        Self {
            count: opts.count,
            step: opts.step,
            position: 0,
            open: VecDeque::with_capacity(opts.max_open_windows()),
        }
    }

    /// Feed one element. Returns the oldest window if this element filled it.
    ///
    /// Elements arriving while no window is open (the gap when
    /// `step > count`) are dropped here.
    pub fn push(&mut self, item: T) -> Option<Vec<T>> {
        if self.position % self.step == 0 {
            self.open.push_back(Window::new(self.position, self.count));
        }
        self.position += 1;

        let newest = self.open.len().checked_sub(1)?;
        for w in self.open.range_mut(..newest) {
            w.items.push(item.clone());
        }
        self.open[newest].items.push(item);

        // windows fill in open order, so only the front can be full
        if self.open.front().is_some_and(Window::is_full) {
            return self.open.pop_front().map(Window::into_items);
        }
        None
    }

    /// Remove the oldest open window regardless of fill level.
    pub fn drain_partial(&mut self) -> Option<Vec<T>> {
        self.open.pop_front().map(Window::into_items)
    }

    pub fn open_windows(&self) -> usize {
        self.open.len()
    }

    /// Number of elements fed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn iter(&self) -> impl Iterator<Item = &Window<T>> {
        self.open.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(set: &mut WindowSet<i32>, items: impl IntoIterator<Item = i32>) -> Vec<Vec<i32>> {
        let mut out: Vec<Vec<i32>> = items.into_iter().filter_map(|i| set.push(i)).collect();
        while let Some(w) = set.drain_partial() {
            out.push(w);
        }
        out
    }

    #[test]
    fn tiling_windows() {
        let mut set = WindowSet::new(2, 2).unwrap();
        assert_eq!(feed(&mut set, 1..=5), vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn overlapping_windows_emit_oldest_first() {
        let mut set = WindowSet::new(3, 1).unwrap();
        assert_eq!(set.push(1), None);
        assert_eq!(set.push(2), None);
        assert_eq!(set.open_windows(), 2);
        assert_eq!(set.push(3), Some(vec![1, 2, 3]));
        assert_eq!(set.push(4), Some(vec![2, 3, 4]));
        assert_eq!(set.drain_partial(), Some(vec![3, 4]));
        assert_eq!(set.drain_partial(), Some(vec![4]));
        assert_eq!(set.drain_partial(), None);
    }

    #[test]
    fn skipping_windows_drop_the_gap() {
        let mut set = WindowSet::new(2, 3).unwrap();
        assert_eq!(feed(&mut set, 1..=8), vec![vec![1, 2], vec![4, 5], vec![7, 8]]);
        assert_eq!(set.position(), 8);
    }

    #[test]
    fn open_windows_never_exceed_bound() {
        for (count, step) in [(5, 2), (4, 4), (3, 7), (6, 1)] {
            let opts = ChunkEvery::new(count).step(step);
            let mut set = WindowSet::<i32>::from_options(&opts);
            for i in 0..50 {
                set.push(i);
                assert!(set.open_windows() <= opts.max_open_windows());
            }
        }
    }

    #[test]
    fn windows_record_their_start() {
        let mut set = WindowSet::new(4, 2).unwrap();
        for i in 0..3 {
            set.push(i);
        }
        let starts: Vec<usize> = set.iter().map(|w| w.start).collect();
        assert_eq!(starts, vec![0, 2]);
        assert_eq!(set.iter().next().map(Window::len), Some(3));
    }

    #[test]
    fn zero_arguments_are_rejected() {
        assert!(WindowSet::<i32>::new(0, 1).is_err());
        assert!(WindowSet::<i32>::new(1, 0).is_err());
        assert!(ChunkEvery::new(0).validate().is_err());
    }

    #[test]
    fn options_round_trip_through_json() {
        let opts: ChunkEvery = serde_json::from_str(r#"{"count":3,"step":1}"#).unwrap();
        assert_eq!(opts, ChunkEvery::new(3).step(1));
        assert_eq!(opts.leftover, Leftover::Emit);
    }
}
