//! Short-circuiting consumers.
//!
//! Each method pulls only until the answer is decided and then drops the rest of
//! the chain, so they terminate on infinite sequences whenever a deciding
//! element exists.

use crate::error::{SeqError, SeqResult};
use crate::sequence::{Pull, Sequence, Step};

impl<'a, T: 'a> Sequence<'a, T> {
    /// `true` at the first element satisfying `pred`; `false` for an exhausted
    /// sequence.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// // stops at 7 even though the source is infinite
    /// assert!(from_iter(0..).any(|x| *x == 7));
    /// ```
    pub fn any<P>(mut self, mut pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        while let Step::Emit(v) = self.pull() {
            if pred(&v) {
                return true;
            }
        }
        false
    }

    /// `false` at the first element failing `pred`; `true` for an empty
    /// sequence.
    pub fn all<P>(mut self, mut pred: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        while let Step::Emit(v) = self.pull() {
            if !pred(&v) {
                return false;
            }
        }
        true
    }

    /// First element satisfying `pred`.
    pub fn find<P>(mut self, mut pred: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        while let Step::Emit(v) = self.pull() {
            if pred(&v) {
                return Some(v);
            }
        }
        None
    }

    /// 0-based position of the first element satisfying `pred`.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// assert_eq!(from_vec(vec!["a", "bb", "ccc"]).find_index(|s| s.len() > 1), Some(1));
    /// ```
    pub fn find_index<P>(mut self, mut pred: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        let mut index = 0;
        while let Step::Emit(v) = self.pull() {
            if pred(&v) {
                return Some(index);
            }
            index += 1;
        }
        None
    }

    /// First `Some` returned by `f`.
    pub fn find_value<O, F>(mut self, mut f: F) -> Option<O>
    where
        F: FnMut(T) -> Option<O>,
    {
        while let Step::Emit(v) = self.pull() {
            if let Some(out) = f(v) {
                return Some(out);
            }
        }
        None
    }

    /// `true` if some element equals `value`.
    pub fn member(self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.any(|v| v == value)
    }

    /// Element at 0-based index `n`, pulling exactly `n + 1` elements when they
    /// exist.
    pub fn at(self, n: usize) -> Option<T> {
        self.drop(n).pull().into_option()
    }

    /// Element at index `n`, or `default` when the sequence is shorter.
    pub fn at_or(self, n: usize, default: T) -> T {
        self.at(n).unwrap_or(default)
    }

    /// Element at index `n` for callers that require one.
    ///
    /// # Errors
    /// [`SeqError::EmptySequence`] when the sequence ends before index `n`.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// assert_eq!(from_vec(vec![1, 2]).fetch(1), Ok(2));
    /// assert!(from_vec(vec![1, 2]).fetch(2).is_err());
    /// ```
    pub fn fetch(self, n: usize) -> SeqResult<T> {
        self.at(n).ok_or_else(|| {
            tracing::debug!(op = "fetch", index = n, "sequence ended before index");
            SeqError::EmptySequence { op: "fetch" }
        })
    }

    /// Number of elements satisfying `pred`. Drains the sequence.
    pub fn count_by<P>(self, mut pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.fold(0, |n, v| if pred(&v) { n + 1 } else { n })
    }

    /// Call `f` on every element, in order.
    pub fn for_each<F>(mut self, mut f: F)
    where
        F: FnMut(T),
    {
        while let Step::Emit(v) = self.pull() {
            f(v);
        }
    }
}
