//! Count-based chunking over a [`WindowSet`].
//!
//! - [`Sequence::chunk_every`] -- tiling chunks of `count`.
//! - [`Sequence::chunk_every_step`] -- overlapping (`step < count`), tiling
//!   (`step == count`) or skipping (`step > count`) chunks.
//! - [`Sequence::chunk_every_with`] -- the same, configured by [`ChunkEvery`].
//! - [`Sequence::drop_every`] -- remove the first element of every `n`-chunk.
//!
//! All of these validate their arguments when the chain is built, before any
//! element is pulled.

use crate::error::{require_positive, SeqResult};
use crate::sequence::{Pull, Sequence, Step};
use crate::window::{ChunkEvery, Leftover, WindowSet};

pub(crate) struct ChunkEveryOp<'a, T> {
    input: Sequence<'a, T>,
    windows: WindowSet<T>,
    leftover: Leftover,
    draining: bool,
}

impl<T: Clone> Pull for ChunkEveryOp<'_, T> {
    type Item = Vec<T>;

    fn pull(&mut self) -> Step<Vec<T>> {
        while !self.draining {
            match self.input.pull() {
                Step::Emit(v) => {
                    if let Some(full) = self.windows.push(v) {
                        return Step::Emit(full);
                    }
                }
                Step::Exhausted => self.draining = true,
            }
        }
        match self.leftover {
            Leftover::Emit => self.windows.drain_partial().into(),
            Leftover::Discard => Step::Exhausted,
        }
    }
}

pub(crate) struct DropEveryOp<'a, T> {
    input: Sequence<'a, T>,
    n: usize,
    position: usize,
}

impl<T> Pull for DropEveryOp<'_, T> {
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        loop {
            let step = self.input.pull();
            if step.is_exhausted() {
                return step;
            }
            let head = self.position % self.n == 0;
            self.position += 1;
            if !head {
                return step;
            }
        }
    }
}

impl<'a, T: Clone + 'a> Sequence<'a, T> {
    /// Split into consecutive chunks of `count` elements. The last chunk may be
    /// shorter.
    ///
    /// # Errors
    /// [`SeqError::InvalidArgument`](crate::SeqError::InvalidArgument) when
    /// `count == 0`.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let out = from_iter(1..=5).chunk_every(2)?.to_vec();
    /// assert_eq!(out, vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// # Ok::<_, ironseq::SeqError>(())
    /// ```
    pub fn chunk_every(self, count: usize) -> SeqResult<Sequence<'a, Vec<T>>> {
        self.chunk_every_with(ChunkEvery::new(count))
    }

    /// Emit a chunk of `count` elements starting at every `step`-th element.
    ///
    /// A new window opens every `step` elements, including the first, and each
    /// open window collects incoming elements until it holds `count`. Full
    /// windows are emitted oldest first. Windows still open when the input runs
    /// out are emitted as they are, oldest first.
    ///
    /// # Errors
    /// [`SeqError::InvalidArgument`](crate::SeqError::InvalidArgument) when
    /// `count` or `step` is zero.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let out = from_iter(1..=5).chunk_every_step(2, 1)?.to_vec();
    /// assert_eq!(out, vec![vec![1, 2], vec![2, 3], vec![3, 4], vec![4, 5], vec![5]]);
    /// # Ok::<_, ironseq::SeqError>(())
    /// ```
    pub fn chunk_every_step(self, count: usize, step: usize) -> SeqResult<Sequence<'a, Vec<T>>> {
        self.chunk_every_with(ChunkEvery::new(count).step(step))
    }

    /// [`chunk_every_step`](Self::chunk_every_step) configured by `opts`,
    /// which also decides what happens to partial trailing windows.
    pub fn chunk_every_with(self, opts: ChunkEvery) -> SeqResult<Sequence<'a, Vec<T>>> {
        opts.validate()?;
        let windows = WindowSet::from_options(&opts);
        Ok(self.chain("chunk_every", |input| ChunkEveryOp {
            input,
            windows,
            leftover: opts.leftover,
            draining: false,
        }))
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Remove the 1st, `(n+1)`-th, `(2n+1)`-th, ... elements.
    ///
    /// Equivalent to chunking into tiles of `n`, dropping the head of each
    /// tile and concatenating the rest, but only a position counter is kept.
    ///
    /// # Errors
    /// [`SeqError::InvalidArgument`](crate::SeqError::InvalidArgument) when
    /// `n == 0`.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let out = from_iter(1..=6).drop_every(3)?.to_vec();
    /// assert_eq!(out, vec![2, 3, 5, 6]);
    /// # Ok::<_, ironseq::SeqError>(())
    /// ```
    pub fn drop_every(self, n: usize) -> SeqResult<Self> {
        let n = require_positive("drop_every", "n", n)?;
        Ok(self.chain("drop_every", |input| DropEveryOp {
            input,
            n,
            position: 0,
        }))
    }
}
