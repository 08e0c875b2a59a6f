//! Operators that carry a small amount of state across pulls: the previous
//! element's key, a position counter, or one pending element.
//!
//! None of these buffer more than one element (`chunk_by` holds the group
//! currently being built, which is the output unit itself). `uniq_by` is the
//! exception by contract: it remembers every key it has emitted.

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{require_positive, SeqResult};
use crate::sequence::{Pull, Sequence, Step};

pub(crate) struct DedupOp<'a, T, K, F> {
    input: Sequence<'a, T>,
    key: F,
    last: Option<K>,
}

impl<T, K, F> Pull for DedupOp<'_, T, K, F>
where
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        loop {
            match self.input.pull() {
                Step::Emit(v) => {
                    let k = (self.key)(&v);
                    if self.last.as_ref() != Some(&k) {
                        self.last = Some(k);
                        return Step::Emit(v);
                    }
                }
                Step::Exhausted => return Step::Exhausted,
            }
        }
    }
}

pub(crate) struct ChunkByOp<'a, T, K, F> {
    input: Sequence<'a, T>,
    key: F,
    open: Option<(K, Vec<T>)>,
}

impl<T, K, F> Pull for ChunkByOp<'_, T, K, F>
where
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    type Item = Vec<T>;

    fn pull(&mut self) -> Step<Vec<T>> {
        loop {
            match self.input.pull() {
                Step::Emit(v) => {
                    let k = (self.key)(&v);
                    match self.open.as_mut() {
                        Some((open_key, group)) if *open_key == k => group.push(v),
                        _ => {
                            if let Some((_, closed)) = self.open.replace((k, vec![v])) {
                                return Step::Emit(closed);
                            }
                        }
                    }
                }
                Step::Exhausted => {
                    return self.open.take().map(|(_, group)| group).into();
                }
            }
        }
    }
}

pub(crate) struct MapEveryOp<'a, T, F> {
    input: Sequence<'a, T>,
    nth: usize,
    position: usize,
    f: F,
}

impl<T, F> Pull for MapEveryOp<'_, T, F>
where
    F: FnMut(T) -> T,
{
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        let step = self.input.pull();
        if step.is_exhausted() {
            return step;
        }
        self.position += 1;
        if self.position % self.nth == 0 {
            step.map(&mut self.f)
        } else {
            step
        }
    }
}

pub(crate) struct MapIntersperseOp<'a, T, O, F> {
    input: Sequence<'a, T>,
    sep: O,
    f: F,
    started: bool,
    pending: Option<O>,
}

impl<T, O, F> Pull for MapIntersperseOp<'_, T, O, F>
where
    O: Clone,
    F: FnMut(T) -> O,
{
    type Item = O;

    fn pull(&mut self) -> Step<O> {
        if let Some(next) = self.pending.take() {
            return Step::Emit(next);
        }
        match self.input.pull() {
            Step::Emit(v) => {
                let mapped = (self.f)(v);
                if self.started {
                    self.pending = Some(mapped);
                    Step::Emit(self.sep.clone())
                } else {
                    self.started = true;
                    Step::Emit(mapped)
                }
            }
            Step::Exhausted => Step::Exhausted,
        }
    }
}

pub(crate) struct TakeOp<'a, T> {
    input: Sequence<'a, T>,
    remaining: usize,
}

impl<T> Pull for TakeOp<'_, T> {
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        if self.remaining == 0 {
            return Step::Exhausted;
        }
        let step = self.input.pull();
        if !step.is_exhausted() {
            self.remaining -= 1;
        }
        step
    }
}

pub(crate) struct DropOp<'a, T> {
    input: Sequence<'a, T>,
    to_skip: usize,
}

impl<T> Pull for DropOp<'_, T> {
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        while self.to_skip > 0 {
            if self.input.pull().is_exhausted() {
                return Step::Exhausted;
            }
            self.to_skip -= 1;
        }
        self.input.pull()
    }
}

pub(crate) struct DropWhileOp<'a, T, P> {
    input: Sequence<'a, T>,
    pred: P,
    dropping: bool,
}

impl<T, P> Pull for DropWhileOp<'_, T, P>
where
    P: FnMut(&T) -> bool,
{
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        if !self.dropping {
            return self.input.pull();
        }
        loop {
            match self.input.pull() {
                Step::Emit(v) => {
                    if !(self.pred)(&v) {
                        self.dropping = false;
                        return Step::Emit(v);
                    }
                }
                Step::Exhausted => return Step::Exhausted,
            }
        }
    }
}

pub(crate) struct TakeWhileOp<'a, T, P> {
    input: Sequence<'a, T>,
    pred: P,
    done: bool,
}

impl<T, P> Pull for TakeWhileOp<'_, T, P>
where
    P: FnMut(&T) -> bool,
{
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        if self.done {
            return Step::Exhausted;
        }
        match self.input.pull() {
            Step::Emit(v) if (self.pred)(&v) => Step::Emit(v),
            _ => {
                self.done = true;
                Step::Exhausted
            }
        }
    }
}

pub(crate) struct TakeEveryOp<'a, T> {
    input: Sequence<'a, T>,
    nth: usize,
    position: usize,
}

impl<T> Pull for TakeEveryOp<'_, T> {
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        loop {
            let step = self.input.pull();
            if step.is_exhausted() {
                return step;
            }
            let keep = self.position % self.nth == 0;
            self.position += 1;
            if keep {
                return step;
            }
        }
    }
}

pub(crate) struct ScanOp<'a, T, A, F> {
    input: Sequence<'a, T>,
    acc: Option<A>,
    f: F,
}

impl<T, A, F> Pull for ScanOp<'_, T, A, F>
where
    A: Clone,
    F: FnMut(A, T) -> A,
{
    type Item = A;

    fn pull(&mut self) -> Step<A> {
        let Step::Emit(v) = self.input.pull() else {
            return Step::Exhausted;
        };
        let Some(acc) = self.acc.take() else {
            return Step::Exhausted;
        };
        let next = (self.f)(acc, v);
        self.acc = Some(next.clone());
        Step::Emit(next)
    }
}

pub(crate) struct UniqByOp<'a, T, K, F> {
    input: Sequence<'a, T>,
    key: F,
    seen: HashSet<K>,
}

impl<T, K, F> Pull for UniqByOp<'_, T, K, F>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        loop {
            match self.input.pull() {
                Step::Emit(v) => {
                    if self.seen.insert((self.key)(&v)) {
                        return Step::Emit(v);
                    }
                }
                Step::Exhausted => return Step::Exhausted,
            }
        }
    }
}

pub(crate) struct ZipOp<'a, A, B> {
    left: Sequence<'a, A>,
    right: Sequence<'a, B>,
}

impl<A, B> Pull for ZipOp<'_, A, B> {
    type Item = (A, B);

    fn pull(&mut self) -> Step<(A, B)> {
        let Step::Emit(a) = self.left.pull() else {
            return Step::Exhausted;
        };
        self.right.pull().map(|b| (a, b))
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Drop consecutive duplicates.
    ///
    /// An element is emitted only if it differs (`!=`) from the element emitted
    /// just before it. The first element is always emitted.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let out = from_vec(vec![1, 1, 2, 2, 2, 1, 3]).dedup().to_vec();
    /// assert_eq!(out, vec![1, 2, 1, 3]);
    /// ```
    pub fn dedup(self) -> Self
    where
        T: PartialEq + Clone,
    {
        self.chain("dedup", |input| DedupOp {
            input,
            key: T::clone,
            last: None,
        })
    }

    /// Drop consecutive elements whose `key` equals the key of the element
    /// emitted just before them.
    pub fn dedup_by<K, F>(self, key: F) -> Self
    where
        K: PartialEq + 'a,
        F: FnMut(&T) -> K + 'a,
    {
        self.chain("dedup_by", |input| DedupOp {
            input,
            key,
            last: None,
        })
    }

    /// Group runs of consecutive elements sharing the same `key`.
    ///
    /// A group closes the moment the key changes and is emitted then; the last
    /// group is emitted when the input is exhausted. Groups are never empty.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let out = from_vec(vec![1, 3, 2, 4, 4, 5]).chunk_by(|x| x % 2).to_vec();
    /// assert_eq!(out, vec![vec![1, 3], vec![2, 4, 4], vec![5]]);
    /// ```
    pub fn chunk_by<K, F>(self, key: F) -> Sequence<'a, Vec<T>>
    where
        K: PartialEq + 'a,
        F: FnMut(&T) -> K + 'a,
    {
        self.chain("chunk_by", |input| ChunkByOp {
            input,
            key,
            open: None,
        })
    }

    /// Apply `f` to the `nth`, `2*nth`, ... element (1-indexed); all other
    /// elements pass through unchanged.
    ///
    /// # Errors
    /// [`SeqError::InvalidArgument`](crate::SeqError::InvalidArgument) when
    /// `nth == 0`.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let out = from_iter(1..=6).map_every(3, |x| x * 10)?.to_vec();
    /// assert_eq!(out, vec![1, 2, 30, 4, 5, 60]);
    /// # Ok::<_, ironseq::SeqError>(())
    /// ```
    pub fn map_every<F>(self, nth: usize, f: F) -> SeqResult<Self>
    where
        F: FnMut(T) -> T + 'a,
    {
        let nth = require_positive("map_every", "nth", nth)?;
        Ok(self.chain("map_every", |input| MapEveryOp {
            input,
            nth,
            position: 0,
            f,
        }))
    }

    /// Emit `sep` between consecutive elements.
    ///
    /// The separator is only emitted once the element that follows it has been
    /// pulled, so no trailing separator ever appears.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// assert_eq!(from_vec(vec![1, 2, 3]).intersperse(0).to_vec(), vec![1, 0, 2, 0, 3]);
    /// ```
    pub fn intersperse(self, sep: T) -> Self
    where
        T: Clone,
    {
        self.chain("intersperse", |input| MapIntersperseOp {
            input,
            sep,
            f: |t: T| t,
            started: false,
            pending: None,
        })
    }

    /// Map every element with `f` and emit `sep` between the results, in a
    /// single pass.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let out = from_vec(vec![1, 2, 3])
    ///     .map_intersperse(", ".to_string(), |x| x.to_string())
    ///     .to_vec()
    ///     .concat();
    /// assert_eq!(out, "1, 2, 3");
    /// ```
    pub fn map_intersperse<O, F>(self, sep: O, f: F) -> Sequence<'a, O>
    where
        O: Clone + 'a,
        F: FnMut(T) -> O + 'a,
    {
        self.chain("map_intersperse", |input| MapIntersperseOp {
            input,
            sep,
            f,
            started: false,
            pending: None,
        })
    }

    /// Emit the first `n` elements, then stop pulling upstream.
    ///
    /// `take(0)` never pulls its input.
    pub fn take(self, n: usize) -> Self {
        self.chain("take", |input| TakeOp {
            input,
            remaining: n,
        })
    }

    /// Discard the first `n` elements and emit the rest.
    ///
    /// The discarded elements are pulled on the first request, not at
    /// construction.
    pub fn drop(self, n: usize) -> Self {
        self.chain("drop", |input| DropOp { input, to_skip: n })
    }

    /// Discard the leading run of elements for which `pred` holds, then emit
    /// everything else unconditionally.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let out = from_vec(vec![1, 2, 5, 1, 2]).drop_while(|x| *x < 3).to_vec();
    /// assert_eq!(out, vec![5, 1, 2]);
    /// ```
    pub fn drop_while<P>(self, pred: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.chain("drop_while", |input| DropWhileOp {
            input,
            pred,
            dropping: true,
        })
    }

    /// Emit the leading run of elements for which `pred` holds.
    ///
    /// The first failing element is consumed and discarded; nothing after it
    /// is pulled.
    pub fn take_while<P>(self, pred: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.chain("take_while", |input| TakeWhileOp {
            input,
            pred,
            done: false,
        })
    }

    /// Emit the 1st, `(nth+1)`-th, `(2*nth+1)`-th, ... elements.
    ///
    /// This keeps exactly the elements [`drop_every`](Self::drop_every)
    /// removes.
    ///
    /// # Errors
    /// [`SeqError::InvalidArgument`](crate::SeqError::InvalidArgument) when
    /// `nth == 0`.
    pub fn take_every(self, nth: usize) -> SeqResult<Self> {
        let nth = require_positive("take_every", "nth", nth)?;
        Ok(self.chain("take_every", |input| TakeEveryOp {
            input,
            nth,
            position: 0,
        }))
    }

    /// Pair each element with its 0-based position.
    pub fn with_index(self) -> Sequence<'a, (usize, T)> {
        let mut index = 0usize;
        self.chain("with_index", |input| super::stateless::MapOp {
            input,
            f: move |t: T| {
                let i = index;
                index += 1;
                (i, t)
            },
        })
    }

    /// Emit every intermediate accumulator of a left fold.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let out = from_iter(1..=4).scan(0, |acc, x| acc + x).to_vec();
    /// assert_eq!(out, vec![1, 3, 6, 10]);
    /// ```
    pub fn scan<A, F>(self, init: A, f: F) -> Sequence<'a, A>
    where
        A: Clone + 'a,
        F: FnMut(A, T) -> A + 'a,
    {
        self.chain("scan", |input| ScanOp {
            input,
            acc: Some(init),
            f,
        })
    }

    /// Emit only the first occurrence of each distinct element.
    pub fn uniq(self) -> Self
    where
        T: Eq + Hash + Clone,
    {
        self.chain("uniq", |input| UniqByOp {
            input,
            key: T::clone,
            seen: HashSet::new(),
        })
    }

    /// Emit only the first element for each distinct `key`.
    ///
    /// Unlike [`dedup_by`](Self::dedup_by), this remembers every key seen so
    /// far, so memory grows with the number of distinct keys.
    pub fn uniq_by<K, F>(self, key: F) -> Self
    where
        K: Eq + Hash + 'a,
        F: FnMut(&T) -> K + 'a,
    {
        self.chain("uniq_by", |input| UniqByOp {
            input,
            key,
            seen: HashSet::new(),
        })
    }

    /// Pair elements of `self` and `other` until either runs out.
    ///
    /// `self` is pulled first; once it is exhausted `other` is not pulled
    /// again.
    pub fn zip<U: 'a>(self, other: Sequence<'a, U>) -> Sequence<'a, (T, U)> {
        self.chain("zip", |left| ZipOp { left, right: other })
    }
}
