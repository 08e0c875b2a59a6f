//! Per-element transforms with no memory of earlier elements.
//!
//! - [`Sequence::map`] -- emit `f(e)` for every `e`.
//! - [`Sequence::filter`] / [`Sequence::reject`] -- keep (or drop) elements
//!   matching a predicate.
//! - [`Sequence::flat_map`] -- emit everything `f(e)` yields, draining it
//!   before the next `e` is pulled.
//! - [`Sequence::flatten`] / [`concat`] -- concatenate inner sequences in
//!   outer order.
//! - [`Sequence::inspect`] -- observe elements without changing them.
//!
//! Each pull of the output pulls the input at most once (`map`, `inspect`) or
//! until a qualifying element appears (`filter`, `reject`, `flat_map`).

use crate::sequence::{Pull, Sequence, Step};

pub(crate) struct MapOp<'a, T, F> {
    pub(crate) input: Sequence<'a, T>,
    pub(crate) f: F,
}

impl<T, O, F> Pull for MapOp<'_, T, F>
where
    F: FnMut(T) -> O,
{
    type Item = O;

    #[inline]
    fn pull(&mut self) -> Step<O> {
        self.input.pull().map(&mut self.f)
    }
}

pub(crate) struct FilterOp<'a, T, P> {
    input: Sequence<'a, T>,
    pred: P,
}

impl<T, P> Pull for FilterOp<'_, T, P>
where
    P: FnMut(&T) -> bool,
{
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        loop {
            match self.input.pull() {
                Step::Emit(v) => {
                    if (self.pred)(&v) {
                        return Step::Emit(v);
                    }
                }
                Step::Exhausted => return Step::Exhausted,
            }
        }
    }
}

pub(crate) struct FlatMapOp<'a, T, F, J> {
    input: Sequence<'a, T>,
    f: F,
    current: Option<J>,
}

impl<T, F, J> Pull for FlatMapOp<'_, T, F, J>
where
    F: FnMut(T) -> J,
    J: Iterator,
{
    type Item = J::Item;

    fn pull(&mut self) -> Step<J::Item> {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(v) = inner.next() {
                    return Step::Emit(v);
                }
                self.current = None;
            }
            match self.input.pull() {
                Step::Emit(t) => self.current = Some((self.f)(t)),
                Step::Exhausted => return Step::Exhausted,
            }
        }
    }
}

pub(crate) struct ConcatOp<O, C> {
    outer: O,
    current: Option<C>,
}

impl<O, C> Pull for ConcatOp<O, C>
where
    O: Iterator,
    O::Item: IntoIterator<IntoIter = C>,
    C: Iterator,
{
    type Item = C::Item;

    fn pull(&mut self) -> Step<C::Item> {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(v) = inner.next() {
                    return Step::Emit(v);
                }
                self.current = None;
            }
            match self.outer.next() {
                Some(next) => self.current = Some(next.into_iter()),
                None => return Step::Exhausted,
            }
        }
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Emit `f(e)` for each element `e`. Length-preserving.
    ///
    /// `f` runs exactly once per element, at the moment that element is pulled
    /// through this stage.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let out = from_vec(vec![1, 2, 3]).map(|x| x * 2).to_vec();
    /// assert_eq!(out, vec![2, 4, 6]);
    /// ```
    pub fn map<O, F>(self, f: F) -> Sequence<'a, O>
    where
        O: 'a,
        F: FnMut(T) -> O + 'a,
    {
        self.chain("map", |input| MapOp { input, f })
    }

    /// Keep the elements for which `pred` returns `true`.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let out = from_iter(1..=6).filter(|x| x % 3 == 0).to_vec();
    /// assert_eq!(out, vec![3, 6]);
    /// ```
    pub fn filter<P>(self, pred: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.chain("filter", |input| FilterOp { input, pred })
    }

    /// Drop the elements for which `pred` returns `true`.
    pub fn reject<P>(self, mut pred: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.chain("reject", |input| FilterOp {
            input,
            pred: move |t: &T| !pred(t),
        })
    }

    /// Emit every element of `f(e)`, in order, for each `e`.
    ///
    /// `f` may return any [`IntoIterator`], including another [`Sequence`].
    /// The inner iterator is drained completely before the next outer element
    /// is pulled.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let out = from_vec(vec![1, 2, 3])
    ///     .flat_map(|n| from_iter(0..n))
    ///     .to_vec();
    /// assert_eq!(out, vec![0, 0, 1, 0, 1, 2]);
    /// ```
    pub fn flat_map<I, F>(self, mut f: F) -> Sequence<'a, I::Item>
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: 'a,
        F: FnMut(T) -> I + 'a,
    {
        self.chain("flat_map", |input| FlatMapOp {
            input,
            f: move |t: T| f(t).into_iter(),
            current: None,
        })
    }

    /// Call `f` on each element as it passes through, then emit it unchanged.
    pub fn inspect<F>(self, mut f: F) -> Self
    where
        F: FnMut(&T) + 'a,
    {
        self.chain("inspect", |input| MapOp {
            input,
            f: move |t: T| {
                f(&t);
                t
            },
        })
    }
}

impl<'a, T: 'a> Sequence<'a, Sequence<'a, T>> {
    /// Concatenate a sequence of sequences, draining each inner one fully
    /// before pulling the next.
    pub fn flatten(self) -> Sequence<'a, T> {
        self.chain("flatten", |outer| ConcatOp {
            outer,
            current: None::<Sequence<'a, T>>,
        })
    }
}

/// Concatenate `seqs` in order, draining each inner sequence before starting
/// the next. The outer collection is itself consumed lazily.
///
/// # Example
/// ```
/// use ironseq::*;
///
/// let joined = concat(vec![from_vec(vec![1, 2]), empty(), from_vec(vec![3])]);
/// assert_eq!(joined.to_vec(), vec![1, 2, 3]);
/// ```
pub fn concat<'a, I>(seqs: I) -> Sequence<'a, <I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::IntoIter: 'a,
    <I::Item as IntoIterator>::Item: 'a,
{
    Sequence::from_pull(
        "concat",
        ConcatOp {
            outer: seqs.into_iter(),
            current: None::<<I::Item as IntoIterator>::IntoIter>,
        },
    )
}
