//! The pull protocol and the [`Sequence`] handle every operator is built on.
//!
//! A [`Sequence`] is a single-pass, ordered, possibly-infinite producer. Each
//! operator owns exactly one upstream sequence and is driven by exactly one
//! consumer: asking for an element calls [`Pull::pull`], which answers with
//! [`Step::Emit`] or [`Step::Exhausted`]. Nothing is pulled until a consumer asks.
//!
//! The handle is fused: once its operator reports exhaustion the whole upstream
//! chain is dropped, and every later pull answers [`Step::Exhausted`] without
//! touching the source again.
//!
//! ```
//! use ironseq::*;
//!
//! let mut seq = from_vec(vec![1, 2, 3]).map(|x| x * 10);
//! assert_eq!(seq.pull(), Step::Emit(10));
//! assert_eq!(seq.explain(), "from_vec -> map");
//! assert_eq!(seq.to_vec(), vec![20, 30]);
//! ```

use std::fmt;
use std::iter::FusedIterator;

/// The answer to a single pull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step<T> {
    /// The next element.
    Emit(T),
    /// No element now and none later.
    Exhausted,
}

impl<T> Step<T> {
    /// Transform the emitted element, if any.
    #[inline]
    pub fn map<O, F>(self, f: F) -> Step<O>
    where
        F: FnOnce(T) -> O,
    {
        match self {
            Step::Emit(v) => Step::Emit(f(v)),
            Step::Exhausted => Step::Exhausted,
        }
    }

    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Step::Exhausted)
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Step::Emit(v) => Some(v),
            Step::Exhausted => None,
        }
    }
}

impl<T> From<Option<T>> for Step<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Step::Exhausted, Step::Emit)
    }
}

impl<T> From<Step<T>> for Option<T> {
    #[inline]
    fn from(step: Step<T>) -> Self {
        step.into_option()
    }
}

/// The pull contract shared by sources and operators.
///
/// Implementations must pull their own upstream only as often as needed to
/// answer one request. They do not have to be fused; [`Sequence`] takes care of
/// that.
pub trait Pull {
    type Item;

    fn pull(&mut self) -> Step<Self::Item>;
}

/// Adapts any [`Iterator`] to the pull contract.
pub(crate) struct IterSource<I>(pub(crate) I);

impl<I: Iterator> Pull for IterSource<I> {
    type Item = I::Item;

    #[inline]
    fn pull(&mut self) -> Step<I::Item> {
        self.0.next().into()
    }
}

/// A lazy, single-pass, ordered sequence of `T`.
///
/// Operators consume the handle by value and return a new one, so chains never
/// share a stage. `'a` bounds whatever the chain borrows (closures may capture
/// references).
pub struct Sequence<'a, T> {
    inner: Option<Box<dyn Pull<Item = T> + 'a>>,
    lineage: Vec<&'static str>,
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Wrap a root [`Pull`] implementation, recording `name` as the first
    /// entry of the lineage.
    pub fn from_pull<P>(name: &'static str, source: P) -> Self
    where
        P: Pull<Item = T> + 'a,
    {
        Self {
            inner: Some(Box::new(source)),
            lineage: vec![name],
        }
    }

    /// Hand this sequence to an operator built by `build`, producing the next
    /// stage of the chain.
    pub(crate) fn chain<O, P, B>(mut self, name: &'static str, build: B) -> Sequence<'a, O>
    where
        O: 'a,
        P: Pull<Item = O> + 'a,
        B: FnOnce(Self) -> P,
    {
        let mut lineage = std::mem::take(&mut self.lineage);
        lineage.push(name);
        Sequence {
            inner: Some(Box::new(build(self))),
            lineage,
        }
    }

    /// Rename the newest lineage entry, for operators composed from others.
    pub(crate) fn relabel(mut self, name: &'static str) -> Self {
        if let Some(last) = self.lineage.last_mut() {
            *last = name;
        }
        self
    }

    /// `true` once exhaustion has been observed by a pull.
    ///
    /// A fresh sequence over an empty source is not known to be exhausted
    /// until it is pulled.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.inner.is_none()
    }

    /// Operator names from the source to this stage.
    #[must_use]
    pub fn lineage(&self) -> &[&'static str] {
        &self.lineage
    }

    /// Render the lineage as `source -> op -> op`.
    #[must_use]
    pub fn explain(&self) -> String {
        self.lineage.join(" -> ")
    }

    /// Drain the sequence into a `Vec`, in emission order.
    ///
    /// Never returns for an infinite sequence.
    pub fn to_vec(self) -> Vec<T> {
        self.collect()
    }
}

impl<T> Pull for Sequence<'_, T> {
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        let Some(inner) = self.inner.as_mut() else {
            return Step::Exhausted;
        };
        let step = inner.pull();
        if step.is_exhausted() {
            // release the upstream chain; later pulls never reach it
            self.inner = None;
        }
        step
    }
}

impl<T> Iterator for Sequence<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.pull().into_option()
    }
}

impl<T> FusedIterator for Sequence<'_, T> {}

impl<'a, T: 'a> Default for Sequence<'a, T> {
    fn default() -> Self {
        crate::helpers::empty()
    }
}

impl<T> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("lineage", &self.lineage)
            .field("exhausted", &self.inner.is_none())
            .finish()
    }
}
