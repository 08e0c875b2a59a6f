//! Source constructors for [`Sequence`]s.
//!
//! The element producer is outside the library's concern: anything that can
//! answer "next element or exhausted" will do. These helpers adapt the usual
//! Rust shapes of a producer.
//!
//! ### Overview
//! - [`from_vec`] -- owns a `Vec<T>` and yields it front to back.
//! - [`from_iter`] -- wraps any `IntoIterator` without collecting it first.
//! - [`from_fn`] -- calls a closure per pull; `None` ends the sequence.
//! - [`from_source`] -- wraps a custom [`Pull`] implementation.
//! - [`iterate`], [`repeat`] -- infinite sources.
//! - [`once`], [`empty`] -- trivial sources.
//!
//! ### Example
//! ```
//! use ironseq::*;
//!
//! let evens = from_iter(0..).filter(|x| x % 2 == 0).take(3);
//! assert_eq!(evens.to_vec(), vec![0, 2, 4]);
//!
//! let powers = iterate(1u32, |x| x * 2).take(5);
//! assert_eq!(powers.to_vec(), vec![1, 2, 4, 8, 16]);
//! ```

use crate::sequence::{IterSource, Pull, Sequence, Step};

/// Create a [`Sequence<T>`] that yields the elements of `data` in order.
///
/// ### Example
/// ```
/// use ironseq::*;
///
/// let seq = from_vec(vec![10, 20, 30]);
/// assert_eq!(seq.to_vec(), vec![10, 20, 30]);
/// ```
pub fn from_vec<'a, T: 'a>(data: Vec<T>) -> Sequence<'a, T> {
    Sequence::from_pull("from_vec", IterSource(data.into_iter()))
}

/// Create a [`Sequence`] from anything implementing [`IntoIterator`].
///
/// The iterator is not drained up front; each pull advances it by one, so
/// infinite iterators such as `0..` are fine.
pub fn from_iter<'a, I>(iter: I) -> Sequence<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    Sequence::from_pull("from_iter", IterSource(iter.into_iter()))
}

/// Create a [`Sequence`] that calls `f` on every pull until it returns `None`.
///
/// ### Example
/// ```
/// use ironseq::*;
///
/// let mut n = 0;
/// let seq = from_fn(move || {
///     n += 1;
///     (n <= 3).then_some(n)
/// });
/// assert_eq!(seq.to_vec(), vec![1, 2, 3]);
/// ```
pub fn from_fn<'a, T, F>(f: F) -> Sequence<'a, T>
where
    T: 'a,
    F: FnMut() -> Option<T> + 'a,
{
    Sequence::from_pull("from_fn", FnSource(f))
}

/// Create a [`Sequence`] over a custom [`Pull`] implementation.
///
/// This is the extension point for producers that are neither iterators nor
/// closures, e.g. a cursor that owns a buffer or a hand-written state machine.
///
/// ### Example
/// ```
/// use ironseq::*;
///
/// struct Countdown(u32);
///
/// impl Pull for Countdown {
///     type Item = u32;
///     fn pull(&mut self) -> Step<u32> {
///         if self.0 == 0 {
///             return Step::Exhausted;
///         }
///         self.0 -= 1;
///         Step::Emit(self.0)
///     }
/// }
///
/// assert_eq!(from_source(Countdown(3)).to_vec(), vec![2, 1, 0]);
/// ```
pub fn from_source<'a, P>(source: P) -> Sequence<'a, P::Item>
where
    P: Pull + 'a,
    P::Item: 'a,
{
    Sequence::from_pull("from_source", source)
}

/// Infinite sequence `seed, f(seed), f(f(seed)), ...`.
///
/// `f` runs lazily: the n-th application happens on the (n+1)-th pull.
pub fn iterate<'a, T, F>(seed: T, f: F) -> Sequence<'a, T>
where
    T: Clone + 'a,
    F: FnMut(&T) -> T + 'a,
{
    Sequence::from_pull(
        "iterate",
        Iterate {
            current: seed,
            started: false,
            f,
        },
    )
}

/// Infinite sequence of clones of `value`.
pub fn repeat<'a, T: Clone + 'a>(value: T) -> Sequence<'a, T> {
    Sequence::from_pull("repeat", IterSource(std::iter::repeat(value)))
}

/// A sequence with exactly one element.
pub fn once<'a, T: 'a>(value: T) -> Sequence<'a, T> {
    Sequence::from_pull("once", IterSource(std::iter::once(value)))
}

/// A sequence with no elements.
pub fn empty<'a, T: 'a>() -> Sequence<'a, T> {
    Sequence::from_pull("empty", IterSource(std::iter::empty()))
}

struct FnSource<F>(F);

impl<T, F> Pull for FnSource<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    #[inline]
    fn pull(&mut self) -> Step<T> {
        (self.0)().into()
    }
}

struct Iterate<T, F> {
    current: T,
    started: bool,
    f: F,
}

impl<T, F> Pull for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn pull(&mut self) -> Step<T> {
        if self.started {
            self.current = (self.f)(&self.current);
        } else {
            self.started = true;
        }
        Step::Emit(self.current.clone())
    }
}
