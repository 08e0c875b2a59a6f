//! Eager counterparts of the lazy operators.
//!
//! Each function takes any `IntoIterator`, builds the lazy chain of the same
//! name, and drains it into a `Vec`, so both families share one
//! implementation.
//!
//! ```
//! use ironseq::eager;
//!
//! assert_eq!(eager::chunk_by(vec![1, 1, 2, 3, 3], |x| *x), vec![vec![1, 1], vec![2], vec![3, 3]]);
//! assert_eq!(eager::intersperse(["a", "b"], ","), vec!["a", ",", "b"]);
//! ```

use std::hash::Hash;

use crate::error::SeqResult;
use crate::grouping::Grouping;
use crate::helpers::from_iter;
use crate::ops::stateless;
use crate::window::ChunkEvery;

pub fn map<'a, I, O, F>(input: I, f: F) -> Vec<O>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    O: 'a,
    F: FnMut(I::Item) -> O + 'a,
{
    from_iter(input).map(f).to_vec()
}

pub fn filter<'a, I, P>(input: I, pred: P) -> Vec<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    P: FnMut(&I::Item) -> bool + 'a,
{
    from_iter(input).filter(pred).to_vec()
}

pub fn reject<'a, I, P>(input: I, pred: P) -> Vec<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    P: FnMut(&I::Item) -> bool + 'a,
{
    from_iter(input).reject(pred).to_vec()
}

pub fn flat_map<'a, I, J, F>(input: I, f: F) -> Vec<J::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    J: IntoIterator,
    J::IntoIter: 'a,
    J::Item: 'a,
    F: FnMut(I::Item) -> J + 'a,
{
    from_iter(input).flat_map(f).to_vec()
}

pub fn concat<'a, I>(seqs: I) -> Vec<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: IntoIterator,
    <I::Item as IntoIterator>::IntoIter: 'a,
    <I::Item as IntoIterator>::Item: 'a,
{
    stateless::concat(seqs).to_vec()
}

/// Runs each inner collection through [`Sequence::flatten`](crate::Sequence::flatten).
pub fn flatten<'a, I>(nested: I) -> Vec<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: IntoIterator + 'a,
    <I::Item as IntoIterator>::IntoIter: 'a,
    <I::Item as IntoIterator>::Item: 'a,
{
    from_iter(nested).map(|inner| from_iter(inner)).flatten().to_vec()
}

pub fn inspect<'a, I, F>(input: I, f: F) -> Vec<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    F: FnMut(&I::Item) + 'a,
{
    from_iter(input).inspect(f).to_vec()
}

pub fn with_index<'a, I>(input: I) -> Vec<(usize, I::Item)>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    from_iter(input).with_index().to_vec()
}

pub fn scan<'a, I, A, F>(input: I, init: A, f: F) -> Vec<A>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    A: Clone + 'a,
    F: FnMut(A, I::Item) -> A + 'a,
{
    from_iter(input).scan(init, f).to_vec()
}

/// Pairs up elements until the shorter input runs out.
pub fn zip<'a, I, J>(left: I, right: J) -> Vec<(I::Item, J::Item)>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    J: IntoIterator,
    J::IntoIter: 'a,
    J::Item: 'a,
{
    from_iter(left).zip(from_iter(right)).to_vec()
}

pub fn dedup<'a, I>(input: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: PartialEq + Clone + 'a,
{
    from_iter(input).dedup().to_vec()
}

pub fn dedup_by<'a, I, K, F>(input: I, key: F) -> Vec<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    K: PartialEq + 'a,
    F: FnMut(&I::Item) -> K + 'a,
{
    from_iter(input).dedup_by(key).to_vec()
}

pub fn chunk_by<'a, I, K, F>(input: I, key: F) -> Vec<Vec<I::Item>>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    K: PartialEq + 'a,
    F: FnMut(&I::Item) -> K + 'a,
{
    from_iter(input).chunk_by(key).to_vec()
}

/// # Errors
/// `InvalidArgument` when `count == 0`.
pub fn chunk_every<'a, I>(input: I, count: usize) -> SeqResult<Vec<Vec<I::Item>>>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: Clone + 'a,
{
    Ok(from_iter(input).chunk_every(count)?.to_vec())
}

/// # Errors
/// `InvalidArgument` when `count` or `step` is zero.
pub fn chunk_every_step<'a, I>(input: I, count: usize, step: usize) -> SeqResult<Vec<Vec<I::Item>>>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: Clone + 'a,
{
    Ok(from_iter(input).chunk_every_step(count, step)?.to_vec())
}

/// # Errors
/// `InvalidArgument` when `opts.count` or `opts.step` is zero.
pub fn chunk_every_with<'a, I>(input: I, opts: ChunkEvery) -> SeqResult<Vec<Vec<I::Item>>>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: Clone + 'a,
{
    Ok(from_iter(input).chunk_every_with(opts)?.to_vec())
}

/// # Errors
/// `InvalidArgument` when `n == 0`.
pub fn drop_every<'a, I>(input: I, n: usize) -> SeqResult<Vec<I::Item>>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    Ok(from_iter(input).drop_every(n)?.to_vec())
}

/// # Errors
/// `InvalidArgument` when `nth == 0`.
pub fn take_every<'a, I>(input: I, nth: usize) -> SeqResult<Vec<I::Item>>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    Ok(from_iter(input).take_every(nth)?.to_vec())
}

/// # Errors
/// `InvalidArgument` when `nth == 0`.
pub fn map_every<'a, I, F>(input: I, nth: usize, f: F) -> SeqResult<Vec<I::Item>>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    F: FnMut(I::Item) -> I::Item + 'a,
{
    Ok(from_iter(input).map_every(nth, f)?.to_vec())
}

pub fn intersperse<'a, I>(input: I, sep: I::Item) -> Vec<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: Clone + 'a,
{
    from_iter(input).intersperse(sep).to_vec()
}

pub fn map_intersperse<'a, I, O, F>(input: I, sep: O, f: F) -> Vec<O>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    O: Clone + 'a,
    F: FnMut(I::Item) -> O + 'a,
{
    from_iter(input).map_intersperse(sep, f).to_vec()
}

pub fn take<'a, I>(input: I, n: usize) -> Vec<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    from_iter(input).take(n).to_vec()
}

pub fn drop<'a, I>(input: I, n: usize) -> Vec<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
{
    from_iter(input).drop(n).to_vec()
}

pub fn drop_while<'a, I, P>(input: I, pred: P) -> Vec<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    P: FnMut(&I::Item) -> bool + 'a,
{
    from_iter(input).drop_while(pred).to_vec()
}

pub fn take_while<'a, I, P>(input: I, pred: P) -> Vec<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    P: FnMut(&I::Item) -> bool + 'a,
{
    from_iter(input).take_while(pred).to_vec()
}

pub fn uniq<'a, I>(input: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: Eq + Hash + Clone + 'a,
{
    from_iter(input).uniq().to_vec()
}

pub fn uniq_by<'a, I, K, F>(input: I, key: F) -> Vec<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    K: Eq + Hash + 'a,
    F: FnMut(&I::Item) -> K + 'a,
{
    from_iter(input).uniq_by(key).to_vec()
}

pub fn frequencies<'a, I>(input: I) -> Grouping<I::Item, usize>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: Eq + Hash + Clone + 'a,
{
    from_iter(input).frequencies()
}

pub fn group_by<'a, I, K, F>(input: I, key: F) -> Grouping<K, Vec<I::Item>>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    from_iter(input).group_by(key)
}

pub fn frequencies_by<'a, I, K, F>(input: I, key: F) -> Grouping<K, usize>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
{
    from_iter(input).frequencies_by(key)
}

pub fn group_by_with<'a, I, K, V, F, G>(input: I, key: F, value: G) -> Grouping<K, Vec<V>>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    K: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> K,
    G: FnMut(I::Item) -> V,
{
    from_iter(input).group_by_with(key, value)
}

pub fn sort_with<'a, I, S>(input: I, sorter: S) -> Vec<I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: 'a,
    S: FnMut(&I::Item, &I::Item) -> bool,
{
    from_iter(input).sort_with(sorter)
}

pub fn min_max<'a, I>(input: I) -> Option<(I::Item, I::Item)>
where
    I: IntoIterator,
    I::IntoIter: 'a,
    I::Item: PartialOrd + Clone + 'a,
{
    from_iter(input).min_max()
}
