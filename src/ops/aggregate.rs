//! Aggregators that consume the whole sequence.
//!
//! Every method here drains its input and therefore never returns for an
//! infinite sequence. Absence is reported with `Option` (or the caller's seed);
//! no aggregator here fails.
//!
//! Ordering methods share one comparator convention: a *sorter* `s(a, b)`
//! answers "may `a` come before `b`", defaulting to `a <= b`.
//! - `min*` keeps the accumulator while `s(acc, e)` holds, so ties report the
//!   first element seen.
//! - `max*` replaces the accumulator whenever `s(acc, e)` holds, so ties report
//!   the last element seen.

use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::hash::Hash;
use std::ops::{Add, Mul};

use crate::combiners::{CombineFn, PriorityReservoir, Product, SplitMix64, Sum};
use crate::grouping::Grouping;
use crate::sequence::{Pull, Sequence, Step};

impl<'a, T: 'a> Sequence<'a, T> {
    /// Fold with the first element as the seed. `None` for an empty sequence.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// assert_eq!(from_iter(1..=4).reduce(|a, b| a * b), Some(24));
    /// assert_eq!(empty::<i32>().reduce(|a, b| a + b), None);
    /// ```
    pub fn reduce<F>(mut self, f: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        let first = self.pull().into_option()?;
        Some(self.fold(first, f))
    }

    /// Left fold from an explicit seed. An empty sequence returns `init`.
    pub fn fold<A, F>(mut self, init: A, mut f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        let mut acc = init;
        while let Step::Emit(v) = self.pull() {
            acc = f(acc, v);
        }
        acc
    }

    /// Drain through a [`CombineFn`].
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    /// use ironseq::combiners::Count;
    ///
    /// assert_eq!(from_vec(vec!["a", "b"]).combine(Count), 2);
    /// ```
    pub fn combine<C, A, O>(self, comb: C) -> O
    where
        C: CombineFn<T, A, O>,
    {
        let mut acc = comb.create();
        for v in self {
            comb.add_input(&mut acc, v);
        }
        comb.finish(acc)
    }

    /// Number of elements.
    pub fn count(self) -> usize {
        self.fold(0, |n, _| n + 1)
    }

    pub fn sum(self) -> T
    where
        T: Add<Output = T> + Default,
    {
        self.combine(Sum::new())
    }

    /// Product of all elements; the multiplicative identity when empty.
    pub fn product(self) -> T
    where
        T: Mul<Output = T> + std::iter::Product + Default,
    {
        self.combine(Product::new())
    }

    /// Smallest element by `<=`; the first one seen on ties.
    pub fn min(self) -> Option<T>
    where
        T: PartialOrd,
    {
        self.min_with(|a, b| a <= b)
    }

    /// Largest element by `<=`; the last one seen on ties.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let words = from_vec(vec![("a", 2), ("b", 3), ("c", 3)]);
    /// assert_eq!(words.max_by_key(|w| w.1), Some(("c", 3)));
    /// ```
    pub fn max(self) -> Option<T>
    where
        T: PartialOrd,
    {
        self.max_with(|a, b| a <= b)
    }

    /// Minimum under a custom sorter: the accumulator survives while
    /// `sorter(acc, e)` holds.
    pub fn min_with<S>(mut self, mut sorter: S) -> Option<T>
    where
        S: FnMut(&T, &T) -> bool,
    {
        let first = self.pull().into_option()?;
        Some(self.fold(first, |acc, e| if sorter(&acc, &e) { acc } else { e }))
    }

    /// Maximum under a custom sorter: `e` replaces the accumulator when
    /// `sorter(acc, e)` holds.
    pub fn max_with<S>(mut self, mut sorter: S) -> Option<T>
    where
        S: FnMut(&T, &T) -> bool,
    {
        let first = self.pull().into_option()?;
        Some(self.fold(first, |acc, e| if sorter(&acc, &e) { e } else { acc }))
    }

    /// Element with the smallest `key`. `key` runs once per element.
    pub fn min_by_key<K, F>(mut self, mut key: F) -> Option<T>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        let first = self.pull().into_option()?;
        let seed = (key(&first), first);
        let (_, e) = self.fold(seed, |acc, e| {
            let k = key(&e);
            if acc.0 <= k { acc } else { (k, e) }
        });
        Some(e)
    }

    /// Element with the largest `key`. `key` runs once per element.
    pub fn max_by_key<K, F>(mut self, mut key: F) -> Option<T>
    where
        K: PartialOrd,
        F: FnMut(&T) -> K,
    {
        let first = self.pull().into_option()?;
        let seed = (key(&first), first);
        let (_, e) = self.fold(seed, |acc, e| {
            let k = key(&e);
            if acc.0 <= k { (k, e) } else { acc }
        });
        Some(e)
    }

    /// Both bounds in a single pass, `(min, max)`, with the same tie rules as
    /// [`min`](Self::min) and [`max`](Self::max).
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// assert_eq!(from_vec(vec![3, 1, 4, 1, 5]).min_max(), Some((1, 5)));
    /// ```
    pub fn min_max(self) -> Option<(T, T)>
    where
        T: PartialOrd + Clone,
    {
        self.min_max_by_key(T::clone)
    }

    /// [`min_max`](Self::min_max) comparing by `key`.
    pub fn min_max_by_key<K, F>(mut self, mut key: F) -> Option<(T, T)>
    where
        T: Clone,
        K: PartialOrd + Clone,
        F: FnMut(&T) -> K,
    {
        let first = self.pull().into_option()?;
        let k = key(&first);
        let mut lo = (k.clone(), first.clone());
        let mut hi = (k, first);
        while let Step::Emit(e) = self.pull() {
            let k = key(&e);
            let new_lo = !(lo.0 <= k);
            let new_hi = hi.0 <= k;
            match (new_lo, new_hi) {
                (true, true) => {
                    lo = (k.clone(), e.clone());
                    hi = (k, e);
                }
                (true, false) => lo = (k, e),
                (false, true) => hi = (k, e),
                (false, false) => {}
            }
        }
        Some((lo.1, hi.1))
    }

    /// Count of each distinct element, keys in first-encounter order.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let freq = from_vec(vec![1, 1, 2, 3, 3, 3]).frequencies();
    /// assert_eq!(freq.into_vec(), vec![(1, 2), (2, 1), (3, 3)]);
    /// ```
    pub fn frequencies(self) -> Grouping<T, usize>
    where
        T: Eq + Hash + Clone,
    {
        let mut out = Grouping::new();
        for e in self {
            *out.get_or_insert_with(e, || 0) += 1;
        }
        out
    }

    /// Count of elements per `key`.
    pub fn frequencies_by<K, F>(self, mut key: F) -> Grouping<K, usize>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K,
    {
        let mut out = Grouping::new();
        for e in self {
            *out.get_or_insert_with(key(&e), || 0) += 1;
        }
        out
    }

    /// Elements grouped by `key`, each group in encounter order.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let groups = from_iter(1..=6).group_by(|x| x % 2);
    /// assert_eq!(groups.get(&1), Some(&vec![1, 3, 5]));
    /// assert_eq!(groups.get(&0), Some(&vec![2, 4, 6]));
    /// ```
    pub fn group_by<K, F>(self, key: F) -> Grouping<K, Vec<T>>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K,
    {
        self.group_by_with(key, |e| e)
    }

    /// Group `value(e)` under `key(e)`.
    pub fn group_by_with<K, V, F, G>(self, mut key: F, mut value: G) -> Grouping<K, Vec<V>>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&T) -> K,
        G: FnMut(T) -> V,
    {
        let mut out = Grouping::new();
        for e in self {
            out.get_or_insert_with(key(&e), Vec::new).push(value(e));
        }
        out
    }

    /// Materialize and stable-sort ascending.
    pub fn sort(self) -> Vec<T>
    where
        T: Ord,
    {
        let mut v = self.to_vec();
        v.sort();
        v
    }

    /// Materialize and stable-sort with an [`Ordering`] comparator.
    pub fn sort_by<C>(self, cmp: C) -> Vec<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut v = self.to_vec();
        v.sort_by(cmp);
        v
    }

    /// Materialize and stable-sort with a sorter `s(a, b)` meaning "`a` may
    /// come before `b`".
    ///
    /// Pairs where the sorter holds both ways (or neither way) keep their
    /// input order.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let desc = from_vec(vec![2, 3, 1]).sort_with(|a, b| a >= b);
    /// assert_eq!(desc, vec![3, 2, 1]);
    /// ```
    pub fn sort_with<S>(self, mut sorter: S) -> Vec<T>
    where
        S: FnMut(&T, &T) -> bool,
    {
        self.sort_by(|a, b| match (sorter(a, b), sorter(b, a)) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        })
    }

    /// One element chosen uniformly at random in a single pass, or `None` for
    /// an empty sequence. The same `seed` and input always give the same pick.
    pub fn random(self, seed: u64) -> Option<T> {
        let mut rng = SplitMix64::new(seed);
        let mut seen = 0u64;
        self.fold(None, |pick, e| {
            seen += 1;
            if rng.below(seen) == 0 { Some(e) } else { pick }
        })
    }

    /// `k` elements sampled uniformly without replacement.
    ///
    /// `k == 0` returns an empty `Vec`; a sequence shorter than `k` is returned
    /// in full (in sample order).
    pub fn take_random(self, k: usize, seed: u64) -> Vec<T> {
        if k == 0 {
            return Vec::new();
        }
        self.combine(PriorityReservoir::new(k, seed))
    }
}

impl Sequence<'_, f64> {
    /// Materialize and sort by IEEE total order, with `NaN` last.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    ///
    /// let v = from_vec(vec![2.5, f64::NAN, -1.0]).sort_numeric();
    /// assert_eq!(v[..2], [-1.0, 2.5]);
    /// assert!(v[2].is_nan());
    /// ```
    pub fn sort_numeric(self) -> Vec<f64> {
        let mut v = self.to_vec();
        v.sort_by_key(|x| OrderedFloat(*x));
        v
    }
}
