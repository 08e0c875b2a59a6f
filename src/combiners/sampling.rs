//! Priority-based reservoir sampling combiner

use super::CombineFn;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::marker::PhantomData;

// ======================================================================
// Reservoir / Priority Sampling (Efraimidis–Spirakis A-ExpJ, unit weight)
// ======================================================================

/// Small seeded PRNG shared by the sampling aggregators.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub(crate) const fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_mul(0xA24B_AED4_0B9C_497C),
        }
    }

    #[inline]
    pub(crate) const fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / ((1u64 << 53) as f64);
        ((self.next_u64() >> 11) as f64) * SCALE
    }

    /// Uniform in `0..bound`. `bound` must be positive.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn below(&mut self, bound: u64) -> u64 {
        // multiply-shift keeps the bias negligible for the bounds we see
        ((u128::from(self.next_u64()) * u128::from(bound)) >> 64) as u64
    }
}

type Priority = (OrderedFloat<f64>, Reverse<u64>);

/// Accumulator for [`PriorityReservoir`].
///
/// `heap` is a min-heap on priority holding the indices of live slots in
/// `store`; evicted slots become `None`.
#[derive(Clone, Debug)]
pub struct PRAcc<T> {
    k: usize,
    rng: SplitMix64,
    seq: u64,
    heap: BinaryHeap<Reverse<(Priority, usize)>>,
    store: Vec<Option<(Priority, T)>>,
}

impl<T> PRAcc<T> {
    /// Number of sampled items currently held.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Uniform sample of `k` values, without replacement.
///
/// Every element gets an i.i.d. priority `u ~ U(0,1)` and the `k` largest
/// priorities are kept. The PRNG is seeded from `seed`, so the same input and
/// seed always give the same sample.
///
/// `finish` returns items by (priority desc, arrival asc).
#[derive(Clone, Copy, Debug)]
pub struct PriorityReservoir<T> {
    pub k: usize,
    pub seed: u64,
    _m: PhantomData<T>,
}

impl<T> PriorityReservoir<T> {
    #[must_use]
    pub const fn new(k: usize, seed: u64) -> Self {
        Self {
            k,
            seed,
            _m: PhantomData,
        }
    }
}

impl<T> CombineFn<T, PRAcc<T>, Vec<T>> for PriorityReservoir<T> {
    fn create(&self) -> PRAcc<T> {
        PRAcc {
            k: self.k,
            rng: SplitMix64::new(self.seed),
            seq: 0,
            heap: BinaryHeap::with_capacity(self.k.saturating_add(1)),
            store: Vec::new(),
        }
    }

    fn add_input(&self, acc: &mut PRAcc<T>, v: T) {
        if acc.k == 0 {
            return;
        }
        let mut u = acc.rng.next_f64();
        if u == 0.0 {
            u = f64::from_bits(1);
        } // strictly > 0
        let priority = (OrderedFloat(u), Reverse(acc.seq));
        acc.seq += 1;

        if acc.heap.len() == acc.k {
            // full: the newcomer must beat the weakest survivor
            let Some(Reverse((weakest, idx))) = acc.heap.peek().copied() else {
                return;
            };
            if priority <= weakest {
                return;
            }
            acc.heap.pop();
            // reuse the evicted slot so `store` stays at k entries
            acc.store[idx] = Some((priority, v));
            acc.heap.push(Reverse((priority, idx)));
            return;
        }

        let idx = acc.store.len();
        acc.store.push(Some((priority, v)));
        acc.heap.push(Reverse((priority, idx)));
    }

    fn finish(&self, acc: PRAcc<T>) -> Vec<T> {
        let mut items: Vec<(Priority, T)> = acc.store.into_iter().flatten().collect();
        items.sort_by(|a, b| b.0.cmp(&a.0));
        items.into_iter().map(|(_, v)| v).collect()
    }
}
