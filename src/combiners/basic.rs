//! Basic arithmetic combiners: Sum, Product, Count

use super::CombineFn;
use std::iter;
use std::marker::PhantomData;
use std::mem::take;
use std::ops::{Add, Mul};

/* ===================== Sum<T> ===================== */

/// Sum of values. An empty input sums to `T::default()`.
///
/// - Accumulator: `T`
/// - Output: `T`
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum<T>(pub PhantomData<T>);
impl<T> Sum<T> {
    /// Convenience constructor (same as `Default`).
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, T, T> for Sum<T>
where
    T: Add<Output = T> + Default,
{
    fn create(&self) -> T {
        T::default()
    }

    fn add_input(&self, acc: &mut T, v: T) {
        *acc = take(acc) + v;
    }

    fn finish(&self, acc: T) -> T {
        acc
    }
}

/* ===================== Product<T> ===================== */

/// Product of values. An empty input multiplies to the type's identity, taken
/// from its [`std::iter::Product`] impl.
///
/// - Accumulator: `T`
/// - Output: `T`
#[derive(Clone, Copy, Debug, Default)]
pub struct Product<T>(pub PhantomData<T>);
impl<T> Product<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, T, T> for Product<T>
where
    T: Mul<Output = T> + iter::Product + Default,
{
    fn create(&self) -> T {
        iter::empty::<T>().product()
    }

    fn add_input(&self, acc: &mut T, v: T) {
        *acc = take(acc) * v;
    }

    fn finish(&self, acc: T) -> T {
        acc
    }
}

/* ===================== Count ===================== */

/// Number of values, whatever their type.
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<V> CombineFn<V, usize, usize> for Count {
    fn create(&self) -> usize {
        0
    }

    fn add_input(&self, acc: &mut usize, _v: V) {
        *acc += 1;
    }

    fn finish(&self, acc: usize) -> usize {
        acc
    }
}
