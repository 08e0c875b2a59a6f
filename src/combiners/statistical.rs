//! Statistical combiners: `AverageF64`

use super::CombineFn;

/// Running mean state for [`AverageF64`].
///
/// The mean is updated incrementally, so long inputs of large values never
/// build up one huge intermediate sum.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeanAcc {
    pub mean: f64,
    pub count: u64,
}

/// Arithmetic mean of values convertible into `f64`. An empty input averages to
/// `0.0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AverageF64;

impl<V> CombineFn<V, MeanAcc, f64> for AverageF64
where
    V: Into<f64>,
{
    fn create(&self) -> MeanAcc {
        MeanAcc::default()
    }

    #[allow(clippy::cast_precision_loss)]
    fn add_input(&self, acc: &mut MeanAcc, v: V) {
        acc.count += 1;
        acc.mean += (v.into() - acc.mean) / acc.count as f64;
    }

    fn finish(&self, acc: MeanAcc) -> f64 {
        acc.mean
    }
}
