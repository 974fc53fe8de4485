//! Index-wise evaluation of independent per-bar predicates.
//!
//! Candlestick classifiers evaluate a pure predicate at every bar; bar `i`
//! never depends on the result at bar `i - 1`. [`BarEvaluator`] fans that work
//! out over Rayon's thread pool when the `parallel` feature is enabled and the
//! series is long enough to amortise the scheduling overhead. Below the
//! threshold, or without the feature, evaluation is a plain sequential loop.
//! Both paths produce identical output.
//!
//! # Feature Flag
//!
//! ```toml
//! [dependencies]
//! ohlc-ta = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! # Example
//!
//! ```
//! use ohlc_ta::kernels::parallel::BarEvaluator;
//!
//! let close = vec![1.0_f64, 3.0, 2.0, 5.0];
//! let rising = BarEvaluator::new().evaluate(close.len(), |i| i > 0 && close[i] > close[i - 1]);
//! assert_eq!(rising, vec![false, true, false, true]);
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Series length at which per-bar evaluation switches to the thread pool.
pub const PARALLEL_THRESHOLD: usize = 16_384;

/// Evaluates a per-bar predicate over `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarEvaluator {
    min_parallel_threshold: usize,
}

impl Default for BarEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl BarEvaluator {
    /// Creates an evaluator using [`PARALLEL_THRESHOLD`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: PARALLEL_THRESHOLD,
        }
    }

    /// Sets the minimum series length for parallel evaluation.
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Returns the configured threshold.
    #[must_use]
    pub const fn threshold(&self) -> usize {
        self.min_parallel_threshold
    }

    /// Evaluates `predicate` at every index in `0..len`, in index order.
    #[cfg(feature = "parallel")]
    pub fn evaluate<F>(&self, len: usize, predicate: F) -> Vec<bool>
    where
        F: Fn(usize) -> bool + Send + Sync,
    {
        if len < self.min_parallel_threshold {
            (0..len).map(predicate).collect()
        } else {
            (0..len).into_par_iter().map(predicate).collect()
        }
    }

    /// Evaluates `predicate` at every index in `0..len`, in index order.
    #[cfg(not(feature = "parallel"))]
    pub fn evaluate<F>(&self, len: usize, predicate: F) -> Vec<bool>
    where
        F: Fn(usize) -> bool,
    {
        (0..len).map(predicate).collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]

    use super::*;

    #[test]
    fn test_default_threshold() {
        assert_eq!(BarEvaluator::default().threshold(), PARALLEL_THRESHOLD);
        assert_eq!(BarEvaluator::new().min_parallel_threshold(8).threshold(), 8);
    }

    #[test]
    fn test_sequential_and_forced_parallel_agree() {
        let data: Vec<f64> = (0..5_000).map(|i| ((i * 31) % 17) as f64).collect();
        let predicate = |i: usize| i >= 2 && data[i] > data[i - 1] && data[i - 1] > data[i - 2];

        let sequential = BarEvaluator::new()
            .min_parallel_threshold(usize::MAX)
            .evaluate(data.len(), predicate);
        let forced = BarEvaluator::new()
            .min_parallel_threshold(0)
            .evaluate(data.len(), predicate);

        assert_eq!(sequential.len(), data.len());
        assert_eq!(sequential, forced);
    }

    #[test]
    fn test_empty_range() {
        assert!(BarEvaluator::new().evaluate(0, |_| true).is_empty());
    }
}
