//! Exponential moving averages.
//!
//! All averages in this module share one recursion,
//! `EMA[i] = α × P[i] + (1 - α) × EMA[i-1]`, and differ in α, in the seed and
//! in how they are composed:
//!
//! | function | α | seed | first value |
//! |---|---|---|---|
//! | [`ema`] | `2 / (period + 1)` | first non-NaN input | index 0 |
//! | [`smma`] | `1 / period` (Wilder) | SMA of the first window | `period - 1` |
//! | [`dema`] | `2 EMA − EMA(EMA)` | first input | index 0 |
//! | [`tema`] | `3 EMA − 3 EMA² + EMA³` | first input | index 0 |
//!
//! The [`Ema`] configuration selects the TA-Lib style SMA seed instead.
//!
//! # Example
//!
//! ```
//! use ohlc_ta::indicators::ema::{ema, Ema};
//! use ohlc_ta::kernels::smoothing::Seed;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0];
//!
//! let seeded_first = ema(&data, 3).unwrap();
//! assert_eq!(seeded_first[0], 1.0);
//!
//! let seeded_sma = Ema::new().period(3).seed(Seed::Sma).compute(&data).unwrap();
//! assert!(seeded_sma[1].is_nan());
//! assert!((seeded_sma[2] - 2.0).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::kernels::smoothing::{ema_alpha, exponential_smooth, wilder_smooth, Seed};
use crate::traits::{validate_indicator_input, SeriesElement};

/// Returns the lookback period for [`ema`].
///
/// The default seed emits a value at the first bar, so there is no warm-up
/// on NaN-free input.
#[inline]
#[must_use]
pub const fn ema_lookback(_period: usize) -> usize {
    0
}

/// Returns the minimum input length required for EMA.
///
/// The whole crate rejects windows longer than the series, EMA included.
#[inline]
#[must_use]
pub const fn ema_min_len(period: usize) -> usize {
    if period == 0 {
        1
    } else {
        period
    }
}

/// Returns the lookback period for [`smma`].
#[inline]
#[must_use]
pub const fn smma_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Computes the Exponential Moving Average with `α = 2 / (period + 1)`.
///
/// `EMA[0]` is the first input (or the first non-NaN input after a NaN
/// prefix). Each later value depends only on the current input and the
/// previous EMA. A NaN after the seed poisons every later value.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::InsufficientData` if the data is shorter than the period
pub fn ema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_indicator_input(data, period, "ema")?;
    exponential_smooth(data, ema_alpha(period)?, Seed::First, period)
}

/// Computes Wilder's smoothed moving average (SMMA, also called RMA).
///
/// `α = 1 / period`, seeded with the simple mean of the first `period` values.
///
/// # Errors
///
/// Same conditions as [`ema`].
///
/// # Example
///
/// ```
/// use ohlc_ta::indicators::ema::smma;
///
/// let out = smma(&[2.0_f64, 4.0, 6.0, 8.0], 2).unwrap();
/// assert!(out[0].is_nan());
/// assert_eq!(&out[1..], &[3.0, 4.5, 6.25]);
/// ```
pub fn smma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_indicator_input(data, period, "smma")?;
    wilder_smooth(data, period)
}

/// Computes the Double Exponential Moving Average: `2·EMA − EMA(EMA)`.
///
/// # Errors
///
/// Same conditions as [`ema`].
pub fn dema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_indicator_input(data, period, "dema")?;
    let alpha = ema_alpha(period)?;
    let e1 = exponential_smooth(data, alpha, Seed::First, period)?;
    let e2 = exponential_smooth(&e1, alpha, Seed::First, period)?;
    Ok(e1
        .iter()
        .zip(&e2)
        .map(|(&a, &b)| T::two() * a - b)
        .collect())
}

/// Computes the Triple Exponential Moving Average:
/// `3·EMA − 3·EMA(EMA) + EMA(EMA(EMA))`.
///
/// # Errors
///
/// Same conditions as [`ema`].
pub fn tema<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_indicator_input(data, period, "tema")?;
    let alpha = ema_alpha(period)?;
    let e1 = exponential_smooth(data, alpha, Seed::First, period)?;
    let e2 = exponential_smooth(&e1, alpha, Seed::First, period)?;
    let e3 = exponential_smooth(&e2, alpha, Seed::First, period)?;
    let three = T::two() + T::one();
    Ok(e1
        .iter()
        .zip(&e2)
        .zip(&e3)
        .map(|((&a, &b), &c)| three * a - three * b + c)
        .collect())
}

// ==================== Configuration Type ====================

/// EMA configuration with fluent builder API.
///
/// Defaults: period 20, [`Seed::First`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Ema {
    period: usize,
    seed: Seed,
}

impl Default for Ema {
    fn default() -> Self {
        Self {
            period: 20,
            seed: Seed::First,
        }
    }
}

impl Ema {
    /// Creates a configuration with the default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the period.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the seed policy.
    #[must_use]
    pub const fn seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the seed policy.
    #[must_use]
    pub const fn get_seed(&self) -> Seed {
        self.seed
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        match self.seed {
            Seed::First => ema_lookback(self.period),
            Seed::Sma => smma_lookback(self.period),
        }
    }

    /// Computes the EMA using the configured parameters.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ema`].
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<T>> {
        validate_indicator_input(data, self.period, "ema")?;
        exponential_smooth(data, ema_alpha(self.period)?, self.seed, self.period)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]

    use super::*;
    use crate::error::Error;
    use crate::utils::approx_eq;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_ema_seed_is_first_value() {
        let data = vec![10.0_f64, 11.0, 12.0, 13.0];
        let result = ema(&data, 3).unwrap();
        // alpha = 0.5
        assert!(approx_eq(result[0], 10.0, EPSILON));
        assert!(approx_eq(result[1], 10.5, EPSILON));
        assert!(approx_eq(result[2], 11.25, EPSILON));
        assert!(approx_eq(result[3], 12.125, EPSILON));
    }

    #[test]
    fn test_ema_nan_prefix_seeds_from_first_valid() {
        let data = vec![f64::NAN, f64::NAN, 4.0, 6.0];
        let result = ema(&data, 3).unwrap();
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert!(approx_eq(result[2], 4.0, EPSILON));
        assert!(approx_eq(result[3], 5.0, EPSILON));
    }

    #[test]
    fn test_ema_forward_only() {
        let mut data: Vec<f64> = (0..20).map(|i| (i as f64 * 0.7).cos()).collect();
        let before = ema(&data, 5).unwrap();
        data[15] = 1000.0;
        let after = ema(&data, 5).unwrap();
        assert_eq!(&before[..15], &after[..15]);
        assert_ne!(before[15], after[15]);
    }

    #[test]
    fn test_ema_constant_series() {
        let data = vec![7.0_f64; 10];
        let result = ema(&data, 4).unwrap();
        assert!(result.iter().all(|&v| approx_eq(v, 7.0, EPSILON)));
    }

    #[test]
    fn test_ema_f32() {
        let data = vec![10.0_f32, 11.0, 12.0];
        let result = ema(&data, 3).unwrap();
        assert!((result[2] - 11.25).abs() < 1e-5);
    }

    #[test]
    fn test_ema_config_sma_seed() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let cfg = Ema::new().period(3).seed(Seed::Sma);
        assert_eq!(cfg.lookback(), 2);
        let result = cfg.compute(&data).unwrap();
        assert!(result[1].is_nan());
        assert!(approx_eq(result[2], 2.0, EPSILON));
        assert!(approx_eq(result[3], 3.0, EPSILON));
    }

    #[test]
    fn test_smma() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let result = smma(&data, 3).unwrap();
        assert!(result[1].is_nan());
        assert!(approx_eq(result[2], 2.0, EPSILON));
        assert!(approx_eq(result[3], 2.0 + (4.0 - 2.0) / 3.0, EPSILON));
    }

    #[test]
    fn test_dema_tema_track_linear_trend_better() {
        let data: Vec<f64> = (0..60).map(|i| i as f64).collect();
        let e = ema(&data, 10).unwrap();
        let d = dema(&data, 10).unwrap();
        let t = tema(&data, 10).unwrap();
        let last = data.len() - 1;
        let lag_e = data[last] - e[last];
        let lag_d = data[last] - d[last];
        let lag_t = data[last] - t[last];
        assert!(lag_e > lag_d.abs());
        assert!(lag_e > lag_t.abs());
    }

    #[test]
    fn test_dema_constant() {
        let data = vec![3.0_f64; 8];
        let d = dema(&data, 3).unwrap();
        let t = tema(&data, 3).unwrap();
        assert!(d.iter().all(|&v| approx_eq(v, 3.0, EPSILON)));
        assert!(t.iter().all(|&v| approx_eq(v, 3.0, EPSILON)));
    }

    #[test]
    fn test_ema_errors() {
        assert!(matches!(ema(&[1.0_f64], 0), Err(Error::InvalidPeriod { .. })));
        assert!(matches!(
            ema(&[1.0_f64, 2.0], 5),
            Err(Error::InsufficientData { required: 5, actual: 2, .. })
        ));
        let empty: Vec<f64> = vec![];
        assert!(matches!(ema(&empty, 3), Err(Error::EmptyInput)));
    }
}
