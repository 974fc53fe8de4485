//! Exponential smoothing primitives.
//!
//! All exponential averages in the crate (EMA, Wilder's smoothed average,
//! the MACD lines, ATR, RSI's average gain/loss) share the recursion
//!
//! ```text
//! s[i] = alpha * x[i] + (1 - alpha) * s[i-1]
//! ```
//!
//! and differ only in `alpha` and in how `s` is seeded ([`Seed`]).
//!
//! The recursion is forward-only: output `i` depends on inputs `0..=i` alone.
//! A NaN reaching the recursion after the seed poisons every later value.

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// How an exponential average obtains its first value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Seed {
    /// The first non-NaN input is the first output; no warm-up beyond a NaN prefix.
    #[default]
    First,
    /// The simple mean of the first `period` non-NaN inputs, emitted at the end
    /// of that window; `period - 1` warm-up values.
    Sma,
}

/// Smoothing factor of a standard EMA: `2 / (period + 1)`.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is zero
/// - `Error::NumericConversion` if the period cannot be represented
pub fn ema_alpha<T: SeriesElement>(period: usize) -> Result<T> {
    if period == 0 {
        return Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        });
    }
    Ok(T::two() / (T::from_usize(period)? + T::one()))
}

/// Smoothing factor of Wilder's average: `1 / period`.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is zero
/// - `Error::NumericConversion` if the period cannot be represented
pub fn wilder_alpha<T: SeriesElement>(period: usize) -> Result<T> {
    if period == 0 {
        return Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        });
    }
    Ok(T::one() / T::from_usize(period)?)
}

/// Runs the exponential recursion over `data`.
///
/// Leading NaN values are skipped; the seed is taken from the first non-NaN
/// value according to `seed`. When the series does not hold enough values for
/// the seed, the output is entirely NaN. `period` is only consulted by
/// [`Seed::Sma`].
///
/// # Errors
///
/// Returns `Error::NumericConversion` if `period` cannot be represented.
///
/// # Example
///
/// ```
/// use ohlc_ta::kernels::smoothing::{exponential_smooth, Seed};
///
/// let data = [f64::NAN, 2.0, 4.0, 6.0];
/// let first = exponential_smooth(&data, 0.5, Seed::First, 2).unwrap();
/// assert!(first[0].is_nan());
/// assert_eq!(&first[1..], &[2.0, 3.0, 4.5]);
///
/// let sma = exponential_smooth(&data, 0.5, Seed::Sma, 2).unwrap();
/// assert!(sma[1].is_nan());
/// assert_eq!(&sma[2..], &[3.0, 4.5]);
/// ```
pub fn exponential_smooth<T: SeriesElement>(
    data: &[T],
    alpha: T,
    seed: Seed,
    period: usize,
) -> Result<Vec<T>> {
    let n = data.len();
    let mut out = vec![T::nan(); n];

    let Some(start) = data.iter().position(|v| !v.is_nan()) else {
        return Ok(out);
    };

    let (seed_index, seed_value) = match seed {
        Seed::First => (start, data[start]),
        Seed::Sma => {
            let period = period.max(1);
            let end = start + period;
            if end > n {
                return Ok(out);
            }
            let sum = data[start..end].iter().fold(T::zero(), |acc, &v| acc + v);
            (end - 1, sum / T::from_usize(period)?)
        }
    };

    let decay = T::one() - alpha;
    let mut state = seed_value;
    out[seed_index] = state;
    for i in seed_index + 1..n {
        state = alpha * data[i] + decay * state;
        out[i] = state;
    }

    Ok(out)
}

/// Wilder's smoothing: `alpha = 1 / period`, seeded with the SMA of the first
/// `period` values.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `period` is zero
/// - `Error::NumericConversion` if the period cannot be represented
pub fn wilder_smooth<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    exponential_smooth(data, wilder_alpha(period)?, Seed::Sma, period)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]

    use super::*;
    use crate::utils::approx_eq;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_alphas() {
        let a: f64 = ema_alpha(3).unwrap();
        assert!(approx_eq(a, 0.5, EPSILON));
        let w: f64 = wilder_alpha(4).unwrap();
        assert!(approx_eq(w, 0.25, EPSILON));
        assert!(ema_alpha::<f64>(0).is_err());
        assert!(wilder_alpha::<f32>(0).is_err());
    }

    #[test]
    fn test_first_seed_no_warmup() {
        let data = vec![10.0_f64, 20.0, 30.0];
        let out = exponential_smooth(&data, 0.5, Seed::First, 3).unwrap();
        assert!(approx_eq(out[0], 10.0, EPSILON));
        assert!(approx_eq(out[1], 15.0, EPSILON));
        assert!(approx_eq(out[2], 22.5, EPSILON));
    }

    #[test]
    fn test_sma_seed_warmup() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let out = exponential_smooth(&data, 0.5, Seed::Sma, 3).unwrap();
        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert!(approx_eq(out[2], 2.0, EPSILON));
        assert!(approx_eq(out[3], 3.0, EPSILON));
        assert!(approx_eq(out[4], 4.0, EPSILON));
    }

    #[test]
    fn test_sma_seed_not_enough_values() {
        let data = vec![f64::NAN, 1.0, 2.0];
        let out = exponential_smooth(&data, 0.5, Seed::Sma, 3).unwrap();
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_all_nan_input() {
        let data = vec![f64::NAN; 4];
        let out = exponential_smooth(&data, 0.5, Seed::First, 2).unwrap();
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_interior_nan_propagates() {
        let data = vec![1.0_f64, 2.0, f64::NAN, 4.0];
        let out = exponential_smooth(&data, 0.5, Seed::First, 2).unwrap();
        assert!(!out[1].is_nan());
        assert!(out[2].is_nan());
        assert!(out[3].is_nan());
    }

    #[test]
    fn test_wilder_smooth() {
        let data = vec![2.0_f64, 4.0, 6.0, 8.0];
        let out = wilder_smooth(&data, 2).unwrap();
        assert!(out[0].is_nan());
        assert!(approx_eq(out[1], 3.0, EPSILON));
        assert!(approx_eq(out[2], 4.5, EPSILON));
        assert!(approx_eq(out[3], 6.25, EPSILON));
    }
}
