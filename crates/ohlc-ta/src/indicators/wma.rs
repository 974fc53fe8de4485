//! Weighted and triangular moving averages.
//!
//! # Weighted Moving Average
//!
//! Linearly weighted: the newest value has weight `period`, the oldest weight 1.
//!
//! ```text
//! WMA[i] = (1·P[i-period+1] + 2·P[i-period+2] + ... + period·P[i]) / (period·(period+1)/2)
//! ```
//!
//! Computed in O(n) by carrying the plain window sum `S` next to the weighted
//! sum `W`: sliding the window by one bar gives `W' = W + period·P_new − S` and
//! `S' = S + P_new − P_old`.
//!
//! # Triangular Moving Average
//!
//! An SMA of an SMA. The two window lengths are chosen so the combined warm-up
//! is `period - 1`, like every other single-window average.

use crate::error::Result;
use crate::kernels::rolling::{rolling_mean_unchecked, RESYNC_INTERVAL};
use crate::traits::{validate_indicator_input, SeriesElement};

/// Returns the lookback period for WMA.
#[inline]
#[must_use]
pub const fn wma_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Returns the minimum input length for WMA.
#[inline]
#[must_use]
pub const fn wma_min_len(period: usize) -> usize {
    if period == 0 {
        1
    } else {
        period
    }
}

/// Returns the lookback period for TRIMA (equal to `period - 1`).
#[inline]
#[must_use]
pub const fn trima_lookback(period: usize) -> usize {
    wma_lookback(period)
}

/// Computes the linearly Weighted Moving Average.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::InsufficientData` if the data is shorter than the period
///
/// # Example
///
/// ```
/// use ohlc_ta::indicators::wma::wma;
///
/// let out = wma(&[1.0_f64, 2.0, 3.0, 4.0], 3).unwrap();
/// // (1·1 + 2·2 + 3·3) / 6
/// assert!((out[2] - 14.0 / 6.0).abs() < 1e-12);
/// ```
pub fn wma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_indicator_input(data, period, "wma")?;

    let n = data.len();
    let mut out = vec![T::nan(); n];
    let period_t = T::from_usize(period)?;
    let divisor = period_t * (period_t + T::one()) / T::two();

    let mut nan_count = data[..period].iter().filter(|v| v.is_nan()).count();
    let mut sums: Option<(T, T)> = None;

    for i in period - 1..n {
        if i >= period {
            if data[i].is_nan() {
                nan_count += 1;
            }
            if data[i - period].is_nan() {
                nan_count -= 1;
            }
        }

        if nan_count > 0 {
            sums = None;
            continue;
        }

        let start = i + 1 - period;
        let resync = (i + 1) % RESYNC_INTERVAL == 0;
        let (sum, weighted) = match sums {
            Some((sum, weighted)) if !resync => {
                let weighted = weighted + period_t * data[i] - sum;
                (sum + data[i] - data[start - 1], weighted)
            }
            _ => window_sums(&data[start..=i])?,
        };
        sums = Some((sum, weighted));
        out[i] = weighted / divisor;
    }

    Ok(out)
}

fn window_sums<T: SeriesElement>(window: &[T]) -> Result<(T, T)> {
    let mut sum = T::zero();
    let mut weighted = T::zero();
    for (k, &value) in window.iter().enumerate() {
        sum = sum + value;
        weighted = weighted + T::from_usize(k + 1)? * value;
    }
    Ok((sum, weighted))
}

/// Computes the Triangular Moving Average.
///
/// The first pass averages over `period / 2 + 1` bars and the second over the
/// remaining `period + 1 - (period / 2 + 1)` bars, so the weights form a
/// triangle peaking at the middle of the window.
///
/// # Errors
///
/// Same conditions as [`wma`].
///
/// # Example
///
/// ```
/// use ohlc_ta::indicators::wma::trima;
///
/// let data: Vec<f64> = (1..=10).map(f64::from).collect();
/// let out = trima(&data, 5).unwrap();
/// assert!(out[3].is_nan());
/// // symmetric weights centre a linear ramp
/// assert!((out[4] - 3.0).abs() < 1e-12);
/// ```
pub fn trima<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_indicator_input(data, period, "trima")?;
    let first = period / 2 + 1;
    let second = period + 1 - first;
    let inner = rolling_mean_unchecked(data, first)?;
    rolling_mean_unchecked(&inner, second)
}
