//! CCI (Commodity Channel Index) indicator.
//!
//! The Commodity Channel Index measures how far the typical price sits from
//! its moving average, in units of the window's mean absolute deviation.
//!
//! # Formula
//!
//! ```text
//! Typical Price = (High + Low + Close) / 3
//! CCI = (TP − SMA(TP, period)) / (0.015 × Mean Deviation)
//! ```
//!
//! With Lambert's constant 0.015 roughly 70-80% of values fall in ±100.
//! A window whose mean deviation is zero (flat typical price) is NaN.
//!
//! # Lookback
//!
//! The lookback period is `period - 1`. The mean deviation is recomputed per
//! window, so the cost is O(n × period).

use crate::error::Result;
use crate::indicators::price_transform::typical_price_unchecked;
use crate::kernels::rolling::rolling_mean_unchecked;
use crate::traits::{validate_indicator_input, validate_period, validate_same_length, SeriesElement};
use crate::utils::safe_div;

/// Lambert's scaling constant.
pub const CCI_CONSTANT: f64 = 0.015;

/// Computes the lookback period for CCI.
#[inline]
#[must_use]
pub const fn cci_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Returns the minimum input length required for CCI calculation.
#[inline]
#[must_use]
pub const fn cci_min_len(period: usize) -> usize {
    period
}

/// Computes CCI (Commodity Channel Index).
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
/// - `Error::InsufficientData` if the input is shorter than the period
///
/// # Example
///
/// ```
/// use ohlc_ta::indicators::cci::cci;
///
/// let high = vec![25.0_f64, 26.0, 27.0, 28.0, 27.5, 27.0, 26.5, 26.0, 25.5, 25.0];
/// let low = vec![23.0_f64, 24.0, 25.0, 26.0, 25.5, 25.0, 24.5, 24.0, 23.5, 23.0];
/// let close = vec![24.0_f64, 25.0, 26.0, 27.0, 26.5, 26.0, 25.5, 25.0, 24.5, 24.0];
///
/// let result = cci(&high, &low, &close, 5).unwrap();
/// assert!(result[3].is_nan());
/// assert!(result[4].is_finite());
/// ```
pub fn cci<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;
    validate_same_length(&[("high", high), ("low", low), ("close", close)])?;
    validate_indicator_input(high, cci_min_len(period), "cci")?;

    let tp = typical_price_unchecked(high, low, close);
    let tp_sma = rolling_mean_unchecked(&tp, period)?;
    let period_t = T::from_usize(period)?;
    let constant = T::from_f64(CCI_CONSTANT)?;

    let mut out = vec![T::nan(); tp.len()];
    for i in cci_lookback(period)..tp.len() {
        let mean = tp_sma[i];
        if mean.is_nan() {
            continue;
        }
        let deviation_sum = tp[i + 1 - period..=i]
            .iter()
            .fold(T::zero(), |acc, &x| acc + (x - mean).abs());
        let mean_deviation = deviation_sum / period_t;
        out[i] = safe_div(tp[i] - mean, constant * mean_deviation);
    }

    Ok(out)
}
