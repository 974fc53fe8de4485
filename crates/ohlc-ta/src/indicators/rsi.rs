//! Relative Strength Index (RSI) indicator.
//!
//! The Relative Strength Index is a momentum oscillator that measures the speed
//! and magnitude of price movements on a 0-100 scale.
//!
//! # Formula
//!
//! ```text
//! Change[i] = Price[i] - Price[i-1]
//! Gain[i]   = max(Change[i], 0)
//! Loss[i]   = max(-Change[i], 0)
//!
//! AvgGain   = Wilder(Gain, period)    seeded with SMA(Gain[1..=period])
//! AvgLoss   = Wilder(Loss, period)
//!
//! RSI = 100 × AvgGain / (AvgGain + AvgLoss)
//! ```
//!
//! which equals the textbook `100 − 100 / (1 + RS)` without dividing by a
//! zero average loss.
//!
//! # Boundary Conditions
//!
//! - **All gains (no losses)**: RSI = 100
//! - **All losses (no gains)**: RSI = 0
//! - **No movement**: RSI = 50
//!
//! # Example
//!
//! ```
//! use ohlc_ta::indicators::rsi::rsi;
//!
//! let data = vec![44.0_f64, 44.25, 44.5, 43.75, 44.5, 44.25, 44.0, 43.5, 43.25, 43.0];
//! let result = rsi(&data, 5).unwrap();
//!
//! assert!(result[4].is_nan());
//! assert!(!result[5].is_nan());
//! ```

use crate::error::Result;
use crate::kernels::smoothing::wilder_smooth;
use crate::traits::{validate_indicator_input, validate_period, SeriesElement};

/// Returns the lookback period for RSI (`period`: one bar is spent on the
/// first price change).
#[inline]
#[must_use]
pub const fn rsi_lookback(period: usize) -> usize {
    period
}

/// Returns the minimum input length for RSI.
#[inline]
#[must_use]
pub const fn rsi_min_len(period: usize) -> usize {
    period + 1
}

/// Splits bar-to-bar changes into gains and losses. Index 0 is NaN in both.
pub(crate) fn gains_and_losses<T: SeriesElement>(data: &[T]) -> (Vec<T>, Vec<T>) {
    let n = data.len();
    let mut gains = vec![T::nan(); n];
    let mut losses = vec![T::nan(); n];
    for i in 1..n {
        let change = data[i] - data[i - 1];
        if change.is_nan() {
            continue;
        }
        if change > T::zero() {
            gains[i] = change;
            losses[i] = T::zero();
        } else {
            gains[i] = T::zero();
            losses[i] = -change;
        }
    }
    (gains, losses)
}

/// Computes the Relative Strength Index using Wilder's smoothing.
///
/// The first `period` values are NaN.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::InsufficientData` if the data is shorter than `period + 1`
///
/// # Example
///
/// ```
/// use ohlc_ta::indicators::rsi::rsi;
///
/// let rising: Vec<f64> = (0..20).map(|i| i as f64).collect();
/// let out = rsi(&rising, 14).unwrap();
/// assert_eq!(out[14], 100.0);
/// ```
pub fn rsi<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;
    validate_indicator_input(data, rsi_min_len(period), "rsi")?;

    let (gains, losses) = gains_and_losses(data);
    let avg_gain = wilder_smooth(&gains, period)?;
    let avg_loss = wilder_smooth(&losses, period)?;

    Ok(avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(&g, &l)| strength_ratio(g, l))
        .collect())
}

/// `100 × up / (up + down)`, 50 when both are zero. NaN in, NaN out.
pub(crate) fn strength_ratio<T: SeriesElement>(up: T, down: T) -> T {
    if up.is_nan() || down.is_nan() {
        return T::nan();
    }
    let total = up + down;
    if total == T::zero() {
        T::fifty()
    } else {
        T::hundred() * (up / total)
    }
}
