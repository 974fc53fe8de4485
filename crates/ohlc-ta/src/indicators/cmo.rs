//! CMO (Chande Momentum Oscillator) indicator.
//!
//! The Chande Momentum Oscillator compares the sum of gains to the sum of
//! losses over a window, without smoothing.
//!
//! # Formula
//!
//! ```text
//! CMO = 100 × (Σ gains − Σ losses) / (Σ gains + Σ losses)
//! ```
//!
//! # Range
//!
//! CMO ranges from -100 to +100:
//! - +100: all gains, no losses
//! - -100: all losses, no gains
//! - 0: equal gains and losses, or no movement at all
//!
//! # Lookback
//!
//! The lookback period is `period`.

use crate::error::Result;
use crate::indicators::rsi::gains_and_losses;
use crate::kernels::rolling::rolling_sum_unchecked;
use crate::traits::{validate_indicator_input, validate_period, SeriesElement};

/// Computes the lookback period for CMO.
#[inline]
#[must_use]
pub const fn cmo_lookback(period: usize) -> usize {
    period
}

/// Returns the minimum input length required for CMO calculation.
#[inline]
#[must_use]
pub const fn cmo_min_len(period: usize) -> usize {
    period + 1
}

/// Computes the Chande Momentum Oscillator.
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
/// use ohlc_ta::indicators::cmo::cmo;
///
/// let data = vec![1.0_f64, 2.0, 3.0, 2.0, 3.0];
/// let out = cmo(&data, 2).unwrap();
/// assert!(out[1].is_nan());
/// assert_eq!(out[2], 100.0);
/// assert_eq!(out[3], 0.0);
/// ```
pub fn cmo<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;
    validate_indicator_input(data, cmo_min_len(period), "cmo")?;

    let (gains, losses) = gains_and_losses(data);
    let gain_sum = rolling_sum_unchecked(&gains, period);
    let loss_sum = rolling_sum_unchecked(&losses, period);

    Ok(gain_sum
        .iter()
        .zip(&loss_sum)
        .map(|(&g, &l)| {
            let total = g + l;
            if total.is_nan() {
                T::nan()
            } else if total == T::zero() {
                T::zero()
            } else {
                T::hundred() * ((g - l) / total)
            }
        })
        .collect())
}
