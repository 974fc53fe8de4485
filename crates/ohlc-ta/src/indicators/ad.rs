//! Chaikin Accumulation/Distribution Line (A/D) and Chaikin Money Flow (CMF).
//!
//! Both weight volume by where the close sits in the bar's range:
//!
//! ```text
//! CLV = ((close − low) − (high − close)) / (high − low)
//! MFV = CLV × volume
//! A/D = cumulative sum of MFV
//! CMF = Σ MFV / Σ volume       over a window
//! ```
//!
//! # Edge Cases
//!
//! - A zero-range bar (`high == low`) has an undefined CLV (NaN from
//!   [`close_location_value`]); its money-flow volume counts as zero so the
//!   cumulative line keeps going.
//! - A bar with a NaN input also contributes zero to the A/D line. Inside a
//!   CMF window it makes that window NaN.
//!
//! # Example
//!
//! ```
//! use ohlc_ta::indicators::ad::ad;
//!
//! let high = [25.0_f64, 26.0, 25.5, 26.5, 27.0];
//! let low = [24.0_f64, 24.5, 24.0, 25.0, 25.5];
//! let close = [24.5_f64, 25.5, 24.5, 26.0, 26.5];
//! let volume = [1000.0_f64, 1500.0, 1200.0, 1800.0, 2000.0];
//!
//! let result = ad(&high, &low, &close, &volume).unwrap();
//! assert_eq!(result.len(), 5);
//! assert_eq!(result[0], 0.0);
//! ```

use crate::error::Result;
use crate::kernels::rolling::rolling_sum_unchecked;
use crate::traits::{validate_indicator_input, validate_period, validate_same_length, SeriesElement};
use crate::utils::safe_div;

/// Returns the lookback period for A/D (0: defined from the first bar).
#[inline]
#[must_use]
pub const fn ad_lookback() -> usize {
    0
}

/// Returns the lookback period for CMF.
#[inline]
#[must_use]
pub const fn cmf_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Returns the minimum input length for CMF.
#[inline]
#[must_use]
pub const fn cmf_min_len(period: usize) -> usize {
    period
}

fn clv_unchecked<T: SeriesElement>(high: T, low: T, close: T) -> T {
    safe_div((close - low) - (high - close), high - low)
}

/// Money-flow volume per bar: zero for zero-range bars, NaN for NaN inputs.
fn money_flow_volume<T: SeriesElement>(high: &[T], low: &[T], close: &[T], volume: &[T]) -> Vec<T> {
    (0..high.len())
        .map(|i| {
            let (h, l, c, v) = (high[i], low[i], close[i], volume[i]);
            if h.is_nan() || l.is_nan() || c.is_nan() || v.is_nan() {
                T::nan()
            } else if h == l {
                T::zero()
            } else {
                clv_unchecked(h, l, c) * v
            }
        })
        .collect()
}

/// Computes the Close Location Value of every bar, in `[-1, 1]`.
///
/// Zero-range bars are NaN.
///
/// # Errors
///
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
pub fn close_location_value<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    validate_same_length(&[("high", high), ("low", low), ("close", close)])?;
    Ok(high
        .iter()
        .zip(low)
        .zip(close)
        .map(|((&h, &l), &c)| clv_unchecked(h, l, c))
        .collect())
}

/// Computes the Accumulation/Distribution line.
///
/// # Errors
///
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
pub fn ad<T: SeriesElement>(high: &[T], low: &[T], close: &[T], volume: &[T]) -> Result<Vec<T>> {
    validate_same_length(&[("high", high), ("low", low), ("close", close), ("volume", volume)])?;

    let mut running = T::zero();
    Ok(money_flow_volume(high, low, close, volume)
        .into_iter()
        .map(|mfv| {
            if !mfv.is_nan() {
                running = running + mfv;
            }
            running
        })
        .collect())
}

/// Computes Chaikin Money Flow over a rolling window.
///
/// A window with zero total volume is NaN.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
/// - `Error::InsufficientData` if the input is shorter than the period
pub fn cmf<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
    period: usize,
) -> Result<Vec<T>> {
    validate_period(period)?;
    validate_same_length(&[("high", high), ("low", low), ("close", close), ("volume", volume)])?;
    validate_indicator_input(high, cmf_min_len(period), "cmf")?;

    let mfv = money_flow_volume(high, low, close, volume);
    let flow_sum = rolling_sum_unchecked(&mfv, period);
    let volume_sum = rolling_sum_unchecked(volume, period);

    Ok(flow_sum
        .iter()
        .zip(&volume_sum)
        .map(|(&f, &v)| safe_div(f, v))
        .collect())
}
