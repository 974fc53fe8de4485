//! Volume Weighted Average Price (VWAP) indicator.
//!
//! Anchored (cumulative) VWAP from the first bar:
//!
//! ```text
//! Typical Price = (High + Low + Close) / 3
//! VWAP[i] = cumsum(Typical Price × Volume)[i] / cumsum(Volume)[i]
//! ```
//!
//! # NaN Handling
//!
//! - A bar with any NaN input is skipped; the cumulative sums carry forward
//! - VWAP is NaN while cumulative volume is zero
//!
//! There are no session resets; segment the input by session for intraday
//! VWAP.
//!
//! # Example
//!
//! ```
//! use ohlc_ta::indicators::vwap::vwap;
//!
//! let high = vec![10.5_f64, 11.0, 10.8, 11.2, 11.0];
//! let low = vec![10.0_f64, 10.3, 10.2, 10.5, 10.3];
//! let close = vec![10.2_f64, 10.8, 10.5, 11.0, 10.7];
//! let volume = vec![1000.0, 1500.0, 1200.0, 1800.0, 1100.0];
//!
//! let result = vwap(&high, &low, &close, &volume).unwrap();
//! assert_eq!(result.len(), 5);
//! assert!(result.iter().all(|v| !v.is_nan()));
//! ```

use crate::error::Result;
use crate::indicators::price_transform::typical_price_unchecked;
use crate::traits::{validate_same_length, SeriesElement};
use crate::utils::safe_div;

/// Returns the lookback period for VWAP (0: defined from the first bar).
#[inline]
#[must_use]
pub const fn vwap_lookback() -> usize {
    0
}

/// Computes the anchored Volume Weighted Average Price.
///
/// # Errors
///
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
pub fn vwap<T: SeriesElement>(high: &[T], low: &[T], close: &[T], volume: &[T]) -> Result<Vec<T>> {
    validate_same_length(&[("high", high), ("low", low), ("close", close), ("volume", volume)])?;

    let tp = typical_price_unchecked(high, low, close);
    let mut value = T::zero();
    let mut total_volume = T::zero();
    Ok(tp
        .iter()
        .zip(volume)
        .map(|(&p, &v)| {
            if !(p.is_nan() || v.is_nan()) {
                value = value + p * v;
                total_volume = total_volume + v;
            }
            safe_div(value, total_volume)
        })
        .collect())
}
