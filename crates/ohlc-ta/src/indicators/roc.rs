//! Rate of Change (ROC) and Momentum.
//!
//! Both compare the current value with the value `period` bars ago:
//!
//! ```text
//! MOM[i] = Price[i] − Price[i-period]
//! ROC[i] = 100 × (Price[i] − Price[i-period]) / Price[i-period]
//! ```
//!
//! The first `period` values are NaN. A zero reference price makes ROC NaN.
//!
//! # Example
//!
//! ```
//! use ohlc_ta::indicators::roc::{momentum, roc};
//!
//! let data = vec![10.0_f64, 11.0, 12.0, 9.0];
//! let r = roc(&data, 2).unwrap();
//! assert!(r[1].is_nan());
//! assert!((r[2] - 20.0).abs() < 1e-10);
//!
//! let m = momentum(&data, 2).unwrap();
//! assert_eq!(m[3], -2.0);
//! ```

use crate::error::Result;
use crate::traits::{validate_indicator_input, validate_period, SeriesElement};
use crate::utils::safe_div;

/// Returns the lookback period for ROC and momentum.
#[inline]
#[must_use]
pub const fn roc_lookback(period: usize) -> usize {
    period
}

/// Returns the minimum input length for ROC and momentum.
#[inline]
#[must_use]
pub const fn roc_min_len(period: usize) -> usize {
    period + 1
}

fn lagged<T: SeriesElement>(data: &[T], period: usize, f: impl Fn(T, T) -> T) -> Vec<T> {
    let mut out = vec![T::nan(); data.len()];
    for i in period..data.len() {
        out[i] = f(data[i], data[i - period]);
    }
    out
}

/// Computes the percentage Rate of Change.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::InsufficientData` if the data is shorter than `period + 1`
pub fn roc<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;
    validate_indicator_input(data, roc_min_len(period), "roc")?;
    Ok(lagged(data, period, |now, then| {
        T::hundred() * safe_div(now - then, then)
    }))
}

/// Computes Momentum, the absolute change over `period` bars.
///
/// # Errors
///
/// Same conditions as [`roc`].
pub fn momentum<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;
    validate_indicator_input(data, roc_min_len(period), "momentum")?;
    Ok(lagged(data, period, |now, then| now - then))
}
