//! True Range, Average True Range (ATR) and Normalized ATR.
//!
//! True Range captures the full extent of a bar including any gap from the
//! prior close. ATR is Wilder's smoothed average of it, seeded with the simple
//! mean of the first `period` true ranges, so the first ATR value sits at
//! index `period - 1`.
//!
//! ```text
//! TR[0]  = high[0] − low[0]
//! TR[i]  = max(high − low, |high − close[i-1]|, |low − close[i-1]|)
//! ATR    = Wilder(TR, period)
//! NATR   = 100 × ATR / close
//! ```
//!
//! For well-formed bars (high ≥ low) TR and ATR are never negative.
//!
//! # Example
//!
//! ```
//! use ohlc_ta::indicators::atr::{atr, true_range};
//!
//! let high = vec![48.70_f64, 48.72, 48.90, 48.87, 48.82];
//! let low = vec![47.79_f64, 48.14, 48.39, 48.37, 48.24];
//! let close = vec![48.16_f64, 48.61, 48.75, 48.63, 48.74];
//!
//! let tr = true_range(&high, &low, &close).unwrap();
//! assert!((tr[0] - 0.91).abs() < 1e-10);
//!
//! let out = atr(&high, &low, &close, 3).unwrap();
//! assert!(out[1].is_nan());
//! assert!(!out[2].is_nan());
//! ```

use crate::error::Result;
use crate::kernels::smoothing::wilder_smooth;
use crate::kernels::true_range::true_range_series;
use crate::traits::{validate_indicator_input, validate_period, validate_same_length, SeriesElement};
use crate::utils::safe_div;

/// Returns the lookback period for True Range (0: defined from the first bar).
#[inline]
#[must_use]
pub const fn true_range_lookback() -> usize {
    0
}

/// Returns the lookback period for ATR.
#[inline]
#[must_use]
pub const fn atr_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Returns the minimum input length for ATR.
#[inline]
#[must_use]
pub const fn atr_min_len(period: usize) -> usize {
    if period == 0 {
        1
    } else {
        period
    }
}

/// Computes the True Range of every bar.
///
/// # Errors
///
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
pub fn true_range<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    validate_same_length(&[("high", high), ("low", low), ("close", close)])?;
    Ok(true_range_series(high, low, close))
}

/// Computes the Average True Range.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
/// - `Error::InsufficientData` if the series is shorter than the period
pub fn atr<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    validate_period(period)?;
    validate_same_length(&[("high", high), ("low", low), ("close", close)])?;
    validate_indicator_input(high, period, "atr")?;
    let tr = true_range_series(high, low, close);
    wilder_smooth(&tr, period)
}

/// Computes the Normalized ATR: ATR as a percentage of the close.
///
/// A zero close yields NaN.
///
/// # Errors
///
/// Same conditions as [`atr`].
pub fn natr<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    let atr_values = atr(high, low, close, period)?;
    Ok(atr_values
        .iter()
        .zip(close)
        .map(|(&a, &c)| T::hundred() * safe_div(a, c))
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]

    use super::*;
    use crate::error::Error;
    use crate::utils::approx_eq;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_atr_seed_and_smoothing() {
        let high = vec![10.0_f64, 11.0, 12.0, 13.0];
        let low = vec![8.0_f64, 9.0, 10.0, 9.0];
        let close = vec![9.0_f64, 10.0, 11.0, 12.0];
        // TR: 2, 2, 2, 4
        let out = atr(&high, &low, &close, 3).unwrap();
        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert!(approx_eq(out[2], 2.0, EPSILON));
        assert!(approx_eq(out[3], (2.0 * 2.0 + 4.0) / 3.0, EPSILON));
    }

    #[test]
    fn test_atr_period_one_equals_tr() {
        let high = vec![10.0_f64, 15.0, 9.0];
        let low = vec![8.0_f64, 13.0, 7.0];
        let close = vec![9.0_f64, 14.0, 8.0];
        let tr = true_range(&high, &low, &close).unwrap();
        let out = atr(&high, &low, &close, 1).unwrap();
        assert_eq!(tr, out);
    }

    #[test]
    fn test_natr() {
        let high = vec![11.0_f64, 11.0];
        let low = vec![9.0_f64, 9.0];
        let close = vec![10.0_f64, 0.0];
        let out = natr(&high, &low, &close, 1).unwrap();
        assert!(approx_eq(out[0], 20.0, EPSILON));
        assert!(out[1].is_nan());
    }

    #[test]
    fn test_atr_non_negative() {
        let close: Vec<f64> = (0..50).map(|i| 20.0 + (i as f64 * 1.3).sin() * 4.0).collect();
        let high: Vec<f64> = close.iter().map(|c| c + 0.5).collect();
        let low: Vec<f64> = close.iter().map(|c| c - 0.7).collect();
        let out = atr(&high, &low, &close, 7).unwrap();
        assert!(out[6..].iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_atr_errors() {
        let h = vec![1.0_f64, 2.0];
        let l = vec![0.5_f64, 1.5];
        let c = vec![0.8_f64, 1.8];
        assert!(matches!(atr(&h, &l, &c, 0), Err(Error::InvalidPeriod { .. })));
        assert!(matches!(atr(&h, &l, &c, 3), Err(Error::InsufficientData { .. })));
        assert!(matches!(
            atr(&h, &l, &c[..1], 1),
            Err(Error::LengthMismatch { .. })
        ));
    }
}
