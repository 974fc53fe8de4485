//! Williams %R indicator.
//!
//! Williams %R places the close within the high-low range of a lookback
//! window, on a negative scale from -100 to 0:
//!
//! ```text
//! %R = -100 × (Highest High − Close) / (Highest High − Lowest Low)
//! ```
//!
//! - %R = 0: close at the highest high
//! - %R = -100: close at the lowest low
//!
//! A window with no range (Highest High == Lowest Low) is NaN.
//!
//! # Example
//!
//! ```
//! use ohlc_ta::indicators::williams_r::williams_r;
//!
//! let high = vec![48.70_f64, 48.72, 48.90, 48.87, 48.82, 49.05, 49.20, 49.35];
//! let low = vec![47.79_f64, 48.14, 48.39, 48.37, 48.24, 48.64, 48.94, 48.86];
//! let close = vec![48.16_f64, 48.61, 48.75, 48.63, 48.74, 49.03, 49.07, 49.32];
//!
//! let result = williams_r(&high, &low, &close, 5).unwrap();
//! assert!(result[3].is_nan());
//! for v in &result[4..] {
//!     assert!(*v >= -100.0 && *v <= 0.0);
//! }
//! ```

use crate::error::Result;
use crate::kernels::rolling_extrema::{rolling_extremum_unchecked, Extremum};
use crate::traits::{validate_indicator_input, validate_period, validate_same_length, SeriesElement};
use crate::utils::safe_div;

/// Returns the lookback period for Williams %R.
///
/// ```
/// use ohlc_ta::indicators::williams_r::williams_r_lookback;
///
/// assert_eq!(williams_r_lookback(14), 13);
/// ```
#[inline]
#[must_use]
pub const fn williams_r_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Returns the minimum input length required for Williams %R.
#[inline]
#[must_use]
pub const fn williams_r_min_len(period: usize) -> usize {
    period
}

/// Computes Williams %R.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the series have different lengths
/// - `Error::InsufficientData` if the input is shorter than the period
pub fn williams_r<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<T>> {
    validate_period(period)?;
    validate_same_length(&[("high", high), ("low", low), ("close", close)])?;
    validate_indicator_input(high, period, "williams_r")?;

    let highest = rolling_extremum_unchecked(high, period, Extremum::Max);
    let lowest = rolling_extremum_unchecked(low, period, Extremum::Min);
    let minus_hundred = -T::hundred();

    Ok(close
        .iter()
        .zip(highest.iter().zip(&lowest))
        .map(|(&c, (&hh, &ll))| minus_hundred * safe_div(hh - c, hh - ll))
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_extremes() {
        let high = vec![10.0_f64, 12.0, 14.0];
        let low = vec![8.0_f64, 9.0, 10.0];
        let at_high = vec![9.0_f64, 11.0, 14.0];
        let out = williams_r(&high, &low, &at_high, 3).unwrap();
        assert_eq!(out[2], 0.0);

        let at_low = vec![9.0_f64, 11.0, 8.0];
        let out = williams_r(&high, &low, &at_low, 3).unwrap();
        assert_eq!(out[2], -100.0);

        let mid = vec![9.0_f64, 11.0, 11.0];
        let out = williams_r(&high, &low, &mid, 3).unwrap();
        assert_eq!(out[2], -50.0);
    }

    #[test]
    fn test_zero_range_is_nan() {
        let flat = vec![5.0_f64; 4];
        let out = williams_r(&flat, &flat, &flat, 2).unwrap();
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_errors() {
        let h = vec![1.0_f64, 2.0];
        assert!(matches!(williams_r(&h, &h, &h, 0), Err(Error::InvalidPeriod { .. })));
        assert!(matches!(williams_r(&h, &h, &h, 3), Err(Error::InsufficientData { .. })));
        assert!(matches!(
            williams_r(&h, &h[..1], &h, 1),
            Err(Error::LengthMismatch { .. })
        ));
    }
}
