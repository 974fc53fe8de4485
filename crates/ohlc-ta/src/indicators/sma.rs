//! Simple Moving Average (SMA) indicator.
//!
//! The Simple Moving Average is the arithmetic mean of the last `period`
//! values. It is computed with the O(n) rolling sum kernel: add the newest
//! value, subtract the one leaving the window.
//!
//! # Formula
//!
//! ```text
//! SMA[i] = (P[i-period+1] + ... + P[i]) / period
//! ```
//!
//! # Example
//!
//! ```
//! use ohlc_ta::indicators::sma::sma;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! assert!((result[2] - 2.0).abs() < 1e-10); // (1+2+3)/3
//! assert!((result[4] - 4.0).abs() < 1e-10); // (3+4+5)/3
//! ```

use crate::error::Result;
use crate::kernels::rolling::rolling_mean_unchecked;
use crate::traits::{validate_indicator_input, SeriesElement};

/// Returns the lookback period for SMA.
///
/// The first `period - 1` outputs are NaN.
#[inline]
#[must_use]
pub const fn sma_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Returns the minimum input length for SMA.
#[inline]
#[must_use]
pub const fn sma_min_len(period: usize) -> usize {
    if period == 0 {
        1
    } else {
        period
    }
}

/// Computes the Simple Moving Average of a data series.
///
/// Returns a vector of the same length as the input, where the first
/// `period - 1` values are NaN.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::InsufficientData` if the data is shorter than the period
///
/// # NaN Handling
///
/// A NaN in the input makes every window containing it NaN; the average
/// recovers once the NaN has rolled out of the window.
pub fn sma<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_indicator_input(data, period, "sma")?;
    rolling_mean_unchecked(data, period)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]

    use super::*;
    use crate::error::Error;
    use crate::utils::approx_eq;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_sma_basic() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let result = sma(&data, 3).unwrap();
        assert_eq!(result.len(), 5);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert!(approx_eq(result[2], 2.0, EPSILON));
        assert!(approx_eq(result[3], 3.0, EPSILON));
        assert!(approx_eq(result[4], 4.0, EPSILON));
    }

    #[test]
    fn test_sma_f32() {
        let data = vec![1.0_f32, 2.0, 3.0, 4.0, 5.0];
        let result = sma(&data, 3).unwrap();
        assert!((result[2] - 2.0).abs() < 1e-5);
        assert!((result[4] - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_sma_known_values() {
        let data = vec![
            22.27_f64, 22.19, 22.08, 22.17, 22.18, 22.13, 22.23, 22.43, 22.24, 22.29,
        ];
        let result = sma(&data, 5).unwrap();
        assert!(approx_eq(result[4], 22.178, 1e-6));
        assert!(approx_eq(result[5], 22.15, 1e-6));
    }

    #[test]
    fn test_sma_period_equals_length() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let result = sma(&data, 5).unwrap();
        assert!(result[..4].iter().all(|v| v.is_nan()));
        assert!(approx_eq(result[4], 3.0, EPSILON));
    }

    #[test]
    fn test_sma_with_nan_in_data() {
        let data = vec![1.0_f64, 2.0, f64::NAN, 4.0, 5.0, 6.0];
        let result = sma(&data, 3).unwrap();
        assert!(result[2].is_nan());
        assert!(result[3].is_nan());
        assert!(result[4].is_nan());
        assert!(approx_eq(result[5], 5.0, EPSILON));
    }

    #[test]
    fn test_sma_window_larger_than_series() {
        let data = vec![1.0_f64, 2.0];
        assert!(matches!(
            sma(&data, 3),
            Err(Error::InsufficientData { required: 3, actual: 2, indicator: "sma" })
        ));
    }

    #[test]
    fn test_sma_zero_period() {
        assert!(matches!(sma(&[1.0_f64], 0), Err(Error::InvalidPeriod { .. })));
    }

    #[test]
    fn test_lookback() {
        assert_eq!(sma_lookback(20), 19);
        assert_eq!(sma_min_len(20), 20);
    }
}
