//! Donchian Channels indicator.
//!
//! Donchian Channels show the highest high and lowest low over a lookback
//! window:
//!
//! ```text
//! Upper  = max(High[i-period+1..=i])
//! Lower  = min(Low[i-period+1..=i])
//! Middle = (Upper + Lower) / 2
//! ```
//!
//! The first `period - 1` values are NaN. A NaN high (low) inside the window
//! makes the upper (lower) band and the middle band NaN for that window.
//!
//! # Example
//!
//! ```
//! use ohlc_ta::indicators::donchian::donchian;
//!
//! let high = vec![48.70_f64, 48.72, 48.90, 48.87, 48.82, 49.05, 49.20, 49.35];
//! let low = vec![47.79_f64, 48.14, 48.39, 48.37, 48.24, 48.64, 48.94, 48.86];
//!
//! let result = donchian(&high, &low, 5).unwrap();
//! assert!(result.upper[3].is_nan());
//! for i in 4..result.upper.len() {
//!     assert!(result.upper[i] >= result.middle[i]);
//!     assert!(result.middle[i] >= result.lower[i]);
//! }
//! ```

use crate::error::Result;
use crate::kernels::rolling_extrema::{rolling_extremum_unchecked, Extremum};
use crate::traits::{validate_indicator_input, validate_period, validate_same_length, SeriesElement};

/// Output structure for Donchian Channels containing upper, middle, and lower bands.
#[derive(Debug, Clone, PartialEq)]
pub struct DonchianOutput<T> {
    /// Upper band: highest high over the period.
    pub upper: Vec<T>,
    /// Middle band: average of upper and lower.
    pub middle: Vec<T>,
    /// Lower band: lowest low over the period.
    pub lower: Vec<T>,
}

/// Returns the lookback period for Donchian Channels.
///
/// ```
/// use ohlc_ta::indicators::donchian::donchian_lookback;
///
/// assert_eq!(donchian_lookback(20), 19);
/// ```
#[inline]
#[must_use]
pub const fn donchian_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Returns the minimum input length required for Donchian Channels.
#[inline]
#[must_use]
pub const fn donchian_min_len(period: usize) -> usize {
    period
}

/// Computes Donchian Channels for high/low price data.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the series have different lengths
/// - `Error::InsufficientData` if the input is shorter than the period
pub fn donchian<T: SeriesElement>(high: &[T], low: &[T], period: usize) -> Result<DonchianOutput<T>> {
    validate_period(period)?;
    validate_same_length(&[("high", high), ("low", low)])?;
    validate_indicator_input(high, period, "donchian")?;

    let upper = rolling_extremum_unchecked(high, period, Extremum::Max);
    let lower = rolling_extremum_unchecked(low, period, Extremum::Min);
    let middle = upper
        .iter()
        .zip(&lower)
        .map(|(&hh, &ll)| (hh + ll) / T::two())
        .collect();

    Ok(DonchianOutput {
        upper,
        middle,
        lower,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_donchian_basic() {
        let high = vec![10.0_f64, 12.0, 11.0, 9.0, 13.0];
        let low = vec![8.0_f64, 9.0, 7.0, 8.0, 10.0];
        let out = donchian(&high, &low, 3).unwrap();
        assert!(out.upper[1].is_nan());
        assert_eq!(&out.upper[2..], &[12.0, 12.0, 13.0]);
        assert_eq!(&out.lower[2..], &[7.0, 7.0, 7.0]);
        assert_eq!(&out.middle[2..], &[9.5, 9.5, 10.0]);
    }

    #[test]
    fn test_nan_high_only_affects_its_windows() {
        let high = vec![10.0_f64, f64::NAN, 11.0, 9.0, 13.0];
        let low = vec![8.0_f64, 9.0, 7.0, 8.0, 10.0];
        let out = donchian(&high, &low, 2).unwrap();
        assert!(out.upper[1].is_nan());
        assert!(out.upper[2].is_nan());
        assert!(out.middle[2].is_nan());
        assert_eq!(out.lower[2], 7.0);
        assert_eq!(out.upper[3], 11.0);
    }

    #[test]
    fn test_donchian_errors() {
        let high = vec![10.0_f64, 12.0];
        let low = vec![8.0_f64, 9.0];
        assert!(matches!(donchian(&high, &low, 0), Err(Error::InvalidPeriod { .. })));
        assert!(matches!(donchian(&high, &low, 3), Err(Error::InsufficientData { .. })));
        assert!(matches!(donchian(&high, &low[..1], 1), Err(Error::LengthMismatch { .. })));
    }
}
