//! MFI (Money Flow Index) indicator.
//!
//! The Money Flow Index is a volume-weighted RSI:
//!
//! ```text
//! Typical Price  = (High + Low + Close) / 3
//! Raw Money Flow = Typical Price × Volume
//! MFI = 100 × Σ positive flow / (Σ positive flow + Σ negative flow)
//! ```
//!
//! A bar's flow is positive when its typical price rose from the previous bar,
//! negative when it fell, and neither when unchanged.
//!
//! # Range
//!
//! MFI ranges from 0 to 100. A window with no negative flow saturates at
//! 100, one with no positive flow reads 0, and one with no flow at all
//! reads 50.
//!
//! # Lookback
//!
//! The lookback period is `period`.

use crate::error::Result;
use crate::indicators::price_transform::typical_price_unchecked;
use crate::indicators::rsi::strength_ratio;
use crate::kernels::rolling::rolling_sum_unchecked;
use crate::traits::{validate_indicator_input, validate_period, validate_same_length, SeriesElement};

/// Computes the lookback period for MFI.
#[inline]
#[must_use]
pub const fn mfi_lookback(period: usize) -> usize {
    period
}

/// Returns the minimum input length required for MFI calculation.
#[inline]
#[must_use]
pub const fn mfi_min_len(period: usize) -> usize {
    period + 1
}

/// Computes MFI (Money Flow Index).
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
/// - `Error::InsufficientData` if the input is shorter than `period + 1`
///
/// # Example
///
/// ```
/// use ohlc_ta::indicators::mfi::mfi;
///
/// let high = vec![25.0_f64, 26.0, 27.0, 28.0, 27.5, 27.0];
/// let low = vec![23.0_f64, 24.0, 25.0, 26.0, 25.5, 25.0];
/// let close = vec![24.0_f64, 25.0, 26.0, 27.0, 26.5, 26.0];
/// let volume = vec![1000.0_f64, 1100.0, 1200.0, 1300.0, 1400.0, 1500.0];
///
/// let result = mfi(&high, &low, &close, &volume, 3).unwrap();
/// assert!(result[2].is_nan());
/// assert_eq!(result[3], 100.0);
/// ```
pub fn mfi<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    volume: &[T],
    period: usize,
) -> Result<Vec<T>> {
    validate_period(period)?;
    validate_same_length(&[("high", high), ("low", low), ("close", close), ("volume", volume)])?;
    validate_indicator_input(high, mfi_min_len(period), "mfi")?;

    let n = high.len();
    let tp = typical_price_unchecked(high, low, close);
    let mut positive = vec![T::nan(); n];
    let mut negative = vec![T::nan(); n];
    for i in 1..n {
        let raw = tp[i] * volume[i];
        if raw.is_nan() || tp[i - 1].is_nan() {
            continue;
        }
        let (up, down) = if tp[i] > tp[i - 1] {
            (raw, T::zero())
        } else if tp[i] < tp[i - 1] {
            (T::zero(), raw)
        } else {
            (T::zero(), T::zero())
        };
        positive[i] = up;
        negative[i] = down;
    }

    let positive_sum = rolling_sum_unchecked(&positive, period);
    let negative_sum = rolling_sum_unchecked(&negative, period);

    Ok(positive_sum
        .iter()
        .zip(&negative_sum)
        .map(|(&p, &m)| strength_ratio(p, m))
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]

    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, count_nan_prefix};

    #[test]
    fn test_mfi_mixed_flow() {
        // typical price equals the close here
        let p = vec![10.0_f64, 11.0, 10.0, 12.0];
        let volume = vec![1.0_f64, 2.0, 1.0, 1.0];
        let out = mfi(&p, &p, &p, &volume, 3).unwrap();
        assert_eq!(count_nan_prefix(&out), mfi_lookback(3));
        // positive 22 + 12, negative 10
        assert!(approx_eq(out[3], 100.0 * 34.0 / 44.0, 1e-10));
    }

    #[test]
    fn test_mfi_saturation() {
        let down: Vec<f64> = (0..10).map(|i| 50.0 - i as f64).collect();
        let volume = vec![100.0_f64; 10];
        let out = mfi(&down, &down, &down, &volume, 4).unwrap();
        assert!(out[4..].iter().all(|&v| v == 0.0));

        let flat = vec![5.0_f64; 6];
        let out = mfi(&flat, &flat, &flat, &volume[..6], 2).unwrap();
        assert!(out[2..].iter().all(|&v| v == 50.0));
    }

    #[test]
    fn test_mfi_errors() {
        let p = vec![1.0_f64, 2.0];
        assert!(matches!(mfi(&p, &p, &p, &p, 0), Err(Error::InvalidPeriod { .. })));
        assert!(matches!(mfi(&p, &p, &p, &p, 2), Err(Error::InsufficientData { .. })));
        assert!(matches!(mfi(&p, &p, &p, &p[..1], 1), Err(Error::LengthMismatch { .. })));
    }
}
