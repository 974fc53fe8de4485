//! On-Balance Volume (OBV) indicator.
//!
//! OBV is a cumulative volume-flow line (Granville, 1963):
//!
//! ```text
//! OBV[0] = volume[0]
//!
//! If close[i] > close[i-1]: OBV[i] = OBV[i-1] + volume[i]
//! If close[i] < close[i-1]: OBV[i] = OBV[i-1] - volume[i]
//! If close[i] == close[i-1]: OBV[i] = OBV[i-1]
//! ```
//!
//! # NaN Handling
//!
//! - If `close[i]`, `close[i-1]` or `volume[i]` is NaN, OBV carries the
//!   previous value forward
//! - A NaN first volume starts the line at zero
//!
//! # Example
//!
//! ```
//! use ohlc_ta::indicators::obv::obv;
//!
//! let close = vec![10.0_f64, 10.5, 10.2, 10.8, 10.5];
//! let volume = vec![1000.0, 1500.0, 1200.0, 1800.0, 1100.0];
//!
//! let result = obv(&close, &volume).unwrap();
//! assert_eq!(result, vec![1000.0, 2500.0, 1300.0, 3100.0, 2000.0]);
//! ```

use crate::error::Result;
use crate::traits::{validate_same_length, SeriesElement};

/// Returns the lookback period for OBV (0: defined from the first bar).
#[inline]
#[must_use]
pub const fn obv_lookback() -> usize {
    0
}

/// Returns the minimum input length required for OBV.
#[inline]
#[must_use]
pub const fn obv_min_len() -> usize {
    1
}

/// Computes On-Balance Volume.
///
/// # Errors
///
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if close and volume differ in length
pub fn obv<T: SeriesElement>(close: &[T], volume: &[T]) -> Result<Vec<T>> {
    let n = validate_same_length(&[("close", close), ("volume", volume)])?;

    let mut out = Vec::with_capacity(n);
    let mut running = if volume[0].is_nan() {
        T::zero()
    } else {
        volume[0]
    };
    out.push(running);

    for i in 1..n {
        let (prev, curr, vol) = (close[i - 1], close[i], volume[i]);
        if !(prev.is_nan() || curr.is_nan() || vol.is_nan()) {
            if curr > prev {
                running = running + vol;
            } else if curr < prev {
                running = running - vol;
            }
        }
        out.push(running);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]

    use super::*;
    use crate::error::Error;

    #[test]
    fn test_obv_equal_close_unchanged() {
        let close = vec![5.0_f64, 5.0, 6.0, 6.0];
        let volume = vec![10.0_f64, 20.0, 30.0, 40.0];
        assert_eq!(obv(&close, &volume).unwrap(), vec![10.0, 10.0, 40.0, 40.0]);
    }

    #[test]
    fn test_obv_nan_bar_carries_forward() {
        let close = vec![5.0_f64, f64::NAN, 6.0, 7.0];
        let volume = vec![10.0_f64, 20.0, 30.0, 40.0];
        let out = obv(&close, &volume).unwrap();
        assert_eq!(out, vec![10.0, 10.0, 10.0, 50.0]);
    }

    #[test]
    fn test_obv_single_bar() {
        assert_eq!(obv(&[3.0_f32], &[7.0]).unwrap(), vec![7.0]);
    }

    #[test]
    fn test_obv_errors() {
        let empty: Vec<f64> = vec![];
        assert!(matches!(obv(&empty, &empty), Err(Error::EmptyInput)));
        assert!(matches!(
            obv(&[1.0_f64, 2.0], &[1.0]),
            Err(Error::LengthMismatch { .. })
        ));
    }
}
