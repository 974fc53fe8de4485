//! Price Volume Trend (PVT).
//!
//! A cumulative line adding volume scaled by the relative price change:
//!
//! ```text
//! PVT[0] = 0
//! PVT[i] = PVT[i-1] + volume[i] × (close[i] − close[i-1]) / close[i-1]
//! ```
//!
//! A bar with a NaN input, or a zero previous close, leaves the line
//! unchanged.

use crate::error::Result;
use crate::traits::{validate_same_length, SeriesElement};
use crate::utils::safe_div;

/// Computes the Price Volume Trend.
///
/// # Errors
///
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if close and volume differ in length
///
/// # Example
///
/// ```
/// use ohlc_ta::indicators::pvt::pvt;
///
/// let close = [10.0_f64, 11.0, 9.9];
/// let volume = [500.0_f64, 1000.0, 1000.0];
/// let out = pvt(&close, &volume).unwrap();
/// assert_eq!(out[0], 0.0);
/// assert!((out[1] - 100.0).abs() < 1e-9);
/// assert!((out[2] - 0.0).abs() < 1e-9);
/// ```
pub fn pvt<T: SeriesElement>(close: &[T], volume: &[T]) -> Result<Vec<T>> {
    let n = validate_same_length(&[("close", close), ("volume", volume)])?;

    let mut out = Vec::with_capacity(n);
    let mut running = T::zero();
    out.push(running);
    for i in 1..n {
        let step = volume[i] * safe_div(close[i] - close[i - 1], close[i - 1]);
        if !step.is_nan() {
            running = running + step;
        }
        out.push(running);
    }
    Ok(out)
}
