//! Negative and Positive Volume Index (NVI / PVI).
//!
//! Both indices start at 1000 and compound the close-to-close return only on
//! bars where volume moves in their direction:
//!
//! ```text
//! NVI[i] = NVI[i-1] × close[i] / close[i-1]   if volume[i] < volume[i-1]
//! PVI[i] = PVI[i-1] × close[i] / close[i-1]   if volume[i] > volume[i-1]
//! ```
//!
//! Otherwise the index is carried forward. Bars with NaN inputs or a zero
//! previous close also carry the index forward.

use crate::error::Result;
use crate::traits::{validate_same_length, SeriesElement};
use crate::utils::safe_div;

/// Starting level of both volume indices.
pub const VOLUME_INDEX_BASE: f64 = 1000.0;

#[derive(Clone, Copy)]
enum VolumeDirection {
    Falling,
    Rising,
}

fn volume_index<T: SeriesElement>(
    close: &[T],
    volume: &[T],
    direction: VolumeDirection,
) -> Result<Vec<T>> {
    let n = validate_same_length(&[("close", close), ("volume", volume)])?;

    let mut level = T::from_f64(VOLUME_INDEX_BASE)?;
    let mut out = Vec::with_capacity(n);
    out.push(level);
    for i in 1..n {
        let active = match direction {
            VolumeDirection::Falling => volume[i] < volume[i - 1],
            VolumeDirection::Rising => volume[i] > volume[i - 1],
        };
        if active {
            let ratio = safe_div(close[i], close[i - 1]);
            if !ratio.is_nan() {
                level = level * ratio;
            }
        }
        out.push(level);
    }
    Ok(out)
}

/// Computes the Negative Volume Index.
///
/// # Errors
///
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if close and volume differ in length
///
/// # Example
///
/// ```
/// use ohlc_ta::indicators::volume_index::nvi;
///
/// let close = [10.0_f64, 11.0, 12.0];
/// let volume = [100.0_f64, 50.0, 80.0];
/// assert_eq!(nvi(&close, &volume).unwrap(), vec![1000.0, 1100.0, 1100.0]);
/// ```
pub fn nvi<T: SeriesElement>(close: &[T], volume: &[T]) -> Result<Vec<T>> {
    volume_index(close, volume, VolumeDirection::Falling)
}

/// Computes the Positive Volume Index.
///
/// # Errors
///
/// Same conditions as [`nvi`].
pub fn pvi<T: SeriesElement>(close: &[T], volume: &[T]) -> Result<Vec<T>> {
    volume_index(close, volume, VolumeDirection::Rising)
}
