//! Price transforms: per-bar blends of high, low and close.
//!
//! ```text
//! Typical Price  = (high + low + close) / 3
//! Median Price   = (high + low) / 2
//! Weighted Close = (high + low + 2 × close) / 4
//! ```
//!
//! No lookback: output `i` depends on bar `i` alone.

use crate::error::Result;
use crate::traits::{validate_same_length, SeriesElement};

/// Computes the typical price `(H + L + C) / 3` of every bar.
///
/// # Errors
///
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
///
/// # Example
///
/// ```
/// use ohlc_ta::indicators::price_transform::typical_price;
///
/// let tp = typical_price(&[12.0_f64], &[9.0], &[9.0]).unwrap();
/// assert_eq!(tp, vec![10.0]);
/// ```
pub fn typical_price<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    validate_same_length(&[("high", high), ("low", low), ("close", close)])?;
    Ok(typical_price_unchecked(high, low, close))
}

pub(crate) fn typical_price_unchecked<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Vec<T> {
    let three = T::two() + T::one();
    high.iter()
        .zip(low)
        .zip(close)
        .map(|((&h, &l), &c)| (h + l + c) / three)
        .collect()
}

/// Computes the median price `(H + L) / 2` of every bar.
///
/// # Errors
///
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
pub fn median_price<T: SeriesElement>(high: &[T], low: &[T]) -> Result<Vec<T>> {
    validate_same_length(&[("high", high), ("low", low)])?;
    Ok(high.iter().zip(low).map(|(&h, &l)| (h + l) / T::two()).collect())
}

/// Computes the weighted close `(H + L + 2C) / 4` of every bar.
///
/// # Errors
///
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
pub fn weighted_close<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Result<Vec<T>> {
    validate_same_length(&[("high", high), ("low", low), ("close", close)])?;
    let four = T::two() + T::two();
    Ok(high
        .iter()
        .zip(low)
        .zip(close)
        .map(|((&h, &l), &c)| (h + l + T::two() * c) / four)
        .collect())
}
