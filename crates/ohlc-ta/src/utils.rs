//! Utility functions for ohlc-ta.
//!
//! Tolerance-based float comparison for tests and validation, NaN counting,
//! the zero-guarded division used by every ratio indicator, and the label
//! projection used to turn a pattern flag series into the matching dates.

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other,
/// or if both are NaN (for testing convenience).
///
/// # Example
///
/// ```
/// use ohlc_ta::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
/// assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Divides `numerator` by `denominator`, yielding NaN for a zero denominator.
///
/// Ratio indicators (stochastic %K, Williams %R, rate of change, money flow
/// ratios, ...) use this so a zero range or zero base is reported as
/// "undefined" instead of ±infinity.
///
/// # Example
///
/// ```
/// use ohlc_ta::utils::safe_div;
///
/// assert_eq!(safe_div(6.0_f64, 3.0), 2.0);
/// assert!(safe_div(1.0_f64, 0.0).is_nan());
/// assert!(safe_div(0.0_f64, -0.0).is_nan());
/// ```
#[inline]
#[must_use]
pub fn safe_div<T: SeriesElement>(numerator: T, denominator: T) -> T {
    if denominator == T::zero() {
        T::nan()
    } else {
        numerator / denominator
    }
}

/// Count the number of NaN values in a slice.
#[inline]
#[must_use]
pub fn count_nans<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Count the number of NaN values at the beginning of a slice.
///
/// Equals the indicator's warm-up length on NaN-free input.
///
/// ```
/// use ohlc_ta::utils::count_nan_prefix;
///
/// assert_eq!(count_nan_prefix(&[f64::NAN, f64::NAN, 1.0, f64::NAN]), 2);
/// ```
#[inline]
#[must_use]
pub fn count_nan_prefix<T: SeriesElement>(data: &[T]) -> usize {
    data.iter().take_while(|x| x.is_nan()).count()
}

/// Projects `labels` onto the positions where `flags` is `true`.
///
/// This is the date filter applied to pattern output: given dates aligned
/// with the bars, it returns the dates on which the pattern fired, in their
/// original order.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `labels` and `flags` differ in length.
///
/// # Example
///
/// ```
/// use ohlc_ta::utils::select_flagged;
///
/// let dates = ["2018-10-29", "2018-10-30", "2018-10-31"];
/// let flags = [false, true, false];
/// assert_eq!(select_flagged(&dates, &flags).unwrap(), vec!["2018-10-30"]);
/// ```
pub fn select_flagged<L: Clone>(labels: &[L], flags: &[bool]) -> Result<Vec<L>> {
    if labels.len() != flags.len() {
        return Err(Error::LengthMismatch {
            description: format!(
                "labels has {} elements, flags has {}",
                labels.len(),
                flags.len()
            ),
        });
    }

    Ok(labels
        .iter()
        .zip(flags)
        .filter(|(_, &flag)| flag)
        .map(|(label, _)| label.clone())
        .collect())
}
