//! Core traits for ohlc-ta numeric operations.
//!
//! [`SeriesElement`] abstracts over `f32` and `f64` so every kernel is written
//! once and instantiated at the call site with the caller's precision. The
//! module also hosts the validation helpers each entry point runs before any
//! computation starts.
//!
//! # Example
//!
//! ```
//! use ohlc_ta::traits::{SeriesElement, validate_indicator_input};
//!
//! fn first_window_mean<T: SeriesElement>(data: &[T], period: usize) -> ohlc_ta::Result<T> {
//!     validate_indicator_input(data, period, "first_window_mean")?;
//!     let sum = data.iter().take(period).fold(T::zero(), |acc, &x| acc + x);
//!     Ok(sum / T::from_usize(period)?)
//! }
//!
//! let data = vec![1.0_f32, 2.0, 3.0, 4.0, 5.0];
//! assert!((first_window_mean(&data, 3).unwrap() - 2.0).abs() < 1e-6);
//! ```

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a data series.
///
/// Implemented for every `Float + NumCast` type, in practice `f32` and `f64`.
/// Output buffers always have the same element type as the inputs, so a
/// float32 series is never silently upcast.
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Creates a series element from an `f64` value.
    ///
    /// Used to bring configuration scalars (multipliers, thresholds) into the
    /// element type of the series.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_f64(value: f64) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "f64 to series element",
        })
    }

    /// Returns the constant 2 as this type.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the constant 100 as this type.
    ///
    /// Upper saturating bound of the 0-100 oscillators.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        <Self as NumCast>::from(100).unwrap_or_else(Self::nan)
    }

    /// Returns the constant 50 as this type (neutral oscillator reading).
    #[inline]
    #[must_use]
    fn fifty() -> Self {
        <Self as NumCast>::from(50).unwrap_or_else(Self::nan)
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validation methods shared by all input series.
pub trait ValidatedInput {
    /// The element type of the series.
    type Element: SeriesElement;

    /// Returns the length of the series.
    fn len(&self) -> usize;

    /// Returns true if the series is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates that the series has at least `min_length` elements.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientData` if the series is shorter than `min_length`.
    #[inline]
    fn validate_min_length(&self, min_length: usize, indicator: &'static str) -> Result<()> {
        if self.len() < min_length {
            Err(Error::InsufficientData {
                required: min_length,
                actual: self.len(),
                indicator,
            })
        } else {
            Ok(())
        }
    }

    /// Validates that the series is not empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if the series is empty.
    #[inline]
    fn validate_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(Error::EmptyInput)
        } else {
            Ok(())
        }
    }
}

impl<T: SeriesElement> ValidatedInput for [T] {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: SeriesElement> ValidatedInput for Vec<T> {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

/// Validates that a period is valid for indicator computation.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
pub const fn validate_period(period: usize) -> Result<()> {
    if period == 0 {
        Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates a single-series windowed computation.
///
/// Checks, in order: the period is non-zero, the data is non-empty, and the
/// data holds at least `period` elements.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::InsufficientData` if data length is less than the period
#[inline]
pub fn validate_indicator_input<T: SeriesElement>(
    data: &[T],
    period: usize,
    indicator: &'static str,
) -> Result<()> {
    validate_period(period)?;
    data.validate_not_empty()?;
    data.validate_min_length(period, indicator)?;
    Ok(())
}

/// Validates that named parallel series are non-empty and of equal length.
///
/// Returns the common length on success.
///
/// # Errors
///
/// - `Error::EmptyInput` if the first series is empty
/// - `Error::LengthMismatch` naming the first series that disagrees
///
/// # Example
///
/// ```
/// use ohlc_ta::traits::validate_same_length;
///
/// let high = [2.0_f64, 3.0];
/// let low = [1.0_f64];
/// let err = validate_same_length(&[("high", &high[..]), ("low", &low[..])]).unwrap_err();
/// assert_eq!(err.to_string(), "length mismatch: high has 2 elements, low has 1");
/// ```
pub fn validate_same_length<T: SeriesElement>(series: &[(&'static str, &[T])]) -> Result<usize> {
    let Some(&(first_name, first)) = series.first() else {
        return Err(Error::EmptyInput);
    };
    let n = first.len();
    if n == 0 {
        return Err(Error::EmptyInput);
    }
    for &(name, data) in &series[1..] {
        if data.len() != n {
            return Err(Error::LengthMismatch {
                description: format!(
                    "{first_name} has {n} elements, {name} has {}",
                    data.len()
                ),
            });
        }
    }
    Ok(n)
}

/// Validates a finite, non-negative multiplier such as a band width `k`.
///
/// # Errors
///
/// Returns `Error::InvalidParameter` if `value` is NaN, infinite or negative.
#[inline]
pub fn validate_multiplier(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            reason: "must be finite and non-negative",
        })
    }
}
