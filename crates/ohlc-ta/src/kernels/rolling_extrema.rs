//! Rolling extrema using monotonic deque for O(n) rolling max/min.
//!
//! # Algorithm
//!
//! The monotonic deque algorithm maintains a double-ended queue of indices such that:
//! - For rolling max: values at those indices are in decreasing order
//! - For rolling min: values at those indices are in increasing order
//!
//! Each index enters and leaves the deque once, so the whole pass is O(n)
//! regardless of the window size.
//!
//! # NaN Handling
//!
//! NaN values never enter the deque. A window that contains a NaN produces a
//! NaN output, matching the rolling sum kernels.
//!
//! # Example
//!
//! ```
//! use ohlc_ta::kernels::rolling_extrema::{rolling_max, rolling_min};
//!
//! let data = vec![3.0_f64, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
//!
//! let max_result = rolling_max(&data, 3).unwrap();
//! assert!((max_result[2] - 4.0).abs() < 1e-10); // max of [3, 1, 4]
//! assert!((max_result[5] - 9.0).abs() < 1e-10); // max of [1, 5, 9]
//!
//! let min_result = rolling_min(&data, 3).unwrap();
//! assert!((min_result[2] - 1.0).abs() < 1e-10); // min of [3, 1, 4]
//! assert!((min_result[5] - 1.0).abs() < 1e-10); // min of [1, 5, 9]
//! ```

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::error::Result;
use crate::traits::{validate_indicator_input, SeriesElement};

/// Which extremum a [`MonotonicDeque`] tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremum {
    /// Rolling maximum.
    Max,
    /// Rolling minimum.
    Min,
}

/// A monotonic deque of indices for tracking a rolling extremum.
#[derive(Debug, Clone)]
pub struct MonotonicDeque<T> {
    deque: VecDeque<usize>,
    period: usize,
    kind: Extremum,
    _phantom: PhantomData<T>,
}

impl<T: SeriesElement> MonotonicDeque<T> {
    /// Creates an empty deque for a window of `period` elements.
    ///
    /// ```
    /// use ohlc_ta::kernels::rolling_extrema::{Extremum, MonotonicDeque};
    ///
    /// let deque: MonotonicDeque<f64> = MonotonicDeque::new(5, Extremum::Max);
    /// assert!(deque.is_empty());
    /// ```
    #[must_use]
    pub fn new(period: usize, kind: Extremum) -> Self {
        Self {
            deque: VecDeque::with_capacity(period),
            period,
            kind,
            _phantom: PhantomData,
        }
    }

    /// Returns the window size.
    #[must_use]
    pub const fn period(&self) -> usize {
        self.period
    }

    /// Returns true if the deque is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Returns the number of indices currently in the deque.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// Advances the window to end at `index`.
    ///
    /// Values dominated by `data[index]` are dropped from the back, then
    /// indices that fell out of the window are dropped from the front.
    /// A NaN at `index` is not inserted.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push(&mut self, index: usize, data: &[T]) {
        let value = data[index];
        if !value.is_nan() {
            while let Some(&back) = self.deque.back() {
                let dominated = match self.kind {
                    Extremum::Max => value >= data[back],
                    Extremum::Min => value <= data[back],
                };
                if dominated {
                    self.deque.pop_back();
                } else {
                    break;
                }
            }
            self.deque.push_back(index);
        }

        if index + 1 >= self.period {
            let window_start = index + 1 - self.period;
            while self.deque.front().is_some_and(|&front| front < window_start) {
                self.deque.pop_front();
            }
        }
    }

    /// Returns the index of the current extremum.
    #[inline]
    #[must_use]
    pub fn front_index(&self) -> Option<usize> {
        self.deque.front().copied()
    }

    /// Returns the current extremum, or NaN if the deque is empty.
    #[inline]
    pub fn extremum(&self, data: &[T]) -> T {
        self.front_index().map_or_else(T::nan, |idx| data[idx])
    }
}

/// Rolling maximum and minimum of the same window.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingExtremaOutput<T> {
    /// The rolling maximum values.
    pub max: Vec<T>,
    /// The rolling minimum values.
    pub min: Vec<T>,
}

/// Number of NaN values at the start of the rolling extrema output.
#[inline]
#[must_use]
pub const fn rolling_extrema_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Minimum input length for the rolling extrema.
#[inline]
#[must_use]
pub const fn rolling_extrema_min_len(period: usize) -> usize {
    if period == 0 {
        1
    } else {
        period
    }
}

/// Computes the rolling maximum using a monotonic deque.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::InsufficientData` if the data is shorter than the period
///
/// # Example
///
/// ```
/// use ohlc_ta::kernels::rolling_extrema::rolling_max;
///
/// let result = rolling_max(&[1.0_f64, 3.0, 2.0, 5.0, 4.0], 3).unwrap();
/// assert!(result[1].is_nan());
/// assert_eq!(&result[2..], &[3.0, 5.0, 5.0]);
/// ```
pub fn rolling_max<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_indicator_input(data, period, "rolling_max")?;
    Ok(rolling_extremum_unchecked(data, period, Extremum::Max))
}

/// Computes the rolling minimum using a monotonic deque.
///
/// # Errors
///
/// Same conditions as [`rolling_max`].
pub fn rolling_min<T: SeriesElement>(data: &[T], period: usize) -> Result<Vec<T>> {
    validate_indicator_input(data, period, "rolling_min")?;
    Ok(rolling_extremum_unchecked(data, period, Extremum::Min))
}

/// Computes the rolling maximum and minimum of one series in one call.
///
/// # Errors
///
/// Same conditions as [`rolling_max`].
pub fn rolling_extrema<T: SeriesElement>(
    data: &[T],
    period: usize,
) -> Result<RollingExtremaOutput<T>> {
    validate_indicator_input(data, period, "rolling_extrema")?;
    Ok(RollingExtremaOutput {
        max: rolling_extremum_unchecked(data, period, Extremum::Max),
        min: rolling_extremum_unchecked(data, period, Extremum::Min),
    })
}

/// Rolling extremum without validation. `period` must be in `1..=data.len()`.
pub(crate) fn rolling_extremum_unchecked<T: SeriesElement>(
    data: &[T],
    period: usize,
    kind: Extremum,
) -> Vec<T> {
    let n = data.len();
    let mut result = vec![T::nan(); n];
    if period == 0 || n < period {
        return result;
    }

    let mut deque = MonotonicDeque::new(period, kind);
    let mut last_nan: Option<usize> = None;

    for i in 0..n {
        if data[i].is_nan() {
            last_nan = Some(i);
        }
        deque.push(i, data);

        if i + 1 >= period {
            let window_has_nan = last_nan.is_some_and(|j| j + period > i);
            if !window_has_nan {
                result[i] = deque.extremum(data);
            }
        }
    }

    result
}
