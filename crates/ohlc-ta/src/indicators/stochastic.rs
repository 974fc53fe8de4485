//! Stochastic Oscillator indicator.
//!
//! The Stochastic Oscillator compares the close with the high-low range of a
//! lookback window, on a 0-100 scale.
//!
//! ```text
//! Raw %K = 100 × (Close − Lowest Low) / (Highest High − Lowest Low)
//! %K     = SMA(Raw %K, k_smooth)
//! %D     = SMA(%K, d_period)
//! ```
//!
//! `k_smooth = 1` gives the fast stochastic; the default configuration
//! (14, 3, 3) is the common "slow" stochastic.
//!
//! # Conventions
//!
//! - A window with no range (`highest_high == lowest_low`) is NaN. The NaN
//!   leaves the smoothing windows once the range reopens.
//! - Rolling extrema use a monotonic deque, O(n) for any period.
//!
//! # Example
//!
//! ```
//! use ohlc_ta::indicators::stochastic::stochastic;
//!
//! let high = vec![10.0_f64, 11.0, 12.0, 11.5, 12.5, 13.0, 12.0, 11.0, 10.5, 11.5];
//! let low = vec![9.0_f64, 10.0, 11.0, 10.5, 11.5, 12.0, 11.0, 10.0, 9.5, 10.5];
//! let close = vec![9.5_f64, 10.5, 11.5, 11.0, 12.0, 12.5, 11.5, 10.5, 10.0, 11.0];
//!
//! let result = stochastic(&high, &low, &close, 5, 1, 3).unwrap();
//! assert!(result.k[3].is_nan());
//! assert!(!result.k[4].is_nan());
//! assert!(result.d[5].is_nan());
//! assert!(!result.d[6].is_nan());
//! ```

use crate::error::Result;
use crate::kernels::rolling::rolling_mean_unchecked;
use crate::kernels::rolling_extrema::{rolling_extremum_unchecked, Extremum};
use crate::traits::{validate_indicator_input, validate_period, validate_same_length, SeriesElement};
use crate::utils::safe_div;

/// Returns the lookback period for the Stochastic %K line.
///
/// ```
/// use ohlc_ta::indicators::stochastic::stochastic_k_lookback;
///
/// assert_eq!(stochastic_k_lookback(14, 1), 13);
/// assert_eq!(stochastic_k_lookback(14, 3), 15);
/// ```
#[inline]
#[must_use]
pub const fn stochastic_k_lookback(k_period: usize, k_smooth: usize) -> usize {
    if k_period == 0 || k_smooth == 0 {
        0
    } else {
        k_period + k_smooth - 2
    }
}

/// Returns the lookback period for the Stochastic %D line.
#[inline]
#[must_use]
pub const fn stochastic_d_lookback(k_period: usize, k_smooth: usize, d_period: usize) -> usize {
    if d_period == 0 {
        stochastic_k_lookback(k_period, k_smooth)
    } else {
        stochastic_k_lookback(k_period, k_smooth) + d_period - 1
    }
}

/// Returns the minimum input length: enough bars for one %D value.
///
/// ```
/// use ohlc_ta::indicators::stochastic::stochastic_min_len;
///
/// assert_eq!(stochastic_min_len(14, 3, 3), 18);
/// assert_eq!(stochastic_min_len(5, 1, 3), 7);
/// ```
#[inline]
#[must_use]
pub const fn stochastic_min_len(k_period: usize, k_smooth: usize, d_period: usize) -> usize {
    stochastic_d_lookback(k_period, k_smooth, d_period) + 1
}

/// Output structure containing the %K and %D lines.
#[derive(Debug, Clone, PartialEq)]
pub struct StochasticOutput<T> {
    /// The %K line.
    pub k: Vec<T>,
    /// The %D line (SMA of %K).
    pub d: Vec<T>,
}

/// Computes the Stochastic Oscillator.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if any period is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the series have different lengths
/// - `Error::InsufficientData` if the input is shorter than [`stochastic_min_len`]
pub fn stochastic<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    k_period: usize,
    k_smooth: usize,
    d_period: usize,
) -> Result<StochasticOutput<T>> {
    validate_period(k_period)?;
    validate_period(k_smooth)?;
    validate_period(d_period)?;
    validate_same_length(&[("high", high), ("low", low), ("close", close)])?;
    validate_indicator_input(
        high,
        stochastic_min_len(k_period, k_smooth, d_period),
        "stochastic",
    )?;

    let highest = rolling_extremum_unchecked(high, k_period, Extremum::Max);
    let lowest = rolling_extremum_unchecked(low, k_period, Extremum::Min);
    let raw: Vec<T> = close
        .iter()
        .zip(highest.iter().zip(&lowest))
        .map(|(&c, (&hh, &ll))| T::hundred() * safe_div(c - ll, hh - ll))
        .collect();

    let k = if k_smooth == 1 {
        raw
    } else {
        rolling_mean_unchecked(&raw, k_smooth)?
    };
    let d = rolling_mean_unchecked(&k, d_period)?;

    Ok(StochasticOutput { k, d })
}

// ==================== Configuration Type ====================

/// Stochastic Oscillator configuration with fluent builder API.
///
/// Defaults: `k_period` 14, `k_smooth` 3, `d_period` 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Stochastic {
    k_period: usize,
    k_smooth: usize,
    d_period: usize,
}

impl Default for Stochastic {
    fn default() -> Self {
        Self {
            k_period: 14,
            k_smooth: 3,
            d_period: 3,
        }
    }
}

impl Stochastic {
    /// Creates a configuration with standard parameters (14, 3, 3).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the %K lookback period. Default: 14
    #[must_use]
    pub const fn k_period(mut self, period: usize) -> Self {
        self.k_period = period;
        self
    }

    /// Sets the %K smoothing period (1 = fast stochastic). Default: 3
    #[must_use]
    pub const fn k_smooth(mut self, period: usize) -> Self {
        self.k_smooth = period;
        self
    }

    /// Sets the %D period. Default: 3
    #[must_use]
    pub const fn d_period(mut self, period: usize) -> Self {
        self.d_period = period;
        self
    }

    /// Returns `(k_period, k_smooth, d_period)`.
    #[must_use]
    pub const fn periods(&self) -> (usize, usize, usize) {
        (self.k_period, self.k_smooth, self.d_period)
    }

    /// Returns the minimum input length for this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        stochastic_min_len(self.k_period, self.k_smooth, self.d_period)
    }

    /// Computes the oscillator using the configured parameters.
    ///
    /// # Errors
    ///
    /// Same conditions as [`stochastic`].
    pub fn compute<T: SeriesElement>(
        &self,
        high: &[T],
        low: &[T],
        close: &[T],
    ) -> Result<StochasticOutput<T>> {
        stochastic(high, low, close, self.k_period, self.k_smooth, self.d_period)
    }
}
