//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! MACD is a trend-following momentum indicator built from three EMAs:
//!
//! ```text
//! MACD Line   = EMA(fast) − EMA(slow)
//! Signal Line = EMA(signal) of the MACD Line
//! Histogram   = MACD Line − Signal Line
//! ```
//!
//! Each EMA here is seeded with the SMA of its first window, so the MACD line
//! starts at `slow - 1` and the signal line at `slow + signal - 2`. Standard
//! parameters are 12, 26, 9 ([`Macd::default`]).
//!
//! # Example
//!
//! ```
//! use ohlc_ta::indicators::macd::{macd, Macd};
//!
//! let prices: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.3).sin()).collect();
//!
//! let out = macd(&prices, 12, 26, 9).unwrap();
//! assert!(out.macd_line[24].is_nan());
//! assert!(!out.macd_line[25].is_nan());
//! assert!(!out.signal_line[33].is_nan());
//!
//! let same = Macd::default().compute(&prices).unwrap();
//! assert_eq!(out.histogram[40], same.histogram[40]);
//! ```

use crate::error::{Error, Result};
use crate::kernels::smoothing::{ema_alpha, exponential_smooth, Seed};
use crate::traits::{validate_indicator_input, validate_period, SeriesElement};

/// Output of the MACD computation.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput<T> {
    /// The MACD line (fast EMA − slow EMA); first `slow - 1` values are NaN.
    pub macd_line: Vec<T>,
    /// The signal line (EMA of the MACD line); first `slow + signal - 2` values are NaN.
    pub signal_line: Vec<T>,
    /// MACD line − signal line; same warm-up as the signal line.
    pub histogram: Vec<T>,
}

impl<T> MacdOutput<T> {
    /// Returns the length of the output vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.macd_line.len()
    }

    /// Returns true if the output vectors are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.macd_line.is_empty()
    }
}

/// Number of NaN values at the start of the MACD line.
#[inline]
#[must_use]
pub const fn macd_line_lookback(slow_period: usize) -> usize {
    if slow_period == 0 {
        0
    } else {
        slow_period - 1
    }
}

/// Number of NaN values at the start of the signal line and histogram.
#[inline]
#[must_use]
pub const fn macd_signal_lookback(slow_period: usize, signal_period: usize) -> usize {
    if signal_period == 0 {
        macd_line_lookback(slow_period)
    } else {
        macd_line_lookback(slow_period) + signal_period - 1
    }
}

/// Minimum input length for MACD: enough bars for one signal value.
#[inline]
#[must_use]
pub const fn macd_min_len(slow_period: usize, signal_period: usize) -> usize {
    macd_signal_lookback(slow_period, signal_period) + 1
}

/// Computes MACD with explicit periods.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if any period is zero, or `fast >= slow`
/// - `Error::EmptyInput` if the data is empty
/// - `Error::InsufficientData` if the data is shorter than
///   [`macd_min_len`]
pub fn macd<T: SeriesElement>(
    data: &[T],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdOutput<T>> {
    validate_period(fast_period)?;
    validate_period(signal_period)?;
    if fast_period >= slow_period {
        return Err(Error::InvalidPeriod {
            period: fast_period,
            reason: "fast period must be less than slow period",
        });
    }
    validate_indicator_input(data, macd_min_len(slow_period, signal_period), "macd")?;

    let fast = exponential_smooth(data, ema_alpha(fast_period)?, Seed::Sma, fast_period)?;
    let slow = exponential_smooth(data, ema_alpha(slow_period)?, Seed::Sma, slow_period)?;

    let macd_line: Vec<T> = fast.iter().zip(&slow).map(|(&f, &s)| f - s).collect();
    let signal_line = exponential_smooth(
        &macd_line,
        ema_alpha(signal_period)?,
        Seed::Sma,
        signal_period,
    )?;
    let histogram = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(&m, &s)| m - s)
        .collect();

    Ok(MacdOutput {
        macd_line,
        signal_line,
        histogram,
    })
}

// ==================== Configuration Type ====================

/// MACD configuration with fluent builder API. Defaults: 12, 26, 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    /// Creates a MACD configuration with standard parameters (12, 26, 9).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fast EMA period. Default: 12
    #[must_use]
    pub const fn fast_period(mut self, period: usize) -> Self {
        self.fast_period = period;
        self
    }

    /// Sets the slow EMA period. Default: 26
    #[must_use]
    pub const fn slow_period(mut self, period: usize) -> Self {
        self.slow_period = period;
        self
    }

    /// Sets the signal EMA period. Default: 9
    #[must_use]
    pub const fn signal_period(mut self, period: usize) -> Self {
        self.signal_period = period;
        self
    }

    /// Returns `(fast, slow, signal)`.
    #[must_use]
    pub const fn periods(&self) -> (usize, usize, usize) {
        (self.fast_period, self.slow_period, self.signal_period)
    }

    /// Returns the minimum input length for this configuration.
    #[must_use]
    pub const fn min_len(&self) -> usize {
        macd_min_len(self.slow_period, self.signal_period)
    }

    /// Computes MACD using the configured parameters.
    ///
    /// # Errors
    ///
    /// Same conditions as [`macd`].
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<MacdOutput<T>> {
        macd(data, self.fast_period, self.slow_period, self.signal_period)
    }
}
