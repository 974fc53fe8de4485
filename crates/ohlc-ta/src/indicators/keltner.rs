//! Keltner Channels.
//!
//! An ATR envelope around an exponential average of the typical price:
//!
//! ```text
//! Middle = EMA(typical price, period)      (SMA-seeded)
//! Upper  = Middle + k × ATR(atr_period)
//! Lower  = Middle − k × ATR(atr_period)
//! ```
//!
//! The output is defined from index `max(period, atr_period) - 1`.
//!
//! # Example
//!
//! ```
//! use ohlc_ta::indicators::keltner::Keltner;
//!
//! let close: Vec<f64> = (0..40).map(|i| 50.0 + (i as f64 * 0.3).sin()).collect();
//! let high: Vec<f64> = close.iter().map(|c| c + 0.5).collect();
//! let low: Vec<f64> = close.iter().map(|c| c - 0.5).collect();
//!
//! let out = Keltner::default().compute(&high, &low, &close).unwrap();
//! assert!(out.middle[18].is_nan());
//! assert!(out.upper[19] > out.middle[19]);
//! ```

use crate::error::Result;
use crate::indicators::price_transform::typical_price_unchecked;
use crate::kernels::smoothing::{ema_alpha, exponential_smooth, wilder_smooth, Seed};
use crate::kernels::true_range::true_range_series;
use crate::traits::{
    validate_indicator_input, validate_multiplier, validate_period, validate_same_length,
    SeriesElement,
};

/// Output of the Keltner Channels computation.
#[derive(Debug, Clone, PartialEq)]
pub struct KeltnerOutput<T> {
    /// EMA of the typical price.
    pub middle: Vec<T>,
    /// Middle + k × ATR.
    pub upper: Vec<T>,
    /// Middle − k × ATR.
    pub lower: Vec<T>,
}

/// Returns the lookback period for Keltner Channels.
#[inline]
#[must_use]
pub const fn keltner_lookback(period: usize, atr_period: usize) -> usize {
    let longest = if period > atr_period { period } else { atr_period };
    if longest == 0 {
        0
    } else {
        longest - 1
    }
}

/// Returns the minimum input length for Keltner Channels.
#[inline]
#[must_use]
pub const fn keltner_min_len(period: usize, atr_period: usize) -> usize {
    keltner_lookback(period, atr_period) + 1
}

/// Computes Keltner Channels.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if either period is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
/// - `Error::InsufficientData` if the series is shorter than [`keltner_min_len`]
/// - `Error::InvalidParameter` if `k` is negative or not finite
pub fn keltner<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
    atr_period: usize,
    k: f64,
) -> Result<KeltnerOutput<T>> {
    validate_period(period)?;
    validate_period(atr_period)?;
    validate_same_length(&[("high", high), ("low", low), ("close", close)])?;
    validate_indicator_input(high, keltner_min_len(period, atr_period), "keltner")?;
    validate_multiplier("k", k)?;
    let k = T::from_f64(k)?;

    let typical = typical_price_unchecked(high, low, close);
    let middle = exponential_smooth(&typical, ema_alpha(period)?, Seed::Sma, period)?;
    let atr = wilder_smooth(&true_range_series(high, low, close), atr_period)?;

    let mut upper = Vec::with_capacity(middle.len());
    let mut lower = Vec::with_capacity(middle.len());
    for (&m, &a) in middle.iter().zip(&atr) {
        // NaN in either input propagates to both bands.
        upper.push(m + k * a);
        lower.push(m - k * a);
    }
    let middle = middle
        .iter()
        .zip(&atr)
        .map(|(&m, &a)| if a.is_nan() { T::nan() } else { m })
        .collect();

    Ok(KeltnerOutput {
        middle,
        upper,
        lower,
    })
}

// ==================== Configuration Type ====================

/// Keltner Channels configuration with fluent builder API.
///
/// Defaults: period 20, ATR period 10, multiplier 2.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Keltner {
    period: usize,
    atr_period: usize,
    multiplier: f64,
}

impl Default for Keltner {
    fn default() -> Self {
        Self {
            period: 20,
            atr_period: 10,
            multiplier: 2.0,
        }
    }
}

impl Keltner {
    /// Creates a configuration with standard parameters (20, 10, 2.0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the EMA period of the middle line. Default: 20
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the ATR period. Default: 10
    #[must_use]
    pub const fn atr_period(mut self, atr_period: usize) -> Self {
        self.atr_period = atr_period;
        self
    }

    /// Sets the ATR multiplier. Default: 2.0
    #[must_use]
    pub const fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Returns the EMA period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the ATR period.
    #[must_use]
    pub const fn get_atr_period(&self) -> usize {
        self.atr_period
    }

    /// Returns the ATR multiplier.
    #[must_use]
    pub const fn get_multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        keltner_lookback(self.period, self.atr_period)
    }

    /// Computes Keltner Channels using the configured parameters.
    ///
    /// # Errors
    ///
    /// Same conditions as [`keltner`].
    pub fn compute<T: SeriesElement>(
        &self,
        high: &[T],
        low: &[T],
        close: &[T],
    ) -> Result<KeltnerOutput<T>> {
        keltner(high, low, close, self.period, self.atr_period, self.multiplier)
    }
}
