//! Bollinger Bands indicator.
//!
//! Bollinger Bands are a volatility envelope around a moving average:
//! - **Middle Band**: Simple Moving Average (SMA) of the price
//! - **Upper Band**: Middle Band + (k × standard deviation)
//! - **Lower Band**: Middle Band − (k × standard deviation)
//!
//! # Standard Deviation Convention
//!
//! The rolling standard deviation uses the **population** formula (÷ n), the
//! crate-wide [`Ddof::Population`] convention. It matches the most common
//! charting platforms.
//!
//! # Derived Readings
//!
//! - [`bollinger_percent_b`]: where the price sits inside the bands
//!   (0 = lower band, 1 = upper band)
//! - [`bollinger_bandwidth`]: band width relative to the middle band
//!
//! Both use safe division: a zero-width band or a zero middle band yields NaN.
//!
//! # Example
//!
//! ```
//! use ohlc_ta::indicators::bollinger::{bollinger, Bollinger};
//!
//! let prices = vec![
//!     44.0_f64, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0,
//!     45.5, 44.5, 43.5, 44.0, 45.0, 46.0, 46.5, 45.5, 44.5, 45.0,
//! ];
//!
//! let bands = bollinger(&prices, 5, 2.0).unwrap();
//! assert!(bands.middle[3].is_nan());
//! assert!(bands.upper[4] > bands.middle[4]);
//!
//! let defaults = Bollinger::default().compute(&prices).unwrap();
//! assert!(!defaults.middle[19].is_nan());
//! ```

use crate::error::Result;
use crate::kernels::rolling::{rolling_mean_unchecked, rolling_variance_unchecked, Ddof};
use crate::traits::{validate_indicator_input, validate_multiplier, SeriesElement};
use crate::utils::safe_div;

/// Returns the lookback period for Bollinger Bands.
#[inline]
#[must_use]
pub const fn bollinger_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        period - 1
    }
}

/// Returns the minimum input length for Bollinger Bands.
#[inline]
#[must_use]
pub const fn bollinger_min_len(period: usize) -> usize {
    if period == 0 {
        1
    } else {
        period
    }
}

/// Output of the Bollinger Bands computation.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerOutput<T> {
    /// The middle band (Simple Moving Average).
    pub middle: Vec<T>,
    /// The upper band (middle + k × std dev).
    pub upper: Vec<T>,
    /// The lower band (middle − k × std dev).
    pub lower: Vec<T>,
}

/// Computes Bollinger Bands.
///
/// `k` is the standard deviation multiplier (typically 2.0).
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::InsufficientData` if the data is shorter than the period
/// - `Error::InvalidParameter` if `k` is negative or not finite
pub fn bollinger<T: SeriesElement>(data: &[T], period: usize, k: f64) -> Result<BollingerOutput<T>> {
    validate_indicator_input(data, period, "bollinger")?;
    validate_multiplier("k", k)?;
    let k = T::from_f64(k)?;

    let middle = rolling_mean_unchecked(data, period)?;
    let variance = rolling_variance_unchecked(data, period, Ddof::Population)?;

    let mut upper = Vec::with_capacity(data.len());
    let mut lower = Vec::with_capacity(data.len());
    for (&m, &v) in middle.iter().zip(&variance) {
        let offset = k * v.sqrt();
        upper.push(m + offset);
        lower.push(m - offset);
    }

    Ok(BollingerOutput {
        middle,
        upper,
        lower,
    })
}

/// Computes %B: `(price − lower) / (upper − lower)`.
///
/// # Errors
///
/// Same conditions as [`bollinger`].
pub fn bollinger_percent_b<T: SeriesElement>(data: &[T], period: usize, k: f64) -> Result<Vec<T>> {
    let bands = bollinger(data, period, k)?;
    Ok(data
        .iter()
        .zip(bands.upper.iter().zip(&bands.lower))
        .map(|(&p, (&u, &l))| safe_div(p - l, u - l))
        .collect())
}

/// Computes Bandwidth: `(upper − lower) / middle`.
///
/// # Errors
///
/// Same conditions as [`bollinger`].
pub fn bollinger_bandwidth<T: SeriesElement>(data: &[T], period: usize, k: f64) -> Result<Vec<T>> {
    let bands = bollinger(data, period, k)?;
    Ok(bands
        .upper
        .iter()
        .zip(bands.lower.iter().zip(&bands.middle))
        .map(|(&u, (&l, &m))| safe_div(u - l, m))
        .collect())
}

// ==================== Configuration Type ====================

/// Bollinger Bands configuration with fluent builder API.
///
/// Defaults: period 20, `std_dev` 2.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Bollinger {
    period: usize,
    std_dev: f64,
}

impl Default for Bollinger {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev: 2.0,
        }
    }
}

impl Bollinger {
    /// Creates a Bollinger Bands configuration with standard parameters (20, 2.0).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lookback period. Default: 20
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Sets the standard deviation multiplier for the bands. Default: 2.0
    #[must_use]
    pub const fn std_dev(mut self, std_dev: f64) -> Self {
        self.std_dev = std_dev;
        self
    }

    /// Returns the period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the standard deviation multiplier.
    #[must_use]
    pub const fn get_std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Returns the lookback for this configuration.
    #[must_use]
    pub const fn lookback(&self) -> usize {
        bollinger_lookback(self.period)
    }

    /// Computes Bollinger Bands using the configured parameters.
    ///
    /// # Errors
    ///
    /// Same conditions as [`bollinger`].
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<BollingerOutput<T>> {
        bollinger(data, self.period, self.std_dev)
    }
}
