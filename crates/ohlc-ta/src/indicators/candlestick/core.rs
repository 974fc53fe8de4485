//! Core utilities for candlestick pattern recognition.
//!
//! This module provides the threshold settings, per-bar geometry and trend
//! helpers shared by all candlestick pattern implementations.
//!
//! # Geometry
//!
//! ```text
//! body  = |close − open|
//! upper = high − max(open, close)
//! lower = min(open, close) − low
//! range = high − low
//! ```

use crate::error::{Error, Result};
use crate::kernels::parallel::BarEvaluator;
use crate::traits::{validate_same_length, SeriesElement};

/// Threshold settings for pattern detection.
///
/// Every ratio is relative to the bar's own range or body, so the settings
/// are scale-free. Defaults are documented per field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PatternSettings {
    /// Hammer family: lower (or upper) shadow ≥ k × body. Default: 2.0
    pub hammer_lower_shadow_body: f64,
    /// Hammer family: opposite shadow ≤ k × range. Default: 0.1
    pub hammer_opposite_shadow_range: f64,
    /// Small body: body ≤ k × range. Default: 1/3
    pub small_body_range: f64,
    /// Doji: body ≤ k × range. Default: 0.1
    pub doji_body_range: f64,
    /// Dragonfly/gravestone: short shadow ≤ k × range. Default: 0.1
    pub doji_shadow_range: f64,
    /// Spinning top: body ≤ k × range. Default: 0.3
    pub spinning_top_body_range: f64,
    /// Long body: body ≥ k × range. Default: 0.6
    pub long_body_range: f64,
    /// Star body ≤ k × first body. Default: 0.3
    pub star_body_ratio: f64,
    /// Fraction of the prior body a reversal close must reach. Default: 0.5
    pub penetration: f64,
    /// Soldiers/crows closing shadow ≤ k × range. Default: 0.3
    pub soldier_shadow_range: f64,
    /// Bars averaged for prior-trend context. Default: 5
    pub trend_lookback: usize,
}

impl Default for PatternSettings {
    fn default() -> Self {
        Self {
            hammer_lower_shadow_body: 2.0,
            hammer_opposite_shadow_range: 0.1,
            small_body_range: 1.0 / 3.0,
            doji_body_range: 0.1,
            doji_shadow_range: 0.1,
            spinning_top_body_range: 0.3,
            long_body_range: 0.6,
            star_body_ratio: 0.3,
            penetration: 0.5,
            soldier_shadow_range: 0.3,
            trend_lookback: 5,
        }
    }
}

impl PatternSettings {
    /// Creates the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hammer shadow-to-body ratio.
    #[must_use]
    pub const fn hammer_lower_shadow_body(mut self, k: f64) -> Self {
        self.hammer_lower_shadow_body = k;
        self
    }

    /// Sets the hammer opposite-shadow-to-range ratio.
    #[must_use]
    pub const fn hammer_opposite_shadow_range(mut self, k: f64) -> Self {
        self.hammer_opposite_shadow_range = k;
        self
    }

    /// Sets the small-body ratio.
    #[must_use]
    pub const fn small_body_range(mut self, k: f64) -> Self {
        self.small_body_range = k;
        self
    }

    /// Sets the doji body ratio.
    #[must_use]
    pub const fn doji_body_range(mut self, k: f64) -> Self {
        self.doji_body_range = k;
        self
    }

    /// Sets the dragonfly/gravestone short-shadow ratio.
    #[must_use]
    pub const fn doji_shadow_range(mut self, k: f64) -> Self {
        self.doji_shadow_range = k;
        self
    }

    /// Sets the spinning-top body ratio.
    #[must_use]
    pub const fn spinning_top_body_range(mut self, k: f64) -> Self {
        self.spinning_top_body_range = k;
        self
    }

    /// Sets the long-body ratio.
    #[must_use]
    pub const fn long_body_range(mut self, k: f64) -> Self {
        self.long_body_range = k;
        self
    }

    /// Sets the star body ratio.
    #[must_use]
    pub const fn star_body_ratio(mut self, k: f64) -> Self {
        self.star_body_ratio = k;
        self
    }

    /// Sets the penetration fraction.
    #[must_use]
    pub const fn penetration(mut self, k: f64) -> Self {
        self.penetration = k;
        self
    }

    /// Sets the soldiers/crows shadow ratio.
    #[must_use]
    pub const fn soldier_shadow_range(mut self, k: f64) -> Self {
        self.soldier_shadow_range = k;
        self
    }

    /// Sets the number of bars used for trend context.
    #[must_use]
    pub const fn trend_lookback(mut self, bars: usize) -> Self {
        self.trend_lookback = bars;
        self
    }

    /// Checks every ratio is finite and non-negative and the trend lookback
    /// is non-zero.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidParameter` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let ratios = [
            ("hammer_lower_shadow_body", self.hammer_lower_shadow_body),
            ("hammer_opposite_shadow_range", self.hammer_opposite_shadow_range),
            ("small_body_range", self.small_body_range),
            ("doji_body_range", self.doji_body_range),
            ("doji_shadow_range", self.doji_shadow_range),
            ("spinning_top_body_range", self.spinning_top_body_range),
            ("long_body_range", self.long_body_range),
            ("star_body_ratio", self.star_body_ratio),
            ("penetration", self.penetration),
            ("soldier_shadow_range", self.soldier_shadow_range),
        ];
        for (name, value) in ratios {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::InvalidParameter {
                    name,
                    reason: "must be finite and non-negative",
                });
            }
        }
        if self.trend_lookback == 0 {
            return Err(Error::InvalidParameter {
                name: "trend_lookback",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    pub(crate) fn thresholds<T: SeriesElement>(&self) -> Result<Thresholds<T>> {
        self.validate()?;
        Ok(Thresholds {
            hammer_shadow_body: T::from_f64(self.hammer_lower_shadow_body)?,
            hammer_opposite_range: T::from_f64(self.hammer_opposite_shadow_range)?,
            small_body: T::from_f64(self.small_body_range)?,
            doji_body: T::from_f64(self.doji_body_range)?,
            doji_shadow: T::from_f64(self.doji_shadow_range)?,
            spinning_top_body: T::from_f64(self.spinning_top_body_range)?,
            long_body: T::from_f64(self.long_body_range)?,
            star_body: T::from_f64(self.star_body_ratio)?,
            penetration: T::from_f64(self.penetration)?,
            soldier_shadow: T::from_f64(self.soldier_shadow_range)?,
            trend_lookback: self.trend_lookback,
        })
    }
}

/// [`PatternSettings`] converted to the element type of the series.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Thresholds<T> {
    pub(crate) hammer_shadow_body: T,
    pub(crate) hammer_opposite_range: T,
    pub(crate) small_body: T,
    pub(crate) doji_body: T,
    pub(crate) doji_shadow: T,
    pub(crate) spinning_top_body: T,
    pub(crate) long_body: T,
    pub(crate) star_body: T,
    pub(crate) penetration: T,
    pub(crate) soldier_shadow: T,
    pub(crate) trend_lookback: usize,
}

/// One bar's prices, guaranteed free of NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle<T> {
    /// Opening price.
    pub open: T,
    /// High price.
    pub high: T,
    /// Low price.
    pub low: T,
    /// Closing price.
    pub close: T,
}

impl<T: SeriesElement> Candle<T> {
    /// Builds a candle, or `None` if any price is NaN.
    #[must_use]
    pub fn new(open: T, high: T, low: T, close: T) -> Option<Self> {
        if open.is_nan() || high.is_nan() || low.is_nan() || close.is_nan() {
            None
        } else {
            Some(Self {
                open,
                high,
                low,
                close,
            })
        }
    }

    /// Absolute distance between open and close.
    #[inline]
    pub fn body(&self) -> T {
        (self.close - self.open).abs()
    }

    /// Wick above the body.
    #[inline]
    pub fn upper_shadow(&self) -> T {
        self.high - self.body_top()
    }

    /// Wick below the body.
    #[inline]
    pub fn lower_shadow(&self) -> T {
        self.body_bottom() - self.low
    }

    /// High-low range.
    #[inline]
    pub fn range(&self) -> T {
        self.high - self.low
    }

    /// Higher of open and close.
    #[inline]
    pub fn body_top(&self) -> T {
        self.open.max(self.close)
    }

    /// Lower of open and close.
    #[inline]
    pub fn body_bottom(&self) -> T {
        self.open.min(self.close)
    }

    /// Close above open.
    #[inline]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Close below open.
    #[inline]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Body at least `k` of the range, on a bar with a range.
    #[inline]
    pub(crate) fn has_long_body(&self, k: T) -> bool {
        self.range() > T::zero() && self.body() >= k * self.range()
    }
}

/// Equal-length OHLC slices.
#[derive(Debug, Clone, Copy)]
pub struct Ohlc<'a, T> {
    open: &'a [T],
    high: &'a [T],
    low: &'a [T],
    close: &'a [T],
}

impl<'a, T: SeriesElement> Ohlc<'a, T> {
    /// Wraps four price series.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyInput` if the series are empty
    /// - `Error::LengthMismatch` if they differ in length
    pub fn new(open: &'a [T], high: &'a [T], low: &'a [T], close: &'a [T]) -> Result<Self> {
        validate_same_length(&[("open", open), ("high", high), ("low", low), ("close", close)])?;
        Ok(Self {
            open,
            high,
            low,
            close,
        })
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Always false once constructed; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// The bar at `index`, or `None` if out of range or any price is NaN.
    #[must_use]
    pub fn candle(&self, index: usize) -> Option<Candle<T>> {
        if index >= self.len() {
            return None;
        }
        Candle::new(
            self.open[index],
            self.high[index],
            self.low[index],
            self.close[index],
        )
    }

    /// The closing prices.
    #[must_use]
    pub fn close(&self) -> &'a [T] {
        self.close
    }
}

/// True when `close[idx]` sits above the mean of the `lookback` closes before it.
///
/// False without enough history or with NaN in the window.
#[must_use]
pub fn is_uptrend<T: SeriesElement>(close: &[T], idx: usize, lookback: usize) -> bool {
    prior_mean(close, idx, lookback).is_some_and(|mean| close[idx] > mean)
}

/// True when `close[idx]` sits below the mean of the `lookback` closes before it.
///
/// False without enough history or with NaN in the window.
#[must_use]
pub fn is_downtrend<T: SeriesElement>(close: &[T], idx: usize, lookback: usize) -> bool {
    prior_mean(close, idx, lookback).is_some_and(|mean| close[idx] < mean)
}

fn prior_mean<T: SeriesElement>(close: &[T], idx: usize, lookback: usize) -> Option<T> {
    if lookback == 0 || idx < lookback || idx >= close.len() {
        return None;
    }
    let sum = close[idx - lookback..idx]
        .iter()
        .fold(T::zero(), |acc, &c| acc + c);
    let mean = sum / T::from_usize(lookback).ok()?;
    (!mean.is_nan()).then_some(mean)
}

/// Runs a pattern predicate at every bar.
///
/// Bars before index `bars - 1` are `false`; the predicate only sees indices
/// with enough history.
pub(crate) fn scan<T, F>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
    bars: usize,
    predicate: F,
) -> Result<Vec<bool>>
where
    T: SeriesElement,
    F: Fn(&Ohlc<'_, T>, &Thresholds<T>, usize) -> bool + Send + Sync,
{
    let ohlc = Ohlc::new(open, high, low, close)?;
    let thresholds = settings.thresholds::<T>()?;
    let first = bars.saturating_sub(1);
    Ok(BarEvaluator::new().evaluate(ohlc.len(), |i| {
        i >= first && predicate(&ohlc, &thresholds, i)
    }))
}
