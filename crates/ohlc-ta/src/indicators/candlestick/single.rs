//! Single-candle pattern recognition functions.
//!
//! These patterns are identified from a single candlestick's shape. Hanging
//! Man and Shooting Star additionally require a prior uptrend: the close of
//! the bar before the pattern must sit above the mean of the
//! `trend_lookback` closes preceding it.
//!
//! Every function returns one flag per bar. A bar with a NaN price is
//! `false`.

use super::core::{is_uptrend, scan, Candle, PatternSettings, Thresholds};
use crate::error::Result;
use crate::traits::SeriesElement;

/// Hammer shape: long lower shadow, almost no upper shadow, small body.
fn hammer_shape<T: SeriesElement>(c: &Candle<T>, t: &Thresholds<T>) -> bool {
    let range = c.range();
    range > T::zero()
        && c.lower_shadow() >= t.hammer_shadow_body * c.body()
        && c.upper_shadow() <= t.hammer_opposite_range * range
        && c.body() <= t.small_body * range
}

/// Inverted hammer shape: the hammer turned upside down.
fn inverted_shape<T: SeriesElement>(c: &Candle<T>, t: &Thresholds<T>) -> bool {
    let range = c.range();
    range > T::zero()
        && c.upper_shadow() >= t.hammer_shadow_body * c.body()
        && c.lower_shadow() <= t.hammer_opposite_range * range
        && c.body() <= t.small_body * range
}

fn doji_shape<T: SeriesElement>(c: &Candle<T>, t: &Thresholds<T>) -> bool {
    c.body() <= t.doji_body * c.range()
}

fn after_uptrend<T: SeriesElement>(close: &[T], i: usize, lookback: usize) -> bool {
    i >= 1 && is_uptrend(close, i - 1, lookback)
}

/// Hammer pattern recognition.
///
/// ```text
/// range > 0
/// lower shadow ≥ 2 × body
/// upper shadow ≤ 0.1 × range
/// body ≤ range / 3
/// ```
///
/// (multipliers from [`PatternSettings`]).
///
/// # Errors
///
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the OHLC arrays have different lengths
/// - `Error::InvalidParameter` if the settings are invalid
///
/// # Example
///
/// ```
/// use ohlc_ta::indicators::candlestick::{hammer, PatternSettings};
///
/// let open = [179.55_f64, 182.75];
/// let high = [180.4_f64, 186.4];
/// let low = [177.3_f64, 182.75];
/// let close = [180.35_f64, 184.65];
///
/// let flags = hammer(&open, &high, &low, &close, &PatternSettings::default()).unwrap();
/// assert_eq!(flags, vec![true, false]);
/// ```
pub fn hammer<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    scan(open, high, low, close, settings, 1, |ohlc, t, i| {
        ohlc.candle(i).is_some_and(|c| hammer_shape(&c, t))
    })
}

/// Inverted Hammer pattern recognition: long upper shadow, little lower
/// shadow, small body.
///
/// # Errors
///
/// Same conditions as [`hammer`].
pub fn inverted_hammer<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    scan(open, high, low, close, settings, 1, |ohlc, t, i| {
        ohlc.candle(i).is_some_and(|c| inverted_shape(&c, t))
    })
}

/// Hanging Man: a hammer shape after an uptrend.
///
/// # Errors
///
/// Same conditions as [`hammer`].
pub fn hanging_man<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    scan(open, high, low, close, settings, 2, |ohlc, t, i| {
        ohlc.candle(i).is_some_and(|c| hammer_shape(&c, t))
            && after_uptrend(ohlc.close(), i, t.trend_lookback)
    })
}

/// Shooting Star: an inverted hammer shape after an uptrend.
///
/// # Errors
///
/// Same conditions as [`hammer`].
pub fn shooting_star<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    scan(open, high, low, close, settings, 2, |ohlc, t, i| {
        ohlc.candle(i).is_some_and(|c| inverted_shape(&c, t))
            && after_uptrend(ohlc.close(), i, t.trend_lookback)
    })
}

/// Doji pattern recognition: body ≤ 0.1 × range.
///
/// A four-price bar (open = high = low = close) counts as a doji.
///
/// # Errors
///
/// Same conditions as [`hammer`].
pub fn doji<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    scan(open, high, low, close, settings, 1, |ohlc, t, i| {
        ohlc.candle(i).is_some_and(|c| doji_shape(&c, t))
    })
}

/// Dragonfly Doji: a doji with open and close at the high and a long lower
/// shadow.
///
/// # Errors
///
/// Same conditions as [`hammer`].
pub fn dragonfly_doji<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    scan(open, high, low, close, settings, 1, |ohlc, t, i| {
        ohlc.candle(i).is_some_and(|c| {
            c.range() > T::zero()
                && doji_shape(&c, t)
                && c.upper_shadow() <= t.doji_shadow * c.range()
        })
    })
}

/// Gravestone Doji: a doji with open and close at the low and a long upper
/// shadow.
///
/// # Errors
///
/// Same conditions as [`hammer`].
pub fn gravestone_doji<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    scan(open, high, low, close, settings, 1, |ohlc, t, i| {
        ohlc.candle(i).is_some_and(|c| {
            c.range() > T::zero()
                && doji_shape(&c, t)
                && c.lower_shadow() <= t.doji_shadow * c.range()
        })
    })
}

/// Spinning Top: small body (≤ 0.3 × range) with both shadows longer than
/// the body.
///
/// # Errors
///
/// Same conditions as [`hammer`].
pub fn spinning_top<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    scan(open, high, low, close, settings, 1, |ohlc, t, i| {
        ohlc.candle(i).is_some_and(|c| {
            let body = c.body();
            c.range() > T::zero()
                && body <= t.spinning_top_body * c.range()
                && c.upper_shadow() > body
                && c.lower_shadow() > body
        })
    })
}
