//! Three-candle pattern recognition functions.
//!
//! Patterns are reported on the third bar; the first two bars of the series
//! are always `false`.

use super::core::{scan, Candle, PatternSettings, Thresholds};
use crate::error::Result;
use crate::traits::SeriesElement;

fn triples<T, F>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
    rule: F,
) -> Result<Vec<bool>>
where
    T: SeriesElement,
    F: Fn(&Candle<T>, &Candle<T>, &Candle<T>, &Thresholds<T>) -> bool + Send + Sync,
{
    scan(open, high, low, close, settings, 3, |ohlc, t, i| {
        match (ohlc.candle(i - 2), ohlc.candle(i - 1), ohlc.candle(i)) {
            (Some(a), Some(b), Some(c)) => rule(&a, &b, &c, t),
            _ => false,
        }
    })
}

/// Morning Star: a long bearish bar, a small-bodied star below its close, and
/// a bullish bar closing into the first body by at least `penetration`.
///
/// ```text
/// a bearish, long body
/// b.body ≤ star_body_ratio × a.body, max(b.open, b.close) ≤ a.close
/// c bullish, c.close > a.close + penetration × a.body
/// ```
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
/// use ohlc_ta::indicators::candlestick::{morning_star, PatternSettings};
///
/// let open = [110.0_f64, 98.0, 99.0];
/// let high = [111.0_f64, 99.0, 108.0];
/// let low = [99.0_f64, 96.0, 98.5];
/// let close = [100.0_f64, 97.5, 107.0];
///
/// let flags = morning_star(&open, &high, &low, &close, &PatternSettings::default()).unwrap();
/// assert_eq!(flags, vec![false, false, true]);
/// ```
pub fn morning_star<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    triples(open, high, low, close, settings, |a, b, c, t| {
        a.is_bearish()
            && a.has_long_body(t.long_body)
            && b.body() <= t.star_body * a.body()
            && b.body_top() <= a.close
            && c.is_bullish()
            && c.close > a.close + t.penetration * a.body()
    })
}

/// Evening Star: a long bullish bar, a small-bodied star above its close, and
/// a bearish bar closing into the first body by at least `penetration`.
///
/// # Errors
///
/// Same conditions as [`morning_star`].
pub fn evening_star<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    triples(open, high, low, close, settings, |a, b, c, t| {
        a.is_bullish()
            && a.has_long_body(t.long_body)
            && b.body() <= t.star_body * a.body()
            && b.body_bottom() >= a.close
            && c.is_bearish()
            && c.close < a.close - t.penetration * a.body()
    })
}

/// One advancing soldier following `prev`.
fn soldier<T: SeriesElement>(prev: &Candle<T>, cur: &Candle<T>, t: &Thresholds<T>) -> bool {
    cur.is_bullish()
        && cur.has_long_body(t.long_body)
        && cur.upper_shadow() <= t.soldier_shadow * cur.range()
        && cur.close > prev.close
        && cur.open > prev.open
        && cur.open <= prev.close
}

/// One declining crow following `prev`.
fn crow<T: SeriesElement>(prev: &Candle<T>, cur: &Candle<T>, t: &Thresholds<T>) -> bool {
    cur.is_bearish()
        && cur.has_long_body(t.long_body)
        && cur.lower_shadow() <= t.soldier_shadow * cur.range()
        && cur.close < prev.close
        && cur.open < prev.open
        && cur.open >= prev.close
}

/// Three White Soldiers: three long bullish bars, each opening within the
/// previous body and closing higher, with short upper shadows.
///
/// # Errors
///
/// Same conditions as [`morning_star`].
pub fn three_white_soldiers<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    triples(open, high, low, close, settings, |a, b, c, t| {
        a.is_bullish()
            && a.has_long_body(t.long_body)
            && a.upper_shadow() <= t.soldier_shadow * a.range()
            && soldier(a, b, t)
            && soldier(b, c, t)
    })
}

/// Three Black Crows: three long bearish bars, each opening within the
/// previous body and closing lower, with short lower shadows.
///
/// # Errors
///
/// Same conditions as [`morning_star`].
pub fn three_black_crows<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    triples(open, high, low, close, settings, |a, b, c, t| {
        a.is_bearish()
            && a.has_long_body(t.long_body)
            && a.lower_shadow() <= t.soldier_shadow * a.range()
            && crow(a, b, t)
            && crow(b, c, t)
    })
}
