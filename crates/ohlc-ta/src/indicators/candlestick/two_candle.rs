//! Two-candle pattern recognition functions.
//!
//! Each pattern compares a bar with the one before it; the first bar of the
//! series is always `false`.

use super::core::{scan, Candle, PatternSettings, Thresholds};
use crate::error::Result;
use crate::traits::SeriesElement;

/// Runs `rule` on every (previous, current) pair of NaN-free bars.
fn pairs<T, F>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
    rule: F,
) -> Result<Vec<bool>>
where
    T: SeriesElement,
    F: Fn(&Candle<T>, &Candle<T>, &Thresholds<T>) -> bool + Send + Sync,
{
    scan(open, high, low, close, settings, 2, |ohlc, t, i| {
        match (ohlc.candle(i - 1), ohlc.candle(i)) {
            (Some(prev), Some(cur)) => rule(&prev, &cur, t),
            _ => false,
        }
    })
}

/// Bullish Engulfing: a bearish bar whose body is engulfed by the next bullish
/// body.
///
/// ```text
/// prev bearish, cur bullish
/// cur.open ≤ prev.close and cur.close ≥ prev.open, at least one strict
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
/// use ohlc_ta::indicators::candlestick::{bullish_engulfing, PatternSettings};
///
/// let open = [105.0_f64, 99.0];
/// let high = [106.0_f64, 107.0];
/// let low = [99.0_f64, 98.0];
/// let close = [100.0_f64, 106.0];
///
/// let flags = bullish_engulfing(&open, &high, &low, &close, &PatternSettings::default()).unwrap();
/// assert_eq!(flags, vec![false, true]);
/// ```
pub fn bullish_engulfing<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    pairs(open, high, low, close, settings, |p, c, _| {
        p.is_bearish()
            && c.is_bullish()
            && c.open <= p.close
            && c.close >= p.open
            && (c.open < p.close || c.close > p.open)
    })
}

/// Bearish Engulfing: a bullish bar whose body is engulfed by the next bearish
/// body.
///
/// # Errors
///
/// Same conditions as [`bullish_engulfing`].
pub fn bearish_engulfing<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    pairs(open, high, low, close, settings, |p, c, _| {
        p.is_bullish()
            && c.is_bearish()
            && c.open >= p.close
            && c.close <= p.open
            && (c.open > p.close || c.close < p.open)
    })
}

/// Harami body containment: a long-bodied bar followed by a smaller body of
/// the opposite colour inside it.
fn harami<T: SeriesElement>(p: &Candle<T>, c: &Candle<T>, t: &Thresholds<T>) -> bool {
    p.has_long_body(t.long_body)
        && c.body_top() <= p.body_top()
        && c.body_bottom() >= p.body_bottom()
        && c.body() < p.body()
}

/// Bullish Harami: a long bearish bar followed by a small bullish body inside
/// it.
///
/// # Errors
///
/// Same conditions as [`bullish_engulfing`].
pub fn bullish_harami<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    pairs(open, high, low, close, settings, |p, c, t| {
        p.is_bearish() && c.is_bullish() && harami(p, c, t)
    })
}

/// Bearish Harami: a long bullish bar followed by a small bearish body inside
/// it.
///
/// # Errors
///
/// Same conditions as [`bullish_engulfing`].
pub fn bearish_harami<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    pairs(open, high, low, close, settings, |p, c, t| {
        p.is_bullish() && c.is_bearish() && harami(p, c, t)
    })
}

/// Piercing Line: a long bearish bar, then a bullish bar opening below its
/// close and closing past the midpoint of its body (by `penetration`) but
/// below its open.
///
/// # Errors
///
/// Same conditions as [`bullish_engulfing`].
pub fn piercing<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    pairs(open, high, low, close, settings, |p, c, t| {
        p.is_bearish()
            && p.has_long_body(t.long_body)
            && c.is_bullish()
            && c.open < p.close
            && c.close > p.close + t.penetration * p.body()
            && c.close < p.open
    })
}

/// Dark Cloud Cover: a long bullish bar, then a bearish bar opening above its
/// close and closing into its body by at least `penetration` but above its
/// open.
///
/// # Errors
///
/// Same conditions as [`bullish_engulfing`].
pub fn dark_cloud_cover<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    pairs(open, high, low, close, settings, |p, c, t| {
        p.is_bullish()
            && p.has_long_body(t.long_body)
            && c.is_bearish()
            && c.open > p.close
            && c.close < p.close - t.penetration * p.body()
            && c.close > p.open
    })
}

/// Bullish Kicker: a long bearish bar, then a long bullish bar opening above
/// the previous open.
///
/// # Errors
///
/// Same conditions as [`bullish_engulfing`].
pub fn bullish_kicker<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    pairs(open, high, low, close, settings, |p, c, t| {
        p.is_bearish()
            && c.is_bullish()
            && p.has_long_body(t.long_body)
            && c.has_long_body(t.long_body)
            && c.open > p.open
    })
}

/// Bearish Kicker: a long bullish bar, then a long bearish bar opening below
/// the previous open.
///
/// # Errors
///
/// Same conditions as [`bullish_engulfing`].
pub fn bearish_kicker<T: SeriesElement>(
    open: &[T],
    high: &[T],
    low: &[T],
    close: &[T],
    settings: &PatternSettings,
) -> Result<Vec<bool>> {
    pairs(open, high, low, close, settings, |p, c, t| {
        p.is_bullish()
            && c.is_bearish()
            && p.has_long_body(t.long_body)
            && c.has_long_body(t.long_body)
            && c.open < p.open
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]

    use super::*;
    use crate::error::Error;

    fn defaults() -> PatternSettings {
        PatternSettings::default()
    }

    #[test]
    fn test_bullish_engulfing() {
        let open = [105.0_f64, 99.0];
        let high = [106.0_f64, 107.0];
        let low = [99.0_f64, 98.0];
        let close = [100.0_f64, 106.0];
        assert_eq!(
            bullish_engulfing(&open, &high, &low, &close, &defaults()).unwrap(),
            vec![false, true]
        );
        assert_eq!(
            bearish_engulfing(&open, &high, &low, &close, &defaults()).unwrap(),
            vec![false, false]
        );
    }

    #[test]
    fn test_engulfing_needs_one_strict_side() {
        // identical body extents
        let open = [105.0_f64, 100.0];
        let high = [106.0_f64, 106.0];
        let low = [99.0_f64, 99.0];
        let close = [100.0_f64, 105.0];
        assert_eq!(
            bullish_engulfing(&open, &high, &low, &close, &defaults()).unwrap(),
            vec![false, false]
        );
    }

    #[test]
    fn test_bearish_engulfing() {
        let open = [100.0_f64, 106.0];
        let high = [106.0_f64, 107.0];
        let low = [99.0_f64, 98.0];
        let close = [105.0_f64, 99.0];
        assert_eq!(
            bearish_engulfing(&open, &high, &low, &close, &defaults()).unwrap(),
            vec![false, true]
        );
    }

    #[test]
    fn test_harami() {
        // long bearish body 10 of range 12, then a small bullish body inside
        let open = [110.0_f64, 103.0];
        let high = [111.0_f64, 106.0];
        let low = [99.0_f64, 102.0];
        let close = [100.0_f64, 105.0];
        assert_eq!(
            bullish_harami(&open, &high, &low, &close, &defaults()).unwrap(),
            vec![false, true]
        );
        assert_eq!(
            bearish_harami(&open, &high, &low, &close, &defaults()).unwrap(),
            vec![false, false]
        );

        let open = [100.0_f64, 105.0];
        let close = [110.0_f64, 103.0];
        assert_eq!(
            bearish_harami(&open, &high, &low, &close, &defaults()).unwrap(),
            vec![false, true]
        );
    }

    #[test]
    fn test_harami_short_first_body() {
        // first body 2 of range 12
        let open = [106.0_f64, 104.5];
        let high = [111.0_f64, 106.0];
        let low = [99.0_f64, 102.0];
        let close = [104.0_f64, 105.0];
        assert_eq!(
            bullish_harami(&open, &high, &low, &close, &defaults()).unwrap(),
            vec![false, false]
        );
    }

    #[test]
    fn test_piercing_and_dark_cloud() {
        // bearish 110 -> 100, then 98 -> 107 (midpoint 105)
        let open = [110.0_f64, 98.0];
        let high = [111.0_f64, 108.0];
        let low = [99.0_f64, 97.0];
        let close = [100.0_f64, 107.0];
        assert_eq!(piercing(&open, &high, &low, &close, &defaults()).unwrap(), vec![false, true]);

        // close below the midpoint
        let shallow = [100.0_f64, 104.0];
        assert_eq!(
            piercing(&open, &high, &low, &shallow, &defaults()).unwrap(),
            vec![false, false]
        );

        // bullish 100 -> 110, then 112 -> 103 (midpoint 105)
        let open = [100.0_f64, 112.0];
        let high = [111.0_f64, 113.0];
        let low = [99.0_f64, 102.0];
        let close = [110.0_f64, 103.0];
        assert_eq!(
            dark_cloud_cover(&open, &high, &low, &close, &defaults()).unwrap(),
            vec![false, true]
        );
    }

    #[test]
    fn test_kickers() {
        let open = [110.0_f64, 112.0];
        let high = [110.5_f64, 122.5];
        let low = [99.5_f64, 111.5];
        let close = [100.0_f64, 122.0];
        assert_eq!(
            bullish_kicker(&open, &high, &low, &close, &defaults()).unwrap(),
            vec![false, true]
        );

        let open = [100.0_f64, 98.0];
        let high = [110.5_f64, 98.5];
        let low = [99.5_f64, 87.5];
        let close = [110.0_f64, 88.0];
        assert_eq!(
            bearish_kicker(&open, &high, &low, &close, &defaults()).unwrap(),
            vec![false, true]
        );
    }

    #[test]
    fn test_nan_pair_is_false() {
        let open = [105.0_f64, f64::NAN];
        let high = [106.0_f64, 107.0];
        let low = [99.0_f64, 98.0];
        let close = [100.0_f64, 106.0];
        assert_eq!(
            bullish_engulfing(&open, &high, &low, &close, &defaults()).unwrap(),
            vec![false, false]
        );
    }

    #[test]
    fn test_single_bar_input() {
        let p = [1.0_f64];
        assert_eq!(piercing(&p, &p, &p, &p, &defaults()).unwrap(), vec![false]);
        assert!(matches!(
            piercing(&p, &p, &p, &[1.0, 2.0], &defaults()),
            Err(Error::LengthMismatch { .. })
        ));
    }
}
