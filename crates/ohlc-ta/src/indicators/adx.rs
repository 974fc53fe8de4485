//! Average Directional Index (ADX) and the directional indicators.
//!
//! Wilder's directional movement system measures trend *strength*, not
//! direction:
//!
//! ```text
//! +DI = 100 × Wilder(+DM) / Wilder(TR)
//! −DI = 100 × Wilder(−DM) / Wilder(TR)
//! DX  = 100 × |+DI − −DI| / (+DI + −DI)
//! ADX = Wilder(DX)
//! ```
//!
//! Directional movement starts at bar 1, so the directional indicators start
//! at `period` and the ADX at `2 × period − 1`.
//!
//! While the smoothed true range is zero (a market that has not moved since
//! the start) the directional indicators are NaN, and DX is NaN while both
//! smoothed movements are zero. The ADX seeds from the first defined DX, so
//! it recovers once the market moves.

use crate::error::Result;
use crate::kernels::smoothing::wilder_smooth;
use crate::kernels::true_range::{directional_movement, true_range_series};
use crate::traits::{validate_indicator_input, validate_period, validate_same_length, SeriesElement};
use crate::utils::safe_div;

/// Output of [`directional_index`].
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalOutput<T> {
    /// Plus directional indicator (+DI), 0–100.
    pub plus_di: Vec<T>,
    /// Minus directional indicator (−DI), 0–100.
    pub minus_di: Vec<T>,
    /// Directional index (DX), 0–100.
    pub dx: Vec<T>,
    /// Average directional index (ADX), 0–100.
    pub adx: Vec<T>,
}

/// Number of NaN values at the start of +DI, −DI and DX.
#[inline]
#[must_use]
pub const fn di_lookback(period: usize) -> usize {
    period
}

/// Number of NaN values at the start of the ADX.
#[inline]
#[must_use]
pub const fn adx_lookback(period: usize) -> usize {
    if period == 0 {
        0
    } else {
        2 * period - 1
    }
}

/// Minimum input length for the ADX.
#[inline]
#[must_use]
pub const fn adx_min_len(period: usize) -> usize {
    adx_lookback(period) + 1
}

/// Computes the Average Directional Index.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the period is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the inputs differ in length
/// - `Error::InsufficientData` if the series is shorter than [`adx_min_len`]
///
/// # Example
///
/// ```
/// use ohlc_ta::indicators::adx::adx;
///
/// let high: Vec<f64> = (0..40).map(|i| 10.0 + i as f64).collect();
/// let low: Vec<f64> = high.iter().map(|h| h - 1.0).collect();
/// let close: Vec<f64> = high.iter().map(|h| h - 0.5).collect();
///
/// let out = adx(&high, &low, &close, 14).unwrap();
/// assert!(out[26].is_nan());
/// // a steady one-way trend has maximal strength
/// assert!((out[27] - 100.0).abs() < 1e-9);
/// ```
pub fn adx<T: SeriesElement>(high: &[T], low: &[T], close: &[T], period: usize) -> Result<Vec<T>> {
    Ok(directional_index(high, low, close, period)?.adx)
}

/// Computes +DI, −DI, DX and ADX in one pass.
///
/// # Errors
///
/// Same conditions as [`adx`].
pub fn directional_index<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<DirectionalOutput<T>> {
    validate_period(period)?;
    validate_same_length(&[("high", high), ("low", low), ("close", close)])?;
    validate_indicator_input(high, adx_min_len(period), "adx")?;

    let mut tr = true_range_series(high, low, close);
    tr[0] = T::nan();
    let (plus_dm, minus_dm) = directional_movement(high, low);

    let tr_smooth = wilder_smooth(&tr, period)?;
    let plus_smooth = wilder_smooth(&plus_dm, period)?;
    let minus_smooth = wilder_smooth(&minus_dm, period)?;

    let hundred = T::hundred();

    let n = high.len();
    let mut plus_di = vec![T::nan(); n];
    let mut minus_di = vec![T::nan(); n];
    let mut dx = vec![T::nan(); n];
    for i in 0..n {
        if tr_smooth[i].is_nan() {
            continue;
        }
        let p = hundred * safe_div(plus_smooth[i], tr_smooth[i]);
        let m = hundred * safe_div(minus_smooth[i], tr_smooth[i]);
        plus_di[i] = p;
        minus_di[i] = m;
        dx[i] = hundred * safe_div((p - m).abs(), p + m);
    }

    let adx = wilder_smooth(&dx, period)?;

    Ok(DirectionalOutput {
        plus_di,
        minus_di,
        dx,
        adx,
    })
}
