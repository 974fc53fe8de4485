//! Statistical Functions
//!
//! Rolling dispersion and association measures used by the volatility and
//! relative-performance indicators.
//!
//! # Functions
//!
//! - [`variance`] / [`stddev`] - rolling variance and standard deviation
//! - [`covariance`] - rolling covariance of two series
//! - [`pct_change`] - percentage change over `periods` bars
//! - [`beta`] - sensitivity of an asset's returns to a benchmark's returns
//! - [`correlation`] - Pearson correlation coefficient
//! - [`zscore`] - distance from the rolling mean in standard deviations
//!
//! # Mathematical Conventions
//!
//! - **Population formulas by default**: [`Ddof::Population`] (÷n) is the
//!   crate-wide convention. [`variance`], [`stddev`] and [`covariance`] accept
//!   [`Ddof::Sample`] (÷(n−1)) explicitly; a sample statistic over a window of
//!   one is rejected.
//! - **Welford updates**: moments are maintained with add/remove Welford
//!   updates and periodically rebuilt from the window.
//! - **Undefined ratios are NaN**: zero variance in a denominator (flat
//!   window) yields NaN, never ±∞.

pub use crate::kernels::rolling::Ddof;

use crate::error::Result;
use crate::kernels::rolling::{
    rolling_covariance_unchecked, rolling_mean_unchecked, rolling_variance_unchecked,
};
use crate::traits::{validate_indicator_input, validate_period, validate_same_length, SeriesElement};
use crate::utils::safe_div;

// =============================================================================
// Variance / Standard Deviation
// =============================================================================

/// Returns the lookback period for the windowed statistics.
#[inline]
#[must_use]
pub const fn statistic_lookback(window: usize) -> usize {
    if window == 0 {
        0
    } else {
        window - 1
    }
}

/// Computes the rolling variance.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the window is zero, or one with [`Ddof::Sample`]
/// - `Error::EmptyInput` if the data is empty
/// - `Error::InsufficientData` if the data is shorter than the window
///
/// # Example
///
/// ```
/// use ohlc_ta::indicators::statistics::{variance, Ddof};
///
/// let data = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// let pop = variance(&data, 8, Ddof::Population).unwrap();
/// assert!((pop[7] - 4.0).abs() < 1e-12);
/// let sample = variance(&data, 8, Ddof::Sample).unwrap();
/// assert!((sample[7] - 32.0 / 7.0).abs() < 1e-12);
/// ```
pub fn variance<T: SeriesElement>(data: &[T], window: usize, ddof: Ddof) -> Result<Vec<T>> {
    validate_indicator_input(data, window, "variance")?;
    ddof.validate_window(window)?;
    rolling_variance_unchecked(data, window, ddof)
}

/// Computes the rolling standard deviation.
///
/// # Errors
///
/// Same conditions as [`variance`].
pub fn stddev<T: SeriesElement>(data: &[T], window: usize, ddof: Ddof) -> Result<Vec<T>> {
    let mut out = variance(data, window, ddof)?;
    for v in &mut out {
        *v = v.sqrt();
    }
    Ok(out)
}

// =============================================================================
// Covariance
// =============================================================================

/// Computes the rolling covariance of two aligned series.
///
/// # Errors
///
/// - the conditions of [`variance`]
/// - `Error::LengthMismatch` if the series differ in length
pub fn covariance<T: SeriesElement>(x: &[T], y: &[T], window: usize, ddof: Ddof) -> Result<Vec<T>> {
    validate_period(window)?;
    validate_same_length(&[("x", x), ("y", y)])?;
    validate_indicator_input(x, window, "covariance")?;
    ddof.validate_window(window)?;
    rolling_covariance_unchecked(x, y, window, ddof)
}

// =============================================================================
// Percentage Change
// =============================================================================

/// Computes the percentage change over `periods` bars (×100).
///
/// The first `periods` values are NaN; a zero base value yields NaN.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `periods` is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::InsufficientData` if the data is shorter than `periods + 1`
pub fn pct_change<T: SeriesElement>(data: &[T], periods: usize) -> Result<Vec<T>> {
    validate_period(periods)?;
    validate_indicator_input(data, periods + 1, "pct_change")?;
    Ok(pct_change_unchecked(data, periods))
}

fn pct_change_unchecked<T: SeriesElement>(data: &[T], periods: usize) -> Vec<T> {
    let mut out = vec![T::nan(); data.len()];
    for i in periods..data.len() {
        out[i] = T::hundred() * safe_div(data[i] - data[i - periods], data[i - periods]);
    }
    out
}

// =============================================================================
// Beta
// =============================================================================

/// Returns the lookback period for [`beta`] (one bar is spent on the first return).
#[inline]
#[must_use]
pub const fn beta_lookback(window: usize) -> usize {
    window
}

/// Returns the minimum input length for [`beta`].
#[inline]
#[must_use]
pub const fn beta_min_len(window: usize) -> usize {
    window + 1
}

/// Computes the rolling beta of `asset` against `market`.
///
/// ```text
/// r_a  = pct_change(asset, 1)
/// r_m  = pct_change(market, 1)
/// beta = cov(r_a, r_m) / var(r_m)
/// ```
///
/// Numerator and denominator share [`Ddof::Population`], so the ratio does
/// not depend on the degrees-of-freedom choice. A window in which the market
/// return does not vary is NaN.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the window is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the series differ in length
/// - `Error::InsufficientData` if the input is shorter than `window + 1`
///
/// # Example
///
/// ```
/// use ohlc_ta::indicators::statistics::beta;
///
/// let market = [100.0_f64, 101.0, 99.0, 102.0, 103.0, 101.0];
/// // an asset whose returns are exactly twice the market's
/// let mut asset = vec![50.0_f64];
/// for i in 1..market.len() {
///     let r = market[i] / market[i - 1] - 1.0;
///     let last = asset[i - 1];
///     asset.push(last * (1.0 + 2.0 * r));
/// }
/// let out = beta(&asset, &market, 4).unwrap();
/// assert!(out[3].is_nan());
/// assert!((out[4] - 2.0).abs() < 1e-9);
/// ```
pub fn beta<T: SeriesElement>(asset: &[T], market: &[T], window: usize) -> Result<Vec<T>> {
    validate_period(window)?;
    validate_same_length(&[("asset", asset), ("market", market)])?;
    validate_indicator_input(asset, beta_min_len(window), "beta")?;

    let ddof = Ddof::default();
    let asset_returns = pct_change_unchecked(asset, 1);
    let market_returns = pct_change_unchecked(market, 1);
    let cov = rolling_covariance_unchecked(&asset_returns, &market_returns, window, ddof)?;
    let var = rolling_variance_unchecked(&market_returns, window, ddof)?;

    Ok(cov.iter().zip(&var).map(|(&c, &v)| safe_div(c, v)).collect())
}

// =============================================================================
// Correlation
// =============================================================================

/// Computes the rolling Pearson correlation coefficient.
///
/// A window in which either series is constant is NaN. Results are clamped to
/// `[-1, 1]` against rounding.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the window is zero
/// - `Error::EmptyInput` if the inputs are empty
/// - `Error::LengthMismatch` if the series differ in length
/// - `Error::InsufficientData` if the input is shorter than the window
pub fn correlation<T: SeriesElement>(x: &[T], y: &[T], window: usize) -> Result<Vec<T>> {
    validate_period(window)?;
    validate_same_length(&[("x", x), ("y", y)])?;
    validate_indicator_input(x, window, "correlation")?;

    let ddof = Ddof::default();
    let cov = rolling_covariance_unchecked(x, y, window, ddof)?;
    let var_x = rolling_variance_unchecked(x, window, ddof)?;
    let var_y = rolling_variance_unchecked(y, window, ddof)?;

    Ok((0..x.len())
        .map(|i| {
            let r = safe_div(cov[i], (var_x[i] * var_y[i]).sqrt());
            if r.is_nan() {
                r
            } else {
                r.max(-T::one()).min(T::one())
            }
        })
        .collect())
}

// =============================================================================
// Z-Score
// =============================================================================

/// Computes the rolling z-score `(x − mean) / std` with the population
/// standard deviation.
///
/// A flat window (zero deviation) is NaN.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if the window is zero
/// - `Error::EmptyInput` if the data is empty
/// - `Error::InsufficientData` if the data is shorter than the window
pub fn zscore<T: SeriesElement>(data: &[T], window: usize) -> Result<Vec<T>> {
    validate_indicator_input(data, window, "zscore")?;

    let mean = rolling_mean_unchecked(data, window)?;
    let var = rolling_variance_unchecked(data, window, Ddof::default())?;

    Ok(data
        .iter()
        .zip(mean.iter().zip(&var))
        .map(|(&x, (&m, &v))| safe_div(x - m, v.sqrt()))
        .collect())
}
