//! Name-based dispatch over every single-output indicator and pattern.
//!
//! The registry is a static table: each name maps to a [`Family`] and a
//! typed [`Kernel`] function pointer, instantiated for the caller's element
//! type. Interface layers that receive a function name and a bag of arrays go
//! through [`compute`] (typed) or [`compute_dyn`] (dtype-tagged buffers).
//!
//! Multi-output indicators (MACD, Bollinger Bands, Keltner and Donchian
//! channels, Stochastic) are called through their typed functions; the
//! registry carries their scalar derivatives where one exists.
//!
//! # Input mapping
//!
//! | Kernel | Inputs used |
//! |--------|-------------|
//! | `Series`, `SeriesMultiplier` | `close` |
//! | `SeriesPair` | `close`, `benchmark` |
//! | `Hl` | `high`, `low` |
//! | `Hlc`, `HlcWindow` | `high`, `low`, `close` |
//! | `Volume` | `close`, `volume` |
//! | `Hlcv`, `HlcvWindow` | `high`, `low`, `close`, `volume` |
//! | `Pattern` | `open`, `high`, `low`, `close` |
//!
//! # Example
//!
//! ```
//! use ohlc_ta::registry::{compute, Inputs, Output, Params};
//!
//! let close = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let inputs = Inputs::new().close(&close);
//! let params = Params::new().window(3);
//!
//! match compute("sma", &inputs, &params).unwrap() {
//!     Output::Values(v) => assert_eq!(v[4], 4.0),
//!     Output::Flags(_) => unreachable!(),
//! }
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::indicators::candlestick::{self, PatternSettings};
use crate::indicators::{
    ad, adx, atr, bollinger, cci, cmo, ema, mfi, obv, price_transform, pvt, roc, rsi, sma,
    statistics, volume_index, vwap, williams_r, wma,
};
use crate::traits::SeriesElement;

/// Indicator family a registered name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Moving averages, trend strength and price transforms.
    Trend,
    /// Range and dispersion envelopes.
    Volatility,
    /// Oscillators and rate-of-change measures.
    Momentum,
    /// Volume-weighted and cumulative volume series.
    Volume,
    /// Rolling statistics.
    Statistics,
    /// Candlestick pattern classifiers.
    Pattern,
}

impl Family {
    /// Lowercase family name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trend => "trend",
            Self::Volatility => "volatility",
            Self::Momentum => "momentum",
            Self::Volume => "volume",
            Self::Statistics => "statistics",
            Self::Pattern => "pattern",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered function, grouped by call signature.
#[derive(Clone, Copy)]
pub enum Kernel<T> {
    /// `(series, window)`
    Series(fn(&[T], usize) -> Result<Vec<T>>),
    /// `(series, window, multiplier)`
    SeriesMultiplier(fn(&[T], usize, f64) -> Result<Vec<T>>),
    /// `(series, benchmark, window)`
    SeriesPair(fn(&[T], &[T], usize) -> Result<Vec<T>>),
    /// `(high, low)`
    Hl(fn(&[T], &[T]) -> Result<Vec<T>>),
    /// `(high, low, close)`
    Hlc(fn(&[T], &[T], &[T]) -> Result<Vec<T>>),
    /// `(high, low, close, window)`
    HlcWindow(fn(&[T], &[T], &[T], usize) -> Result<Vec<T>>),
    /// `(close, volume)`
    Volume(fn(&[T], &[T]) -> Result<Vec<T>>),
    /// `(high, low, close, volume)`
    Hlcv(fn(&[T], &[T], &[T], &[T]) -> Result<Vec<T>>),
    /// `(high, low, close, volume, window)`
    HlcvWindow(fn(&[T], &[T], &[T], &[T], usize) -> Result<Vec<T>>),
    /// `(open, high, low, close, settings)`
    Pattern(fn(&[T], &[T], &[T], &[T], &PatternSettings) -> Result<Vec<bool>>),
}

impl<T> Kernel<T> {
    /// Signature class name.
    #[must_use]
    pub const fn signature(&self) -> &'static str {
        match self {
            Self::Series(_) => "series",
            Self::SeriesMultiplier(_) => "series_multiplier",
            Self::SeriesPair(_) => "series_pair",
            Self::Hl(_) => "hl",
            Self::Hlc(_) => "hlc",
            Self::HlcWindow(_) => "hlc_window",
            Self::Volume(_) => "volume",
            Self::Hlcv(_) => "hlcv",
            Self::HlcvWindow(_) => "hlcv_window",
            Self::Pattern(_) => "pattern",
        }
    }
}

impl<T> fmt::Debug for Kernel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Kernel::{}", self.signature())
    }
}

/// A registry entry.
#[derive(Debug, Clone, Copy)]
pub struct Entry<T> {
    /// Registered name.
    pub name: &'static str,
    /// Indicator family.
    pub family: Family,
    /// Typed callable.
    pub kernel: Kernel<T>,
}

/// Result of a registry call.
#[derive(Debug, Clone, PartialEq)]
pub enum Output<T> {
    /// Indicator values, NaN during warm-up.
    Values(Vec<T>),
    /// Pattern flags.
    Flags(Vec<bool>),
}

impl<T> Output<T> {
    /// Output length.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Values(v) => v.len(),
            Self::Flags(f) => f.len(),
        }
    }

    /// True when the output holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The values, if this is indicator output.
    #[must_use]
    pub fn as_values(&self) -> Option<&[T]> {
        match self {
            Self::Values(v) => Some(v),
            Self::Flags(_) => None,
        }
    }

    /// The flags, if this is pattern output.
    #[must_use]
    pub fn as_flags(&self) -> Option<&[bool]> {
        match self {
            Self::Flags(f) => Some(f),
            Self::Values(_) => None,
        }
    }
}

/// Borrowed input series for a registry call. Absent series are `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs<'a, T> {
    /// Opening prices.
    pub open: Option<&'a [T]>,
    /// High prices.
    pub high: Option<&'a [T]>,
    /// Low prices.
    pub low: Option<&'a [T]>,
    /// Closing prices; the primary series for single-series kernels.
    pub close: Option<&'a [T]>,
    /// Traded volume.
    pub volume: Option<&'a [T]>,
    /// Second series for pairwise statistics.
    pub benchmark: Option<&'a [T]>,
}

impl<T> Default for Inputs<'_, T> {
    fn default() -> Self {
        Self {
            open: None,
            high: None,
            low: None,
            close: None,
            volume: None,
            benchmark: None,
        }
    }
}

impl<'a, T> Inputs<'a, T> {
    /// No series set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open, high, low and close at once.
    #[must_use]
    pub fn ohlc(open: &'a [T], high: &'a [T], low: &'a [T], close: &'a [T]) -> Self {
        Self::new().open(open).high(high).low(low).close(close)
    }

    /// Sets the opening prices.
    #[must_use]
    pub const fn open(mut self, series: &'a [T]) -> Self {
        self.open = Some(series);
        self
    }

    /// Sets the high prices.
    #[must_use]
    pub const fn high(mut self, series: &'a [T]) -> Self {
        self.high = Some(series);
        self
    }

    /// Sets the low prices.
    #[must_use]
    pub const fn low(mut self, series: &'a [T]) -> Self {
        self.low = Some(series);
        self
    }

    /// Sets the closing prices.
    #[must_use]
    pub const fn close(mut self, series: &'a [T]) -> Self {
        self.close = Some(series);
        self
    }

    /// Sets the volume.
    #[must_use]
    pub const fn volume(mut self, series: &'a [T]) -> Self {
        self.volume = Some(series);
        self
    }

    /// Sets the benchmark series.
    #[must_use]
    pub const fn benchmark(mut self, series: &'a [T]) -> Self {
        self.benchmark = Some(series);
        self
    }

    fn primary(&self) -> Option<&'a [T]> {
        self.close.or(self.open).or(self.high).or(self.low)
    }
}

/// Scalar parameters for a registry call.
///
/// Defaults: window 14, multiplier 2.0, default [`PatternSettings`]. Each
/// kernel reads only the parameters its signature takes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Params {
    /// Window (period) length.
    pub window: usize,
    /// Envelope multiplier.
    pub multiplier: f64,
    /// Pattern thresholds.
    pub patterns: PatternSettings,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            window: 14,
            multiplier: 2.0,
            patterns: PatternSettings::default(),
        }
    }
}

impl Params {
    /// Default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window.
    #[must_use]
    pub const fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Sets the multiplier.
    #[must_use]
    pub const fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Sets the pattern thresholds.
    #[must_use]
    pub const fn patterns(mut self, settings: PatternSettings) -> Self {
        self.patterns = settings;
        self
    }
}

/// Every registered name, grouped by family.
pub const NAMES: &[&str] = &[
    // trend
    "sma",
    "ema",
    "smma",
    "dema",
    "tema",
    "wma",
    "trima",
    "adx",
    "typical_price",
    "median_price",
    "weighted_close",
    // volatility
    "true_range",
    "atr",
    "natr",
    "bollinger_percent_b",
    "bollinger_bandwidth",
    // momentum
    "rsi",
    "cmo",
    "roc",
    "momentum",
    "williams_r",
    "cci",
    // volume
    "obv",
    "ad",
    "pvt",
    "nvi",
    "pvi",
    "vwap",
    "mfi",
    "cmf",
    // statistics
    "variance",
    "stddev",
    "zscore",
    "pct_change",
    "beta",
    "correlation",
    // patterns
    "hammer",
    "inverted_hammer",
    "hanging_man",
    "shooting_star",
    "doji",
    "dragonfly_doji",
    "gravestone_doji",
    "spinning_top",
    "bullish_engulfing",
    "bearish_engulfing",
    "bullish_harami",
    "bearish_harami",
    "piercing",
    "dark_cloud_cover",
    "bullish_kicker",
    "bearish_kicker",
    "morning_star",
    "evening_star",
    "three_white_soldiers",
    "three_black_crows",
];

/// All registered names.
#[must_use]
pub fn names() -> &'static [&'static str] {
    NAMES
}

fn population_variance<T: SeriesElement>(data: &[T], window: usize) -> Result<Vec<T>> {
    statistics::variance(data, window, statistics::Ddof::Population)
}

fn population_stddev<T: SeriesElement>(data: &[T], window: usize) -> Result<Vec<T>> {
    statistics::stddev(data, window, statistics::Ddof::Population)
}

/// Looks up `name` and instantiates its kernel for `T`.
#[must_use]
pub fn lookup<T: SeriesElement>(name: &str) -> Option<Entry<T>> {
    let name = NAMES.iter().copied().find(|&n| n == name)?;
    let (family, kernel) = match name {
        "sma" => (Family::Trend, Kernel::Series(sma::sma::<T>)),
        "ema" => (Family::Trend, Kernel::Series(ema::ema::<T>)),
        "smma" => (Family::Trend, Kernel::Series(ema::smma::<T>)),
        "dema" => (Family::Trend, Kernel::Series(ema::dema::<T>)),
        "tema" => (Family::Trend, Kernel::Series(ema::tema::<T>)),
        "wma" => (Family::Trend, Kernel::Series(wma::wma::<T>)),
        "trima" => (Family::Trend, Kernel::Series(wma::trima::<T>)),
        "adx" => (Family::Trend, Kernel::HlcWindow(adx::adx::<T>)),
        "typical_price" => (Family::Trend, Kernel::Hlc(price_transform::typical_price::<T>)),
        "median_price" => (Family::Trend, Kernel::Hl(price_transform::median_price::<T>)),
        "weighted_close" => (Family::Trend, Kernel::Hlc(price_transform::weighted_close::<T>)),

        "true_range" => (Family::Volatility, Kernel::Hlc(atr::true_range::<T>)),
        "atr" => (Family::Volatility, Kernel::HlcWindow(atr::atr::<T>)),
        "natr" => (Family::Volatility, Kernel::HlcWindow(atr::natr::<T>)),
        "bollinger_percent_b" => (
            Family::Volatility,
            Kernel::SeriesMultiplier(bollinger::bollinger_percent_b::<T>),
        ),
        "bollinger_bandwidth" => (
            Family::Volatility,
            Kernel::SeriesMultiplier(bollinger::bollinger_bandwidth::<T>),
        ),

        "rsi" => (Family::Momentum, Kernel::Series(rsi::rsi::<T>)),
        "cmo" => (Family::Momentum, Kernel::Series(cmo::cmo::<T>)),
        "roc" => (Family::Momentum, Kernel::Series(roc::roc::<T>)),
        "momentum" => (Family::Momentum, Kernel::Series(roc::momentum::<T>)),
        "williams_r" => (Family::Momentum, Kernel::HlcWindow(williams_r::williams_r::<T>)),
        "cci" => (Family::Momentum, Kernel::HlcWindow(cci::cci::<T>)),

        "obv" => (Family::Volume, Kernel::Volume(obv::obv::<T>)),
        "ad" => (Family::Volume, Kernel::Hlcv(ad::ad::<T>)),
        "pvt" => (Family::Volume, Kernel::Volume(pvt::pvt::<T>)),
        "nvi" => (Family::Volume, Kernel::Volume(volume_index::nvi::<T>)),
        "pvi" => (Family::Volume, Kernel::Volume(volume_index::pvi::<T>)),
        "vwap" => (Family::Volume, Kernel::Hlcv(vwap::vwap::<T>)),
        "mfi" => (Family::Volume, Kernel::HlcvWindow(mfi::mfi::<T>)),
        "cmf" => (Family::Volume, Kernel::HlcvWindow(ad::cmf::<T>)),

        "variance" => (Family::Statistics, Kernel::Series(population_variance::<T>)),
        "stddev" => (Family::Statistics, Kernel::Series(population_stddev::<T>)),
        "zscore" => (Family::Statistics, Kernel::Series(statistics::zscore::<T>)),
        "pct_change" => (Family::Statistics, Kernel::Series(statistics::pct_change::<T>)),
        "beta" => (Family::Statistics, Kernel::SeriesPair(statistics::beta::<T>)),
        "correlation" => (Family::Statistics, Kernel::SeriesPair(statistics::correlation::<T>)),

        "hammer" => (Family::Pattern, Kernel::Pattern(candlestick::hammer::<T>)),
        "inverted_hammer" => (Family::Pattern, Kernel::Pattern(candlestick::inverted_hammer::<T>)),
        "hanging_man" => (Family::Pattern, Kernel::Pattern(candlestick::hanging_man::<T>)),
        "shooting_star" => (Family::Pattern, Kernel::Pattern(candlestick::shooting_star::<T>)),
        "doji" => (Family::Pattern, Kernel::Pattern(candlestick::doji::<T>)),
        "dragonfly_doji" => (Family::Pattern, Kernel::Pattern(candlestick::dragonfly_doji::<T>)),
        "gravestone_doji" => (Family::Pattern, Kernel::Pattern(candlestick::gravestone_doji::<T>)),
        "spinning_top" => (Family::Pattern, Kernel::Pattern(candlestick::spinning_top::<T>)),
        "bullish_engulfing" => (
            Family::Pattern,
            Kernel::Pattern(candlestick::bullish_engulfing::<T>),
        ),
        "bearish_engulfing" => (
            Family::Pattern,
            Kernel::Pattern(candlestick::bearish_engulfing::<T>),
        ),
        "bullish_harami" => (Family::Pattern, Kernel::Pattern(candlestick::bullish_harami::<T>)),
        "bearish_harami" => (Family::Pattern, Kernel::Pattern(candlestick::bearish_harami::<T>)),
        "piercing" => (Family::Pattern, Kernel::Pattern(candlestick::piercing::<T>)),
        "dark_cloud_cover" => (
            Family::Pattern,
            Kernel::Pattern(candlestick::dark_cloud_cover::<T>),
        ),
        "bullish_kicker" => (Family::Pattern, Kernel::Pattern(candlestick::bullish_kicker::<T>)),
        "bearish_kicker" => (Family::Pattern, Kernel::Pattern(candlestick::bearish_kicker::<T>)),
        "morning_star" => (Family::Pattern, Kernel::Pattern(candlestick::morning_star::<T>)),
        "evening_star" => (Family::Pattern, Kernel::Pattern(candlestick::evening_star::<T>)),
        "three_white_soldiers" => (
            Family::Pattern,
            Kernel::Pattern(candlestick::three_white_soldiers::<T>),
        ),
        "three_black_crows" => (
            Family::Pattern,
            Kernel::Pattern(candlestick::three_black_crows::<T>),
        ),
        _ => return None,
    };
    Some(Entry {
        name,
        family,
        kernel,
    })
}

fn require<'a, T>(
    series: Option<&'a [T]>,
    function: &'static str,
    input: &'static str,
) -> Result<&'a [T]> {
    series.ok_or(Error::MissingInput { function, input })
}

impl<T: SeriesElement> Entry<T> {
    /// Calls the kernel with the inputs its signature needs.
    ///
    /// # Errors
    ///
    /// - `Error::MissingInput` if a required series is absent
    /// - any error of the underlying indicator or pattern
    pub fn call(&self, inputs: &Inputs<'_, T>, params: &Params) -> Result<Output<T>> {
        let f = self.name;
        let window = params.window;
        let output = match self.kernel {
            Kernel::Series(kernel) => {
                Output::Values(kernel(require(inputs.close, f, "close")?, window)?)
            }
            Kernel::SeriesMultiplier(kernel) => Output::Values(kernel(
                require(inputs.close, f, "close")?,
                window,
                params.multiplier,
            )?),
            Kernel::SeriesPair(kernel) => Output::Values(kernel(
                require(inputs.close, f, "close")?,
                require(inputs.benchmark, f, "benchmark")?,
                window,
            )?),
            Kernel::Hl(kernel) => Output::Values(kernel(
                require(inputs.high, f, "high")?,
                require(inputs.low, f, "low")?,
            )?),
            Kernel::Hlc(kernel) => Output::Values(kernel(
                require(inputs.high, f, "high")?,
                require(inputs.low, f, "low")?,
                require(inputs.close, f, "close")?,
            )?),
            Kernel::HlcWindow(kernel) => Output::Values(kernel(
                require(inputs.high, f, "high")?,
                require(inputs.low, f, "low")?,
                require(inputs.close, f, "close")?,
                window,
            )?),
            Kernel::Volume(kernel) => Output::Values(kernel(
                require(inputs.close, f, "close")?,
                require(inputs.volume, f, "volume")?,
            )?),
            Kernel::Hlcv(kernel) => Output::Values(kernel(
                require(inputs.high, f, "high")?,
                require(inputs.low, f, "low")?,
                require(inputs.close, f, "close")?,
                require(inputs.volume, f, "volume")?,
            )?),
            Kernel::HlcvWindow(kernel) => Output::Values(kernel(
                require(inputs.high, f, "high")?,
                require(inputs.low, f, "low")?,
                require(inputs.close, f, "close")?,
                require(inputs.volume, f, "volume")?,
                window,
            )?),
            Kernel::Pattern(kernel) => Output::Flags(kernel(
                require(inputs.open, f, "open")?,
                require(inputs.high, f, "high")?,
                require(inputs.low, f, "low")?,
                require(inputs.close, f, "close")?,
                &params.patterns,
            )?),
        };
        Ok(output)
    }
}

/// Computes the registered function `name`.
///
/// # Errors
///
/// - `Error::UnknownFunction` if nothing is registered under `name`
/// - `Error::MissingInput` if a required series is absent
/// - any error of the underlying indicator or pattern
pub fn compute<T: SeriesElement>(
    name: &str,
    inputs: &Inputs<'_, T>,
    params: &Params,
) -> Result<Output<T>> {
    let Some(entry) = lookup::<T>(name) else {
        debug!(name, "unknown registry function");
        return Err(Error::UnknownFunction {
            name: name.to_string(),
        });
    };
    trace!(
        name = entry.name,
        family = %entry.family,
        signature = entry.kernel.signature(),
        bars = inputs.primary().map_or(0, <[T]>::len),
        window = params.window,
        "registry dispatch"
    );
    entry.call(inputs, params).map_err(|err| {
        debug!(name = entry.name, error = %err, "registry call failed");
        err
    })
}

/// Element type of a dtype-tagged buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dtype {
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
}

impl Dtype {
    /// Conventional dtype name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::F32 => "float32",
            Self::F64 => "float64",
        }
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed buffer tagged with its element type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrayRef<'a> {
    /// `f32` elements.
    F32(&'a [f32]),
    /// `f64` elements.
    F64(&'a [f64]),
}

impl<'a> ArrayRef<'a> {
    /// Element type.
    #[must_use]
    pub const fn dtype(&self) -> Dtype {
        match self {
            Self::F32(_) => Dtype::F32,
            Self::F64(_) => Dtype::F64,
        }
    }

    /// Number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::F32(s) => s.len(),
            Self::F64(s) => s.len(),
        }
    }

    /// True when the buffer has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `f32` slice, if this buffer holds `f32`.
    #[must_use]
    pub const fn as_f32(self) -> Option<&'a [f32]> {
        match self {
            Self::F32(s) => Some(s),
            Self::F64(_) => None,
        }
    }

    /// The `f64` slice, if this buffer holds `f64`.
    #[must_use]
    pub const fn as_f64(self) -> Option<&'a [f64]> {
        match self {
            Self::F64(s) => Some(s),
            Self::F32(_) => None,
        }
    }
}

impl<'a> From<&'a [f32]> for ArrayRef<'a> {
    fn from(s: &'a [f32]) -> Self {
        Self::F32(s)
    }
}

impl<'a> From<&'a [f64]> for ArrayRef<'a> {
    fn from(s: &'a [f64]) -> Self {
        Self::F64(s)
    }
}

/// Dtype-tagged inputs for [`compute_dyn`]. Every present buffer must share
/// one dtype.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArrayInputs<'a> {
    /// Opening prices.
    pub open: Option<ArrayRef<'a>>,
    /// High prices.
    pub high: Option<ArrayRef<'a>>,
    /// Low prices.
    pub low: Option<ArrayRef<'a>>,
    /// Closing prices.
    pub close: Option<ArrayRef<'a>>,
    /// Traded volume.
    pub volume: Option<ArrayRef<'a>>,
    /// Second series for pairwise statistics.
    pub benchmark: Option<ArrayRef<'a>>,
}

impl<'a> ArrayInputs<'a> {
    /// No buffers set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the opening prices.
    #[must_use]
    pub fn open(mut self, array: impl Into<ArrayRef<'a>>) -> Self {
        self.open = Some(array.into());
        self
    }

    /// Sets the high prices.
    #[must_use]
    pub fn high(mut self, array: impl Into<ArrayRef<'a>>) -> Self {
        self.high = Some(array.into());
        self
    }

    /// Sets the low prices.
    #[must_use]
    pub fn low(mut self, array: impl Into<ArrayRef<'a>>) -> Self {
        self.low = Some(array.into());
        self
    }

    /// Sets the closing prices.
    #[must_use]
    pub fn close(mut self, array: impl Into<ArrayRef<'a>>) -> Self {
        self.close = Some(array.into());
        self
    }

    /// Sets the volume.
    #[must_use]
    pub fn volume(mut self, array: impl Into<ArrayRef<'a>>) -> Self {
        self.volume = Some(array.into());
        self
    }

    /// Sets the benchmark series.
    #[must_use]
    pub fn benchmark(mut self, array: impl Into<ArrayRef<'a>>) -> Self {
        self.benchmark = Some(array.into());
        self
    }

    fn named(&self) -> [(&'static str, Option<ArrayRef<'a>>); 6] {
        [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
            ("volume", self.volume),
            ("benchmark", self.benchmark),
        ]
    }

    /// The shared dtype of the present buffers, `None` when none are set.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnsupportedDtype` if the buffers mix dtypes.
    pub fn dtype(&self) -> Result<Option<Dtype>> {
        let mut first: Option<(&'static str, Dtype)> = None;
        for (name, array) in self.named() {
            let Some(array) = array else { continue };
            match first {
                None => first = Some((name, array.dtype())),
                Some((first_name, dtype)) if dtype != array.dtype() => {
                    return Err(Error::UnsupportedDtype {
                        description: format!(
                            "`{first_name}` is {dtype} but `{name}` is {}",
                            array.dtype()
                        ),
                    });
                }
                Some(_) => {}
            }
        }
        Ok(first.map(|(_, dtype)| dtype))
    }

    fn typed<T>(&self, project: fn(ArrayRef<'a>) -> Option<&'a [T]>) -> Inputs<'a, T> {
        Inputs {
            open: self.open.and_then(project),
            high: self.high.and_then(project),
            low: self.low.and_then(project),
            close: self.close.and_then(project),
            volume: self.volume.and_then(project),
            benchmark: self.benchmark.and_then(project),
        }
    }
}

/// Result of [`compute_dyn`], in the dtype of the inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum DynOutput {
    /// Computed in `f32`.
    F32(Output<f32>),
    /// Computed in `f64`.
    F64(Output<f64>),
}

impl DynOutput {
    /// Element type of the output.
    #[must_use]
    pub const fn dtype(&self) -> Dtype {
        match self {
            Self::F32(_) => Dtype::F32,
            Self::F64(_) => Dtype::F64,
        }
    }
}

/// Computes `name` over dtype-tagged buffers, in their shared precision.
///
/// With no buffers at all the call resolves as `f64` and fails on the first
/// missing input.
///
/// # Errors
///
/// - `Error::UnsupportedDtype` if the buffers mix `f32` and `f64`
/// - every error of [`compute`]
///
/// # Example
///
/// ```
/// use ohlc_ta::registry::{compute_dyn, ArrayInputs, DynOutput, Params};
///
/// let close = vec![1.0_f32, 2.0, 3.0];
/// let inputs = ArrayInputs::new().close(close.as_slice());
/// let out = compute_dyn("sma", &inputs, &Params::new().window(2)).unwrap();
/// assert!(matches!(out, DynOutput::F32(_)));
/// ```
pub fn compute_dyn(name: &str, inputs: &ArrayInputs<'_>, params: &Params) -> Result<DynOutput> {
    match inputs.dtype()? {
        Some(Dtype::F32) => compute(name, &inputs.typed(ArrayRef::as_f32), params).map(DynOutput::F32),
        Some(Dtype::F64) | None => {
            compute(name, &inputs.typed(ArrayRef::as_f64), params).map(DynOutput::F64)
        }
    }
}
