//! Technical analysis indicators and candlestick patterns.
//!
//! # Overview
//!
//! All indicators in this module share the following properties:
//!
//! - **Generic**: Work with both `f32` and `f64` types via the
//!   [`SeriesElement`](crate::traits::SeriesElement) trait
//! - **Aligned**: Output has the same length as the input; the warm-up prefix
//!   is NaN
//! - **NaN-aware**: A NaN inside a rolling window makes that window NaN; the
//!   output recovers once the NaN leaves the window
//! - **Error-safe**: Return typed errors for empty input, zero windows,
//!   series shorter than the window and mismatched lengths
//!
//! # Indicator Categories
//!
//! ## Trend
//!
//! - [`sma`], [`ema`], [`smma`], [`dema`], [`tema`], [`wma`], [`trima`]
//! - [`macd`] - MACD line, signal and histogram
//! - [`adx`] - Average Directional Index
//! - [`typical_price`], [`median_price`], [`weighted_close`]
//!
//! ## Volatility
//!
//! - [`true_range`], [`atr`], [`natr`]
//! - [`bollinger`] with [`bollinger_percent_b`] and [`bollinger_bandwidth`]
//! - [`keltner`], [`donchian`]
//!
//! ## Momentum
//!
//! - [`rsi`], [`cmo`], [`stochastic`], [`williams_r`], [`roc`], [`momentum`], [`cci`]
//!
//! ## Volume
//!
//! - Cumulative: [`obv`], [`ad`], [`pvt`], [`nvi`], [`pvi`], [`vwap`]
//! - Windowed: [`cmf`], [`mfi`]
//!
//! ## Statistics
//!
//! - [`variance`], [`stddev`], [`covariance`], [`pct_change`], [`beta`],
//!   [`correlation`], [`zscore`]
//!
//! ## Candlestick Patterns
//!
//! See [`candlestick`].
//!
//! # Example
//!
//! ```
//! use ohlc_ta::indicators::{ema, rsi, sma};
//!
//! let prices = vec![44.0_f64, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
//!
//! let sma_result = sma(&prices, 5).unwrap();
//! let ema_result = ema(&prices, 5).unwrap();
//! let rsi_result = rsi(&prices, 5).unwrap();
//!
//! assert_eq!(sma_result.len(), prices.len());
//! assert!(!ema_result[0].is_nan());
//! assert!(rsi_result[4].is_nan());
//! ```

pub mod ad;
pub mod adx;
pub mod atr;
pub mod bollinger;
pub mod candlestick;
pub mod cci;
pub mod cmo;
pub mod donchian;
pub mod ema;
pub mod keltner;
pub mod macd;
pub mod mfi;
pub mod obv;
pub mod price_transform;
pub mod pvt;
pub mod roc;
pub mod rsi;
pub mod sma;
pub mod statistics;
pub mod stochastic;
pub mod volume_index;
pub mod vwap;
pub mod williams_r;
pub mod wma;

pub use ad::{ad, ad_lookback, close_location_value, cmf, cmf_lookback, cmf_min_len};
pub use adx::{adx, adx_lookback, adx_min_len, di_lookback, directional_index, DirectionalOutput};
pub use atr::{atr, atr_lookback, atr_min_len, natr, true_range, true_range_lookback};
pub use bollinger::{
    bollinger, bollinger_bandwidth, bollinger_lookback, bollinger_min_len, bollinger_percent_b,
    Bollinger, BollingerOutput,
};
pub use cci::{cci, cci_lookback, cci_min_len, CCI_CONSTANT};
pub use cmo::{cmo, cmo_lookback, cmo_min_len};
pub use donchian::{donchian, donchian_lookback, donchian_min_len, DonchianOutput};
pub use ema::{dema, ema, ema_lookback, ema_min_len, smma, smma_lookback, tema, Ema};
pub use keltner::{keltner, keltner_lookback, keltner_min_len, Keltner, KeltnerOutput};
pub use macd::{macd, macd_line_lookback, macd_min_len, macd_signal_lookback, Macd, MacdOutput};
pub use mfi::{mfi, mfi_lookback, mfi_min_len};
pub use obv::{obv, obv_lookback, obv_min_len};
pub use price_transform::{median_price, typical_price, weighted_close};
pub use pvt::pvt;
pub use roc::{momentum, roc, roc_lookback, roc_min_len};
pub use rsi::{rsi, rsi_lookback, rsi_min_len};
pub use sma::{sma, sma_lookback, sma_min_len};
pub use statistics::{
    beta, beta_lookback, beta_min_len, correlation, covariance, pct_change, statistic_lookback,
    stddev, variance, zscore, Ddof,
};
pub use stochastic::{
    stochastic, stochastic_d_lookback, stochastic_k_lookback, stochastic_min_len, Stochastic,
    StochasticOutput,
};
pub use volume_index::{nvi, pvi, VOLUME_INDEX_BASE};
pub use vwap::{vwap, vwap_lookback};
pub use williams_r::{williams_r, williams_r_lookback, williams_r_min_len};
pub use wma::{trima, trima_lookback, wma, wma_lookback, wma_min_len};
