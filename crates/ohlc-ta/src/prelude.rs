//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use ohlc_ta::prelude::*;
//!
//! let prices = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//!
//! let sma_result = sma(&prices, 3).unwrap();
//! let ema_result = ema(&prices, 3).unwrap();
//! let rsi_result = rsi(&prices, 5).unwrap();
//! assert_eq!(rsi_result[9], 100.0);
//! ```
//!
//! # Contents
//!
//! - [`Error`] and [`Result`]
//! - [`SeriesElement`] and [`ValidatedInput`]
//! - every indicator and pattern function
//! - output and configuration types
//! - [`Ddof`] and [`PatternSettings`]

pub use crate::error::{Error, Result};

pub use crate::traits::{SeriesElement, ValidatedInput};

pub use crate::indicators::{
    ad, adx, atr, beta, bollinger, bollinger_bandwidth, bollinger_percent_b, cci, cmf, cmo,
    correlation, covariance, dema, donchian, ema, keltner, macd, median_price, mfi, momentum,
    natr, nvi, obv, pct_change, pvi, pvt, roc, rsi, sma, smma, stddev, stochastic, tema, trima,
    true_range, typical_price, variance, vwap, weighted_close, williams_r, wma, zscore,
};

pub use crate::indicators::candlestick::{
    bearish_engulfing, bearish_harami, bearish_kicker, bullish_engulfing, bullish_harami,
    bullish_kicker, dark_cloud_cover, doji, dragonfly_doji, evening_star, gravestone_doji, hammer,
    hanging_man, inverted_hammer, morning_star, piercing, shooting_star, spinning_top,
    three_black_crows, three_white_soldiers, PatternSettings,
};

pub use crate::indicators::{
    BollingerOutput, DonchianOutput, KeltnerOutput, MacdOutput, StochasticOutput,
};

pub use crate::indicators::{Bollinger, Ddof, Ema, Keltner, Macd, Stochastic};

pub use crate::kernels::smoothing::Seed;
