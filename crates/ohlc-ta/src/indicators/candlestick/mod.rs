//! Candlestick pattern recognition functions.
//!
//! Every pattern returns one boolean flag per bar: `true` where the pattern
//! completes on that bar. Bars with a NaN price and bars without enough
//! history are `false`. All geometric thresholds come from
//! [`PatternSettings`].
//!
//! # Pattern Categories
//!
//! ## Single-Candle Patterns
//! - Hammer family: [`hammer`], [`inverted_hammer`], [`hanging_man`], [`shooting_star`]
//! - Doji variants: [`doji`], [`dragonfly_doji`], [`gravestone_doji`]
//! - [`spinning_top`]
//!
//! ## Two-Candle Patterns
//! - [`bullish_engulfing`], [`bearish_engulfing`]
//! - [`bullish_harami`], [`bearish_harami`]
//! - [`piercing`], [`dark_cloud_cover`]
//! - [`bullish_kicker`], [`bearish_kicker`]
//!
//! ## Three-Candle Patterns
//! - [`morning_star`], [`evening_star`]
//! - [`three_white_soldiers`], [`three_black_crows`]
//!
//! # Example
//!
//! ```
//! use ohlc_ta::indicators::candlestick::{doji, PatternSettings};
//!
//! let open = vec![100.0_f64, 100.0, 100.0];
//! let high = vec![105.0, 105.0, 105.0];
//! let low = vec![95.0, 95.0, 95.0];
//! let close = vec![100.0, 104.0, 100.5];
//!
//! let flags = doji(&open, &high, &low, &close, &PatternSettings::default()).unwrap();
//! assert_eq!(flags, vec![true, false, true]);
//! ```

pub mod core;
pub mod single;
pub mod three_candle;
pub mod two_candle;

pub use core::{is_downtrend, is_uptrend, Candle, Ohlc, PatternSettings};

pub use single::{
    doji, dragonfly_doji, gravestone_doji, hammer, hanging_man, inverted_hammer, shooting_star,
    spinning_top,
};

pub use two_candle::{
    bearish_engulfing, bearish_harami, bearish_kicker, bullish_engulfing, bullish_harami,
    bullish_kicker, dark_cloud_cover, piercing,
};

pub use three_candle::{evening_star, morning_star, three_black_crows, three_white_soldiers};
