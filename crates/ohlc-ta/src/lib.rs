//! ohlc-ta: technical analysis indicators and candlestick patterns over OHLCV
//! arrays.
//!
//! Every entry point takes equal-length slices of `f32` or `f64` and returns a
//! freshly allocated output of the same length: `Vec<T>` for indicators,
//! `Vec<bool>` for candlestick patterns.
//!
//! # Features
//!
//! - **Aligned output**: the warm-up prefix is NaN (indicators) or `false`
//!   (patterns), never fabricated
//! - **O(n) kernels**: running sums with periodic resynchronisation, Welford
//!   moments, monotonic-deque extrema
//! - **Generics**: works with both `f32` and `f64`, preserving precision
//! - **Typed errors**: invalid input fails fast with an [`Error`]
//! - **Name dispatch**: the [`registry`] maps names to typed kernels
//!
//! # Quick Start
//!
//! ```
//! use ohlc_ta::prelude::*;
//!
//! let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
//! let result = sma(&data, 3).unwrap();
//!
//! assert!(result[0].is_nan());
//! assert!(result[1].is_nan());
//! assert!((result[2] - 2.0).abs() < 1e-10);
//! ```
//!
//! # Patterns
//!
//! ```
//! use ohlc_ta::prelude::*;
//! use ohlc_ta::utils::select_flagged;
//!
//! let open = [179.7_f64, 179.55];
//! let high = [181.95_f64, 180.4];
//! let low = [177.85_f64, 177.3];
//! let close = [179.2_f64, 180.35];
//! let dates = ["2018-10-29", "2018-10-30"];
//!
//! let flags = hammer(&open, &high, &low, &close, &PatternSettings::default()).unwrap();
//! assert_eq!(select_flagged(&dates, &flags).unwrap(), vec!["2018-10-30"]);
//! ```
//!
//! # Error Handling
//!
//! ```
//! use ohlc_ta::prelude::*;
//!
//! // Window longer than the data
//! assert!(matches!(sma(&[1.0_f64, 2.0], 10), Err(Error::InsufficientData { .. })));
//!
//! // Empty data
//! let empty: Vec<f64> = vec![];
//! assert!(matches!(sma(&empty, 5), Err(Error::EmptyInput)));
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod indicators;
pub mod kernels;
pub mod prelude;
pub mod registry;
pub mod traits;
pub mod utils;

pub use error::{Error, Result};
pub use traits::{SeriesElement, ValidatedInput};
pub use utils::{approx_eq, count_nan_prefix, count_nans, safe_div, select_flagged, EPSILON, LOOSE_EPSILON};
