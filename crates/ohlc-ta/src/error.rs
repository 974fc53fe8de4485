//! Error types for ohlc-ta.
//!
//! Every engine entry point validates its inputs before computing anything
//! and reports failures through [`Error`]. Numerically undefined results
//! (warm-up periods, zero ranges, zero denominators) are *not* errors: they
//! are NaN in indicator output and `false` in pattern output.

use thiserror::Error;

/// The main error type for ohlc-ta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input data series is empty.
    #[error("empty input: no data provided")]
    EmptyInput,

    /// The window (period) parameter is invalid.
    ///
    /// Returned when the window is zero or otherwise unusable for the
    /// requested computation (for example a sample variance over one bar).
    #[error("invalid period {period}: {reason}")]
    InvalidPeriod {
        /// The invalid period value that was provided.
        period: usize,
        /// Description of why the period is invalid.
        reason: &'static str,
    },

    /// The input series is shorter than the indicator's minimum length.
    ///
    /// A window larger than the series is always reported this way, for
    /// every indicator family.
    #[error("insufficient data for {indicator}: required {required} elements, got {actual}")]
    InsufficientData {
        /// The number of data points required.
        required: usize,
        /// The number of data points provided.
        actual: usize,
        /// Name of the indicator that rejected the input.
        indicator: &'static str,
    },

    /// Parallel input arrays have different lengths.
    #[error("length mismatch: {description}")]
    LengthMismatch {
        /// Which arrays disagree and by how much.
        description: String,
    },

    /// A non-window scalar parameter is out of its valid domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the accepted domain.
        reason: &'static str,
    },

    /// Failed to convert a numeric value to the series element type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },

    /// No indicator or pattern is registered under the requested name.
    #[error("unknown function `{name}`")]
    UnknownFunction {
        /// The name that was looked up.
        name: String,
    },

    /// A registered function was called without one of its required inputs.
    #[error("`{function}` requires the `{input}` series")]
    MissingInput {
        /// Registered function name.
        function: &'static str,
        /// Name of the missing input series.
        input: &'static str,
    },

    /// The element type of a dtype-tagged buffer is not usable for the call.
    #[error("unsupported dtype: {description}")]
    UnsupportedDtype {
        /// Which buffers were rejected.
        description: String,
    },
}

/// Convenience type alias for Results using the ohlc-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;
