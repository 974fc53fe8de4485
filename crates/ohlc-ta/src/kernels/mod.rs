//! Shared numeric kernels.
//!
//! The indicator modules are thin compositions of these building blocks:
//!
//! - [`rolling`]: rolling sum, mean, variance and covariance with NaN counting
//!   and periodic resynchronisation
//! - [`smoothing`]: the exponential recursion behind EMA, Wilder and friends
//! - [`true_range`]: per-bar true range and directional movement
//! - [`rolling_extrema`]: monotonic deque algorithm for O(n) rolling max/min
//! - [`parallel`]: per-bar predicate evaluation, data-parallel with Rayon

pub mod parallel;
pub mod rolling;
pub mod rolling_extrema;
pub mod smoothing;
pub mod true_range;

pub use parallel::{BarEvaluator, PARALLEL_THRESHOLD};
pub use rolling::{
    rolling_covariance, rolling_mean, rolling_sum, rolling_variance, Ddof, RollingCoMoments,
    RollingMoments, RESYNC_INTERVAL,
};
pub use rolling_extrema::{
    rolling_extrema, rolling_extrema_lookback, rolling_extrema_min_len, rolling_max, rolling_min,
    Extremum, MonotonicDeque, RollingExtremaOutput,
};
pub use smoothing::{ema_alpha, exponential_smooth, wilder_alpha, wilder_smooth, Seed};
pub use true_range::{directional_movement, true_range_series};
