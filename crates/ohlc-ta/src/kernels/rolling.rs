//! Rolling-window sums and moments.
//!
//! Every windowed indicator in the crate reduces to one of three kernels:
//!
//! - [`rolling_sum`] / [`rolling_mean`]: O(n) add-newest/subtract-oldest sum
//! - [`rolling_variance`]: Welford add/remove moments ([`RollingMoments`])
//! - [`rolling_covariance`]: Welford co-moments over two aligned series
//!
//! # NaN Handling
//!
//! A NaN inside the window makes that window's output NaN. The kernels keep a
//! count of the NaN values currently inside the window and accumulate only the
//! finite ones, so the output recovers as soon as the NaN leaves the window.
//!
//! # Drift
//!
//! Incremental add/remove accumulates rounding error over long series. Each
//! kernel recomputes its state directly from the window contents every
//! [`RESYNC_INTERVAL`] steps, which bounds the drift independently of the
//! series length.
//!
//! # Flat Windows
//!
//! A window whose values are all equal has a variance of exactly zero, and
//! its covariance with any other series is exactly zero, whatever residue the
//! add/remove updates left behind. A second moment within
//! [`FLAT_TOLERANCE`] machine epsilons of the squared mean is also reported
//! as zero, so ratios over it come out NaN rather than amplified noise.
//!
//! # Example
//!
//! ```
//! use ohlc_ta::kernels::rolling::{rolling_mean, rolling_variance, Ddof};
//!
//! let data = vec![2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! let mean = rolling_mean(&data, 8).unwrap();
//! assert!((mean[7] - 5.0).abs() < 1e-12);
//!
//! let var = rolling_variance(&data, 8, Ddof::Population).unwrap();
//! assert!((var[7] - 4.0).abs() < 1e-12);
//! ```

use crate::error::{Error, Result};
use crate::traits::{validate_indicator_input, validate_same_length, SeriesElement};

/// Number of incremental updates between full recomputations of a window.
pub const RESYNC_INTERVAL: usize = 1024;

/// Relative floor, in machine epsilons of `count * mean²`, below which a
/// window's second moment is treated as zero.
pub const FLAT_TOLERANCE: f64 = 4.0;

/// Length of the run of equal values ending at `i`, given the run ending at
/// `i - 1`. NaN never extends a run.
#[inline]
#[allow(clippy::float_cmp)]
fn extend_run<T: SeriesElement>(data: &[T], i: usize, run: usize) -> usize {
    if i > 0 && data[i] == data[i - 1] {
        run + 1
    } else {
        1
    }
}

/// Delta degrees of freedom for dispersion statistics.
///
/// The crate-wide convention is [`Ddof::Population`]; Bollinger Bands,
/// z-score, beta and correlation all use it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Ddof {
    /// Divide by `n`.
    #[default]
    Population,
    /// Divide by `n - 1` (Bessel's correction).
    Sample,
}

impl Ddof {
    /// The value subtracted from the observation count in the denominator.
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            Self::Population => 0,
            Self::Sample => 1,
        }
    }

    /// Rejects windows that leave no degrees of freedom.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` for a sample statistic over a window of 1.
    pub const fn validate_window(self, window: usize) -> Result<()> {
        if window <= self.offset() {
            Err(Error::InvalidPeriod {
                period: window,
                reason: "sample statistics need a window of at least 2",
            })
        } else {
            Ok(())
        }
    }
}

/// Number of NaN values at the start of [`rolling_sum`] output.
#[inline]
#[must_use]
pub const fn rolling_lookback(window: usize) -> usize {
    if window == 0 {
        0
    } else {
        window - 1
    }
}

/// Minimum input length accepted by the rolling kernels.
#[inline]
#[must_use]
pub const fn rolling_min_len(window: usize) -> usize {
    if window == 0 {
        1
    } else {
        window
    }
}

/// Computes the rolling sum over a fixed window.
///
/// # Errors
///
/// - `Error::InvalidPeriod` if `window` is zero
/// - `Error::EmptyInput` if `data` is empty
/// - `Error::InsufficientData` if `data` is shorter than `window`
///
/// # Example
///
/// ```
/// use ohlc_ta::kernels::rolling::rolling_sum;
///
/// let sums = rolling_sum(&[1.0_f64, 2.0, 3.0, 4.0], 2).unwrap();
/// assert!(sums[0].is_nan());
/// assert_eq!(&sums[1..], &[3.0, 5.0, 7.0]);
/// ```
pub fn rolling_sum<T: SeriesElement>(data: &[T], window: usize) -> Result<Vec<T>> {
    validate_indicator_input(data, window, "rolling_sum")?;
    Ok(rolling_sum_unchecked(data, window))
}

/// Computes the rolling arithmetic mean over a fixed window.
///
/// # Errors
///
/// Same conditions as [`rolling_sum`].
pub fn rolling_mean<T: SeriesElement>(data: &[T], window: usize) -> Result<Vec<T>> {
    validate_indicator_input(data, window, "rolling_mean")?;
    rolling_mean_unchecked(data, window)
}

/// Computes the rolling variance with the given degrees of freedom.
///
/// # Errors
///
/// - the conditions of [`rolling_sum`]
/// - `Error::InvalidPeriod` for [`Ddof::Sample`] with a window of 1
pub fn rolling_variance<T: SeriesElement>(
    data: &[T],
    window: usize,
    ddof: Ddof,
) -> Result<Vec<T>> {
    validate_indicator_input(data, window, "rolling_variance")?;
    ddof.validate_window(window)?;
    rolling_variance_unchecked(data, window, ddof)
}

/// Computes the rolling covariance of two aligned series.
///
/// A window is NaN if either series has a NaN inside it.
///
/// # Errors
///
/// - the conditions of [`rolling_variance`]
/// - `Error::LengthMismatch` if `x` and `y` differ in length
pub fn rolling_covariance<T: SeriesElement>(
    x: &[T],
    y: &[T],
    window: usize,
    ddof: Ddof,
) -> Result<Vec<T>> {
    validate_same_length(&[("x", x), ("y", y)])?;
    validate_indicator_input(x, window, "rolling_covariance")?;
    ddof.validate_window(window)?;
    rolling_covariance_unchecked(x, y, window, ddof)
}

/// Rolling sum without validation. `window` must be in `1..=data.len()`.
pub(crate) fn rolling_sum_unchecked<T: SeriesElement>(data: &[T], window: usize) -> Vec<T> {
    let n = data.len();
    let mut out = vec![T::nan(); n];
    if window == 0 || n < window {
        return out;
    }

    let mut sum = T::zero();
    let mut nan_count = 0usize;

    for i in 0..n {
        let incoming = data[i];
        if incoming.is_nan() {
            nan_count += 1;
        } else {
            sum = sum + incoming;
        }

        if i >= window {
            let outgoing = data[i - window];
            if outgoing.is_nan() {
                nan_count -= 1;
            } else {
                sum = sum - outgoing;
            }
        }

        if i + 1 >= window {
            if (i + 1) % RESYNC_INTERVAL == 0 {
                sum = finite_sum(&data[i + 1 - window..=i]);
            }
            out[i] = if nan_count > 0 { T::nan() } else { sum };
        }
    }

    out
}

pub(crate) fn rolling_mean_unchecked<T: SeriesElement>(data: &[T], window: usize) -> Result<Vec<T>> {
    let divisor = T::from_usize(window)?;
    let mut out = rolling_sum_unchecked(data, window);
    for value in &mut out {
        *value = *value / divisor;
    }
    Ok(out)
}

pub(crate) fn rolling_variance_unchecked<T: SeriesElement>(
    data: &[T],
    window: usize,
    ddof: Ddof,
) -> Result<Vec<T>> {
    let n = data.len();
    let mut out = vec![T::nan(); n];
    if window == 0 || n < window {
        return Ok(out);
    }

    let mut moments = RollingMoments::new();
    let mut nan_count = 0usize;
    let mut flat_run = 0usize;
    let flat_is_zero = window > ddof.offset();

    for i in 0..n {
        flat_run = extend_run(data, i, flat_run);
        let incoming = data[i];
        if incoming.is_nan() {
            nan_count += 1;
        } else {
            moments.push(incoming)?;
        }

        if i >= window {
            let outgoing = data[i - window];
            if outgoing.is_nan() {
                nan_count -= 1;
            } else {
                moments.pop(outgoing)?;
            }
        }

        if i + 1 >= window {
            if (i + 1) % RESYNC_INTERVAL == 0 {
                moments = RollingMoments::from_window(&data[i + 1 - window..=i])?;
            }
            out[i] = if nan_count > 0 {
                T::nan()
            } else if flat_is_zero && flat_run >= window {
                T::zero()
            } else {
                moments.variance(ddof)?
            };
        }
    }

    Ok(out)
}

pub(crate) fn rolling_covariance_unchecked<T: SeriesElement>(
    x: &[T],
    y: &[T],
    window: usize,
    ddof: Ddof,
) -> Result<Vec<T>> {
    let n = x.len().min(y.len());
    let mut out = vec![T::nan(); n];
    if window == 0 || n < window {
        return Ok(out);
    }

    let mut moments = RollingCoMoments::new();
    let mut nan_count = 0usize;
    let (mut run_x, mut run_y) = (0usize, 0usize);
    let flat_is_zero = window > ddof.offset();
    let is_gap = |i: usize| x[i].is_nan() || y[i].is_nan();

    for i in 0..n {
        run_x = extend_run(x, i, run_x);
        run_y = extend_run(y, i, run_y);
        if is_gap(i) {
            nan_count += 1;
        } else {
            moments.push(x[i], y[i])?;
        }

        if i >= window {
            let j = i - window;
            if is_gap(j) {
                nan_count -= 1;
            } else {
                moments.pop(x[j], y[j])?;
            }
        }

        if i + 1 >= window {
            if (i + 1) % RESYNC_INTERVAL == 0 {
                let start = i + 1 - window;
                moments = RollingCoMoments::from_window(&x[start..=i], &y[start..=i])?;
            }
            out[i] = if nan_count > 0 {
                T::nan()
            } else if flat_is_zero && run_x.max(run_y) >= window {
                T::zero()
            } else {
                moments.covariance(ddof)?
            };
        }
    }

    Ok(out)
}

fn finite_sum<T: SeriesElement>(window: &[T]) -> T {
    window
        .iter()
        .filter(|v| !v.is_nan())
        .fold(T::zero(), |acc, &v| acc + v)
}

/// Welford accumulator for the mean and second central moment of a window.
///
/// Supports removal of a previously pushed value, which turns the classic
/// online algorithm into a sliding-window one.
///
/// # Example
///
/// ```
/// use ohlc_ta::kernels::rolling::{Ddof, RollingMoments};
///
/// let mut m: RollingMoments<f64> = RollingMoments::new();
/// for x in [1.0, 2.0, 3.0, 4.0] {
///     m.push(x).unwrap();
/// }
/// m.pop(1.0).unwrap();
/// assert!((m.mean() - 3.0).abs() < 1e-12);
/// assert!((m.variance(Ddof::Sample).unwrap() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RollingMoments<T> {
    count: usize,
    mean: T,
    m2: T,
}

impl<T: SeriesElement> Default for RollingMoments<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SeriesElement> RollingMoments<T> {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: T::zero(),
            m2: T::zero(),
        }
    }

    /// Builds an accumulator from the finite values of `window`.
    ///
    /// Uses two passes (mean first, then squared deviations) so the result
    /// carries no incremental error.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the count cannot be represented.
    pub fn from_window(window: &[T]) -> Result<Self> {
        let count = window.iter().filter(|v| !v.is_nan()).count();
        if count == 0 {
            return Ok(Self::new());
        }
        let mean = finite_sum(window) / T::from_usize(count)?;
        let m2 = window
            .iter()
            .filter(|v| !v.is_nan())
            .fold(T::zero(), |acc, &v| acc + (v - mean) * (v - mean));
        Ok(Self { count, mean, m2 })
    }

    /// Adds a value to the window.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the count cannot be represented.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.count += 1;
        let count = T::from_usize(self.count)?;
        let delta = value - self.mean;
        self.mean = self.mean + delta / count;
        self.m2 = self.m2 + delta * (value - self.mean);
        Ok(())
    }

    /// Removes a value that was previously pushed.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the count cannot be represented.
    pub fn pop(&mut self, value: T) -> Result<()> {
        if self.count <= 1 {
            *self = Self::new();
            return Ok(());
        }
        let count = T::from_usize(self.count)?;
        let mean_before = (self.mean * count - value) / (count - T::one());
        self.m2 = self.m2 - (value - self.mean) * (value - mean_before);
        if self.m2 < T::zero() {
            self.m2 = T::zero();
        }
        self.mean = mean_before;
        self.count -= 1;
        Ok(())
    }

    /// Number of values currently in the window.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Mean of the window, NaN when empty.
    #[must_use]
    pub fn mean(&self) -> T {
        if self.count == 0 {
            T::nan()
        } else {
            self.mean
        }
    }

    /// Variance of the window, NaN when it has no degrees of freedom left.
    ///
    /// A second moment at or below `FLAT_TOLERANCE * count * ε * mean²` is
    /// rounding residue and yields exactly zero.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the count cannot be represented.
    pub fn variance(&self, ddof: Ddof) -> Result<T> {
        if self.count <= ddof.offset() {
            return Ok(T::nan());
        }
        let floor = T::from_f64(FLAT_TOLERANCE)?
            * T::from_usize(self.count)?
            * T::epsilon()
            * self.mean
            * self.mean;
        let m2 = if self.m2 <= floor { T::zero() } else { self.m2 };
        Ok(m2 / T::from_usize(self.count - ddof.offset())?)
    }
}

/// Welford co-moment accumulator over pairs `(x, y)`.
#[derive(Debug, Clone, Copy)]
pub struct RollingCoMoments<T> {
    count: usize,
    mean_x: T,
    mean_y: T,
    c: T,
}

impl<T: SeriesElement> Default for RollingCoMoments<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SeriesElement> RollingCoMoments<T> {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            count: 0,
            mean_x: T::zero(),
            mean_y: T::zero(),
            c: T::zero(),
        }
    }

    /// Builds an accumulator from the pairs of two aligned windows, skipping
    /// pairs where either side is NaN.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the count cannot be represented.
    pub fn from_window(x: &[T], y: &[T]) -> Result<Self> {
        let pairs = || {
            x.iter()
                .zip(y)
                .filter(|(a, b)| !a.is_nan() && !b.is_nan())
                .map(|(&a, &b)| (a, b))
        };
        let count = pairs().count();
        if count == 0 {
            return Ok(Self::new());
        }
        let count_t = T::from_usize(count)?;
        let (sx, sy) = pairs().fold((T::zero(), T::zero()), |(sx, sy), (a, b)| (sx + a, sy + b));
        let mean_x = sx / count_t;
        let mean_y = sy / count_t;
        let c = pairs().fold(T::zero(), |acc, (a, b)| acc + (a - mean_x) * (b - mean_y));
        Ok(Self {
            count,
            mean_x,
            mean_y,
            c,
        })
    }

    /// Adds a pair to the window.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the count cannot be represented.
    pub fn push(&mut self, x: T, y: T) -> Result<()> {
        self.count += 1;
        let count = T::from_usize(self.count)?;
        let dx = x - self.mean_x;
        self.mean_x = self.mean_x + dx / count;
        self.mean_y = self.mean_y + (y - self.mean_y) / count;
        self.c = self.c + dx * (y - self.mean_y);
        Ok(())
    }

    /// Removes a pair that was previously pushed.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the count cannot be represented.
    pub fn pop(&mut self, x: T, y: T) -> Result<()> {
        if self.count <= 1 {
            *self = Self::new();
            return Ok(());
        }
        let count = T::from_usize(self.count)?;
        let remaining = count - T::one();
        let mean_x_before = (self.mean_x * count - x) / remaining;
        let mean_y_before = (self.mean_y * count - y) / remaining;
        self.c = self.c - (x - mean_x_before) * (y - self.mean_y);
        self.mean_x = mean_x_before;
        self.mean_y = mean_y_before;
        self.count -= 1;
        Ok(())
    }

    /// Covariance of the window, NaN when it has no degrees of freedom left.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the count cannot be represented.
    pub fn covariance(&self, ddof: Ddof) -> Result<T> {
        if self.count <= ddof.offset() {
            return Ok(T::nan());
        }
        Ok(self.c / T::from_usize(self.count - ddof.offset())?)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]

    use super::*;
    use crate::utils::approx_eq;

    const EPSILON: f64 = 1e-10;

    fn naive_variance(window: &[f64], ddof: Ddof) -> f64 {
        let n = window.len() as f64;
        let mean = window.iter().sum::<f64>() / n;
        window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - ddof.offset() as f64)
    }

    #[test]
    fn test_rolling_sum_basic() {
        let data = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let result = rolling_sum(&data, 3).unwrap();
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert!(approx_eq(result[2], 6.0, EPSILON));
        assert!(approx_eq(result[3], 9.0, EPSILON));
        assert!(approx_eq(result[4], 12.0, EPSILON));
    }

    #[test]
    fn test_rolling_sum_nan_recovers() {
        let data = vec![1.0_f64, 2.0, f64::NAN, 4.0, 5.0, 6.0];
        let result = rolling_sum(&data, 3).unwrap();
        assert!(result[2].is_nan());
        assert!(result[3].is_nan());
        assert!(result[4].is_nan());
        assert!(approx_eq(result[5], 15.0, EPSILON));
    }

    #[test]
    fn test_rolling_mean_window_one_is_identity() {
        let data = vec![3.0_f64, -1.0, 7.5];
        assert_eq!(rolling_mean(&data, 1).unwrap(), data);
    }

    #[test]
    fn test_rolling_sum_resync_bounds_drift() {
        let n = RESYNC_INTERVAL * 4 + 17;
        let data: Vec<f64> = (0..n)
            .map(|i| if i % 2 == 0 { 1e8 + 0.1 } else { -1e8 + 0.3 })
            .collect();
        let result = rolling_sum(&data, 10).unwrap();
        for i in 9..n {
            let direct: f64 = data[i + 1 - 10..=i].iter().sum();
            assert!((result[i] - direct).abs() < 1e-4, "index {i}");
        }
    }

    #[test]
    fn test_rolling_variance_matches_naive() {
        let data: Vec<f64> = (0..50).map(|i| ((i * 7919) % 31) as f64 * 0.37).collect();
        for ddof in [Ddof::Population, Ddof::Sample] {
            let result = rolling_variance(&data, 5, ddof).unwrap();
            for i in 4..data.len() {
                let expected = naive_variance(&data[i - 4..=i], ddof);
                assert!(approx_eq(result[i], expected, 1e-9), "{ddof:?} at {i}");
            }
        }
    }

    #[test]
    fn test_rolling_variance_constant_is_zero() {
        let data = vec![4.2_f64; 12];
        let result = rolling_variance(&data, 4, Ddof::Population).unwrap();
        for value in &result[3..] {
            assert!(value.abs() < 1e-12);
        }
    }

    #[test]
    fn test_rolling_variance_flat_after_movement_is_exactly_zero() {
        let mut data = vec![101.3_f64, 97.7, 103.1, 99.9, 100.7];
        data.extend([100.1; 10]);
        for ddof in [Ddof::Population, Ddof::Sample] {
            let result = rolling_variance(&data, 5, ddof).unwrap();
            assert!(result[8] > 0.0);
            for value in &result[9..] {
                assert_eq!(*value, 0.0, "{ddof:?}");
            }
        }
    }

    #[test]
    fn test_rolling_variance_flat_zero_run() {
        let mut data = vec![3.0_f64, -2.0, 5.0, -4.0];
        data.extend([0.0; 6]);
        let result = rolling_variance(&data, 3, Ddof::Population).unwrap();
        assert!(result[5] > 0.0);
        assert!(result[6..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_rolling_covariance_flat_side_is_exactly_zero() {
        let mut x = vec![1.0_f64, 4.0, 2.0, 8.0];
        x.extend([5.5; 5]);
        let y: Vec<f64> = (0..x.len()).map(|i| (i as f64).sqrt()).collect();
        let cov = rolling_covariance(&x, &y, 4, Ddof::Population).unwrap();
        assert!(cov[4].abs() > 0.0);
        assert!(cov[7..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_rolling_moments_residue_snaps_to_zero() {
        let mut m: RollingMoments<f64> = RollingMoments::new();
        for x in [101.3, 97.7, 103.1, 99.9, 100.7] {
            m.push(x).unwrap();
        }
        for x in [101.3, 97.7, 103.1, 99.9, 100.7] {
            m.push(100.1).unwrap();
            m.pop(x).unwrap();
        }
        assert_eq!(m.variance(Ddof::Population).unwrap(), 0.0);
    }

    #[test]
    fn test_sample_variance_window_one_rejected() {
        let data = vec![1.0_f64, 2.0];
        assert!(matches!(
            rolling_variance(&data, 1, Ddof::Sample),
            Err(Error::InvalidPeriod { period: 1, .. })
        ));
        assert!(rolling_variance(&data, 1, Ddof::Population).is_ok());
    }

    #[test]
    fn test_rolling_covariance_of_series_with_itself_is_variance() {
        let data: Vec<f64> = (0..30).map(|i| (i as f64).sin() * 10.0).collect();
        let cov = rolling_covariance(&data, &data, 6, Ddof::Sample).unwrap();
        let var = rolling_variance(&data, 6, Ddof::Sample).unwrap();
        for i in 5..data.len() {
            assert!(approx_eq(cov[i], var[i], 1e-9));
        }
    }

    #[test]
    fn test_rolling_covariance_nan_in_either_series() {
        let x = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0];
        let y = vec![2.0_f64, f64::NAN, 6.0, 8.0, 10.0];
        let cov = rolling_covariance(&x, &y, 2, Ddof::Population).unwrap();
        assert!(cov[1].is_nan());
        assert!(cov[2].is_nan());
        assert!(approx_eq(cov[3], 0.5, EPSILON));
    }

    #[test]
    fn test_rolling_covariance_length_mismatch() {
        let x = vec![1.0_f64, 2.0, 3.0];
        let y = vec![1.0_f64, 2.0];
        assert!(matches!(
            rolling_covariance(&x, &y, 2, Ddof::Population),
            Err(Error::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_rolling_moments_pop_to_empty() {
        let mut m: RollingMoments<f64> = RollingMoments::new();
        m.push(5.0).unwrap();
        m.pop(5.0).unwrap();
        assert_eq!(m.count(), 0);
        assert!(m.mean().is_nan());
        assert!(m.variance(Ddof::Population).unwrap().is_nan());
    }

    #[test]
    fn test_lookback_and_min_len() {
        assert_eq!(rolling_lookback(5), 4);
        assert_eq!(rolling_min_len(5), 5);
        assert_eq!(rolling_lookback(0), 0);
        assert_eq!(rolling_min_len(0), 1);
    }

    #[test]
    fn test_rolling_f32() {
        let data = vec![1.0_f32, 2.0, 3.0, 4.0];
        let mean = rolling_mean(&data, 2).unwrap();
        assert!((mean[3] - 3.5).abs() < 1e-6);
    }
}
