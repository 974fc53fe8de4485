//! Per-bar true range and directional movement.
//!
//! ```text
//! TR[0] = high[0] - low[0]
//! TR[i] = max(high[i] - low[i], |high[i] - close[i-1]|, |low[i] - close[i-1]|)
//! ```
//!
//! These kernels do not validate; callers check that the three series have the
//! same length first. Output length is the length of the shortest input.

use crate::traits::SeriesElement;

/// Computes the true range of every bar.
///
/// A NaN in any value consumed by bar `i` makes `TR[i]` NaN.
#[must_use]
pub fn true_range_series<T: SeriesElement>(high: &[T], low: &[T], close: &[T]) -> Vec<T> {
    let n = high.len().min(low.len()).min(close.len());
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let hl = high[i] - low[i];
        if i == 0 {
            out.push(hl);
            continue;
        }
        let prev_close = close[i - 1];
        let hc = (high[i] - prev_close).abs();
        let lc = (low[i] - prev_close).abs();
        if hl.is_nan() || hc.is_nan() || lc.is_nan() {
            out.push(T::nan());
        } else {
            out.push(hl.max(hc).max(lc));
        }
    }
    out
}

/// Plus and minus directional movement of every bar.
///
/// `+DM[i] = up` when `up > down` and `up > 0`, else 0, where
/// `up = high[i] - high[i-1]` and `down = low[i-1] - low[i]`; `-DM` is the
/// mirror image. Index 0 has no prior bar and is NaN in both series.
#[must_use]
pub fn directional_movement<T: SeriesElement>(high: &[T], low: &[T]) -> (Vec<T>, Vec<T>) {
    let n = high.len().min(low.len());
    let mut plus = vec![T::nan(); n];
    let mut minus = vec![T::nan(); n];
    for i in 1..n {
        let up = high[i] - high[i - 1];
        let down = low[i - 1] - low[i];
        if up.is_nan() || down.is_nan() {
            continue;
        }
        plus[i] = if up > down && up > T::zero() {
            up
        } else {
            T::zero()
        };
        minus[i] = if down > up && down > T::zero() {
            down
        } else {
            T::zero()
        };
    }
    (plus, minus)
}
