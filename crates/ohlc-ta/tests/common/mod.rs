//! Shared test utilities for ohlc-ta integration tests.

/// Approximate equality check; two NaN values are considered equal.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Count the number of NaN values in a slice.
#[allow(dead_code)]
pub fn count_nans(data: &[f64]) -> usize {
    data.iter().filter(|x| x.is_nan()).count()
}

/// Verify that the first `n` values are NaN and the rest are not.
#[allow(dead_code)]
pub fn verify_nan_prefix(data: &[f64], expected_nan_count: usize) -> bool {
    data.iter()
        .enumerate()
        .all(|(i, v)| v.is_nan() == (i < expected_nan_count))
}

/// Ten daily bars, 2018-10-18 through 2018-10-31; only 2018-10-30 is a hammer.
#[allow(dead_code)]
pub struct HammerSample {
    pub dates: [&'static str; 10],
    pub open: [f64; 10],
    pub high: [f64; 10],
    pub low: [f64; 10],
    pub close: [f64; 10],
}

#[allow(dead_code)]
pub const HAMMER_SAMPLE: HammerSample = HammerSample {
    dates: [
        "2018-10-18",
        "2018-10-19",
        "2018-10-22",
        "2018-10-23",
        "2018-10-24",
        "2018-10-25",
        "2018-10-26",
        "2018-10-29",
        "2018-10-30",
        "2018-10-31",
    ],
    open: [192.3, 191.95, 190.9, 188.1, 186.9, 177.4, 180.5, 179.7, 179.55, 182.75],
    high: [193.75, 192.65, 191.5, 188.1, 187.25, 182.95, 180.5, 181.95, 180.4, 186.4],
    low: [190.75, 188.6, 188.45, 185.2, 183.35, 176.0, 174.45, 177.85, 177.3, 182.75],
    close: [191.75, 189.8, 189.1, 186.5, 185.0, 182.6, 178.0, 179.2, 180.35, 184.65],
};

/// Deterministic OHLCV series with a gentle oscillation.
#[allow(dead_code)]
pub fn synthetic_ohlcv(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let close: Vec<f64> = (0..n)
        .map(|i| 100.0 + (i as f64 * 0.3).sin() * 5.0 + i as f64 * 0.05)
        .collect();
    let open: Vec<f64> = close
        .iter()
        .enumerate()
        .map(|(i, &c)| if i == 0 { c } else { close[i - 1] })
        .collect();
    let high: Vec<f64> = open
        .iter()
        .zip(&close)
        .map(|(&o, &c)| o.max(c) + 1.0)
        .collect();
    let low: Vec<f64> = open
        .iter()
        .zip(&close)
        .map(|(&o, &c)| o.min(c) - 1.0)
        .collect();
    let volume: Vec<f64> = (0..n).map(|i| 1000.0 + (i % 7) as f64 * 100.0).collect();
    (open, high, low, close, volume)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_nan() {
        assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
        assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
    }

    #[test]
    fn test_verify_nan_prefix() {
        let data = vec![f64::NAN, f64::NAN, 1.0, 2.0, 3.0];
        assert!(verify_nan_prefix(&data, 2));
        assert!(!verify_nan_prefix(&data, 3));
    }
}
