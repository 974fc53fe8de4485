//! Input validation tests.
//!
//! Every entry point fails fast, before computing anything, on:
//! - empty arrays
//! - a zero window
//! - a series shorter than the indicator's minimum length
//! - parallel inputs of different lengths
//! - out-of-domain scalar parameters
//!
//! Numerically undefined results are not errors: NaN in indicator output,
//! `false` in pattern output.

#![allow(clippy::float_cmp)]

use ohlc_ta::error::Error;
use ohlc_ta::indicators::candlestick::{hammer, morning_star, piercing, PatternSettings};
use ohlc_ta::indicators::{
    ad, adx, atr, beta, bollinger, bollinger_bandwidth, bollinger_percent_b, cci, cmf, cmo,
    correlation, covariance, directional_index, donchian, ema, keltner, macd, mfi, nvi, obv,
    pct_change, pvt, roc, rsi, sma, stddev, stochastic, variance, vwap, williams_r, wma, zscore,
    Ddof,
};
use ohlc_ta::utils::select_flagged;

// ==================== Empty Array Tests ====================

#[test]
fn validation_empty_single_series() {
    let empty: Vec<f64> = vec![];
    assert!(matches!(sma(&empty, 5), Err(Error::EmptyInput)));
    assert!(matches!(ema(&empty, 5), Err(Error::EmptyInput)));
    assert!(matches!(wma(&empty, 5), Err(Error::EmptyInput)));
    assert!(matches!(rsi(&empty, 14), Err(Error::EmptyInput)));
    assert!(matches!(cmo(&empty, 14), Err(Error::EmptyInput)));
    assert!(matches!(roc(&empty, 10), Err(Error::EmptyInput)));
    assert!(matches!(macd(&empty, 12, 26, 9), Err(Error::EmptyInput)));
    assert!(matches!(bollinger(&empty, 20, 2.0), Err(Error::EmptyInput)));
    assert!(matches!(zscore(&empty, 5), Err(Error::EmptyInput)));
}

#[test]
fn validation_empty_ohlcv() {
    let empty: Vec<f64> = vec![];
    assert!(matches!(atr(&empty, &empty, &empty, 14), Err(Error::EmptyInput)));
    assert!(matches!(adx(&empty, &empty, &empty, 14), Err(Error::EmptyInput)));
    assert!(matches!(williams_r(&empty, &empty, &empty, 14), Err(Error::EmptyInput)));
    assert!(matches!(obv(&empty, &empty), Err(Error::EmptyInput)));
    assert!(matches!(ad(&empty, &empty, &empty, &empty), Err(Error::EmptyInput)));
    assert!(matches!(vwap(&empty, &empty, &empty, &empty), Err(Error::EmptyInput)));
    assert!(matches!(
        hammer(&empty, &empty, &empty, &empty, &PatternSettings::default()),
        Err(Error::EmptyInput)
    ));
}

// ==================== Zero Window Tests ====================

#[test]
fn validation_zero_window() {
    let data: Vec<f64> = (1..=30).map(f64::from).collect();
    assert!(matches!(sma(&data, 0), Err(Error::InvalidPeriod { period: 0, .. })));
    assert!(matches!(ema(&data, 0), Err(Error::InvalidPeriod { .. })));
    assert!(matches!(rsi(&data, 0), Err(Error::InvalidPeriod { .. })));
    assert!(matches!(bollinger(&data, 0, 2.0), Err(Error::InvalidPeriod { .. })));
    assert!(matches!(atr(&data, &data, &data, 0), Err(Error::InvalidPeriod { .. })));
    assert!(matches!(cci(&data, &data, &data, 0), Err(Error::InvalidPeriod { .. })));
    assert!(matches!(
        stochastic(&data, &data, &data, 0, 3, 3),
        Err(Error::InvalidPeriod { .. })
    ));
    assert!(matches!(
        mfi(&data, &data, &data, &data, 0),
        Err(Error::InvalidPeriod { .. })
    ));
    assert!(matches!(
        cmf(&data, &data, &data, &data, 0),
        Err(Error::InvalidPeriod { .. })
    ));
    assert!(matches!(donchian(&data, &data, 0), Err(Error::InvalidPeriod { .. })));
    assert!(matches!(pct_change(&data, 0), Err(Error::InvalidPeriod { .. })));
}

#[test]
fn validation_sample_variance_needs_two_bars() {
    let data: Vec<f64> = (1..=10).map(f64::from).collect();
    assert!(matches!(
        variance(&data, 1, Ddof::Sample),
        Err(Error::InvalidPeriod { period: 1, .. })
    ));
    assert!(variance(&data, 1, Ddof::Population).is_ok());
    assert!(stddev(&data, 2, Ddof::Sample).is_ok());
}

// ==================== Window Larger Than Series ====================

#[test]
fn validation_window_larger_than_series() {
    let data: Vec<f64> = (1..=5).map(f64::from).collect();
    assert!(matches!(
        sma(&data, 10),
        Err(Error::InsufficientData { required: 10, actual: 5, .. })
    ));
    assert!(matches!(wma(&data, 6), Err(Error::InsufficientData { .. })));
    assert!(matches!(bollinger(&data, 6, 2.0), Err(Error::InsufficientData { .. })));
    assert!(matches!(atr(&data, &data, &data, 6), Err(Error::InsufficientData { .. })));
    assert!(matches!(williams_r(&data, &data, &data, 6), Err(Error::InsufficientData { .. })));
    assert!(matches!(zscore(&data, 6), Err(Error::InsufficientData { .. })));
    assert!(matches!(
        covariance(&data, &data, 6, Ddof::Population),
        Err(Error::InsufficientData { .. })
    ));
}

#[test]
fn validation_change_based_need_one_extra_bar() {
    let data: Vec<f64> = (1..=5).map(f64::from).collect();
    // a window of `len` leaves no room for the first difference
    assert!(matches!(rsi(&data, 5), Err(Error::InsufficientData { required: 6, .. })));
    assert!(matches!(cmo(&data, 5), Err(Error::InsufficientData { .. })));
    assert!(matches!(roc(&data, 5), Err(Error::InsufficientData { .. })));
    assert!(matches!(beta(&data, &data, 5), Err(Error::InsufficientData { .. })));
    assert!(matches!(
        mfi(&data, &data, &data, &data, 5),
        Err(Error::InsufficientData { .. })
    ));
    assert!(rsi(&data, 4).is_ok());
}

#[test]
fn validation_insufficient_data_names_indicator() {
    let err = keltner(&[1.0_f64; 3], &[1.0; 3], &[1.0; 3], 20, 10, 2.0).unwrap_err();
    match err {
        Error::InsufficientData { indicator, .. } => assert_eq!(indicator, "keltner"),
        other => panic!("unexpected error {other:?}"),
    }
}

// ==================== Length Mismatch Tests ====================

#[test]
fn validation_length_mismatch() {
    let a: Vec<f64> = (1..=20).map(f64::from).collect();
    let b = &a[..19];
    assert!(matches!(atr(&a, b, &a, 5), Err(Error::LengthMismatch { .. })));
    assert!(matches!(obv(&a, b), Err(Error::LengthMismatch { .. })));
    assert!(matches!(pvt(&a, b), Err(Error::LengthMismatch { .. })));
    assert!(matches!(nvi(&a, b), Err(Error::LengthMismatch { .. })));
    assert!(matches!(vwap(&a, &a, &a, b), Err(Error::LengthMismatch { .. })));
    assert!(matches!(correlation(&a, b, 5), Err(Error::LengthMismatch { .. })));
    assert!(matches!(
        piercing(&a, &a, b, &a, &PatternSettings::default()),
        Err(Error::LengthMismatch { .. })
    ));
    assert!(matches!(
        select_flagged(&a, &[true, false]),
        Err(Error::LengthMismatch { .. })
    ));
}

#[test]
fn validation_length_mismatch_message_names_series() {
    let a = [1.0_f64, 2.0, 3.0];
    let err = obv(&a, &a[..2]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("close"), "{message}");
    assert!(message.contains("volume"), "{message}");
}

// ==================== Scalar Parameter Tests ====================

#[test]
fn validation_invalid_multiplier() {
    let data: Vec<f64> = (1..=30).map(f64::from).collect();
    assert!(matches!(
        bollinger(&data, 5, -1.0),
        Err(Error::InvalidParameter { name: "k", .. })
    ));
    assert!(matches!(
        bollinger(&data, 5, f64::NAN),
        Err(Error::InvalidParameter { .. })
    ));
    assert!(matches!(
        keltner(&data, &data, &data, 5, 5, f64::INFINITY),
        Err(Error::InvalidParameter { .. })
    ));
}

#[test]
fn validation_macd_fast_must_be_faster() {
    let data: Vec<f64> = (1..=60).map(f64::from).collect();
    assert!(matches!(macd(&data, 26, 12, 9), Err(Error::InvalidPeriod { .. })));
}

#[test]
fn validation_invalid_pattern_settings() {
    let p = [1.0_f64, 2.0, 3.0];
    let settings = PatternSettings::new().star_body_ratio(-0.1);
    assert!(matches!(
        morning_star(&p, &p, &p, &p, &settings),
        Err(Error::InvalidParameter { name: "star_body_ratio", .. })
    ));
}

// ==================== Not Errors ====================

#[test]
fn patterns_on_short_series_are_all_false() {
    let p = [1.0_f64, 1.0];
    let flags = morning_star(&p, &p, &p, &p, &PatternSettings::default()).unwrap();
    assert_eq!(flags, vec![false, false]);
}

#[test]
fn nan_input_is_not_an_error() {
    let data = vec![1.0_f64, f64::NAN, 3.0, 4.0, 5.0, 6.0];
    let out = sma(&data, 2).unwrap();
    assert!(out[1].is_nan());
    assert!(out[2].is_nan());
    assert_eq!(out[3], 3.5);

    let flags = hammer(&data, &data, &data, &data, &PatternSettings::default()).unwrap();
    assert!(flags.iter().all(|f| !f));
}

#[test]
fn flat_series_produce_nan_not_errors() {
    let flat = vec![10.0_f64; 20];
    let wr = williams_r(&flat, &flat, &flat, 5).unwrap();
    assert!(wr[4..].iter().all(|v| v.is_nan()));
    let c = cci(&flat, &flat, &flat, 5).unwrap();
    assert!(c[4..].iter().all(|v| v.is_nan()));
    let z = zscore(&flat, 5).unwrap();
    assert!(z[4..].iter().all(|v| v.is_nan()));
    let r = rsi(&flat, 5).unwrap();
    assert!(r[5..].iter().all(|&v| v == 50.0));
    let di = directional_index(&flat, &flat, &flat, 5).unwrap();
    assert!(di.plus_di[5..].iter().all(|v| v.is_nan()));
    assert!(di.dx[5..].iter().all(|v| v.is_nan()));
    assert!(adx(&flat, &flat, &flat, 5).unwrap().iter().all(|v| v.is_nan()));
}

/// Five moving bars, then ten identical closes.
fn settles_flat() -> Vec<f64> {
    let mut data = vec![101.3_f64, 97.7, 103.1, 99.9, 100.7];
    data.extend([100.1; 10]);
    data
}

#[test]
fn flat_window_after_movement_has_zero_dispersion() {
    let data = settles_flat();
    let sd = stddev(&data, 5, Ddof::Population).unwrap();
    assert!(sd[8] > 0.0);
    assert!(sd[9..].iter().all(|&v| v == 0.0));

    let z = zscore(&data, 5).unwrap();
    assert!(!z[8].is_nan());
    assert!(z[9..].iter().all(|v| v.is_nan()));

    let pb = bollinger_percent_b(&data, 5, 2.0).unwrap();
    assert!(pb[9..].iter().all(|v| v.is_nan()));
    let bw = bollinger_bandwidth(&data, 5, 2.0).unwrap();
    assert!(bw[9..].iter().all(|&v| v == 0.0));

    let x: Vec<f64> = (0..data.len()).map(|i| (i as f64 * 0.7).sin()).collect();
    let r = correlation(&x, &data, 5).unwrap();
    assert!(!r[8].is_nan());
    assert!(r[9..].iter().all(|v| v.is_nan()));
}

#[test]
fn beta_against_steady_growth_is_nan() {
    // constant 1% returns differ only by rounding
    let mut market = vec![100.0_f64];
    for i in 1..30 {
        let last = market[i - 1];
        market.push(last * 1.01);
    }
    let asset: Vec<f64> = (0..30).map(|i| 50.0 + (i as f64 * 0.9).sin() * 3.0).collect();
    let out = beta(&asset, &market, 5).unwrap();
    assert!(out.iter().all(|v| v.is_nan()));
}
