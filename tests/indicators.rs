//! Indicator math and engine behavior.

mod common;

use common::{candles_from_closes, candles_ohlc, flat_candles};
use stockpulse::common::math;
use stockpulse::config::IndicatorConfig;
use stockpulse::indicators::momentum::{macd, rsi};
use stockpulse::indicators::volatility::{atr, keltner};
use stockpulse::indicators::IndicatorEngine;
use stockpulse::AlertError;

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

// ---- EMA ------------------------------------------------------------------

#[test]
fn ema_window_one_is_identity() {
    let values = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
    let out = math::ema(&values, 1);
    assert_eq!(out, values.to_vec());
}

#[test]
fn ema_seeds_from_first_value() {
    // alpha = 2/(3+1) = 0.5; the seed is the first sample, not an average.
    let out = math::ema(&[2.0, 4.0], 3);
    assert_eq!(out.len(), 2);
    assert!(approx(out[0], 2.0));
    assert!(approx(out[1], 3.0));
}

#[test]
fn ema_known_recursion_values() {
    let out = math::ema(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
    let expected = [1.0, 1.5, 2.25, 3.125, 4.0625];
    for (got, want) in out.iter().zip(expected.iter()) {
        assert!(approx(*got, *want), "got {got}, want {want}");
    }
}

#[test]
fn ema_of_constant_series_is_constant() {
    let out = math::ema(&[100.0; 50], 20);
    assert!(out.iter().all(|v| approx(*v, 100.0)));
}

#[test]
fn ema_empty_or_zero_window_is_empty() {
    assert!(math::ema(&[], 5).is_empty());
    assert!(math::ema(&[1.0, 2.0], 0).is_empty());
}

// ---- RSI ------------------------------------------------------------------

#[test]
fn rsi_warmup_is_nan() {
    let closes: Vec<f64> = (1..=20).map(|i| i as f64).collect();
    let out = rsi::rsi_series(&closes, 14);
    assert_eq!(out.len(), closes.len());
    for v in &out[..14] {
        assert!(v.is_nan());
    }
    assert!(out[14].is_finite());
}

#[test]
fn rsi_flat_window_is_neutral_not_nan() {
    let out = rsi::rsi_series(&[100.0; 30], 14);
    for v in &out[14..] {
        assert!(approx(*v, 50.0), "flat window should be neutral, got {v}");
    }
}

#[test]
fn rsi_all_gains_hits_formula_limit() {
    let closes: Vec<f64> = (1..=30).map(|i| i as f64).collect();
    let out = rsi::rsi_series(&closes, 14);
    for v in &out[14..] {
        assert!(approx(*v, 100.0));
    }
}

#[test]
fn rsi_all_losses_is_zero() {
    let closes: Vec<f64> = (1..=30).rev().map(|i| i as f64).collect();
    let out = rsi::rsi_series(&closes, 14);
    for v in &out[14..] {
        assert!(approx(*v, 0.0));
    }
}

#[test]
fn rsi_known_mixed_window() {
    // Deltas +1, -1, +2 over window 3: avg gain 1, avg loss 1/3, RS = 3.
    let out = rsi::rsi_series(&[100.0, 101.0, 100.0, 102.0], 3);
    assert!(out[3].is_finite());
    assert!(approx(out[3], 75.0));
}

// ---- ATR ------------------------------------------------------------------

#[test]
fn atr_first_bar_uses_high_minus_low() {
    let candles = candles_ohlc(&[(10.0, 12.0, 8.0, 10.0)]);
    let out = atr::atr_series(&candles, 1);
    assert_eq!(out.len(), 1);
    assert!(approx(out[0], 4.0));
}

#[test]
fn atr_uses_true_range_against_previous_close() {
    // Second bar: high-low = 2, |high-prevClose| = 1, |low-prevClose| = 1.
    let candles = candles_ohlc(&[(10.0, 12.0, 8.0, 10.0), (10.5, 11.0, 9.0, 10.0)]);
    let out = atr::atr_series(&candles, 1);
    assert!(approx(out[0], 4.0));
    assert!(approx(out[1], 2.0));
}

#[test]
fn atr_gap_dominates_bar_range() {
    // Gap up: |high - prevClose| exceeds the bar's own range.
    let candles = candles_ohlc(&[(10.0, 10.5, 9.5, 10.0), (15.0, 15.5, 14.5, 15.0)]);
    let out = atr::atr_series(&candles, 1);
    assert!(approx(out[1], 5.5));
}

#[test]
fn atr_of_flat_series_is_zero() {
    let candles = flat_candles(40, 100.0);
    let out = atr::atr_series(&candles, 10);
    assert!(out.iter().all(|v| approx(*v, 0.0)));
}

// ---- MACD -----------------------------------------------------------------

#[test]
fn macd_histogram_identity_at_every_position() {
    let closes: Vec<f64> = (0..120)
        .map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0 + i as f64 * 0.1)
        .collect();
    let out = macd::macd_series(&closes, 12, 26, 9);
    assert_eq!(out.line.len(), closes.len());
    for i in 0..closes.len() {
        assert!(
            approx(out.line[i] - out.signal[i], out.histogram[i]),
            "histogram identity broken at {i}"
        );
    }
}

#[test]
fn macd_line_is_fast_minus_slow() {
    let closes: Vec<f64> = (0..80).map(|i| 50.0 + i as f64).collect();
    let out = macd::macd_series(&closes, 12, 26, 9);
    let fast = math::ema(&closes, 12);
    let slow = math::ema(&closes, 26);
    for i in 0..closes.len() {
        assert!(approx(out.line[i], fast[i] - slow[i]));
    }
}

#[test]
fn macd_of_constant_series_is_zero() {
    let out = macd::macd_series(&[100.0; 60], 12, 26, 9);
    assert!(out.line.iter().all(|v| approx(*v, 0.0)));
    assert!(out.signal.iter().all(|v| approx(*v, 0.0)));
    assert!(out.histogram.iter().all(|v| approx(*v, 0.0)));
}

// ---- Keltner --------------------------------------------------------------

#[test]
fn keltner_bands_are_symmetric_about_basis() {
    let candles = candles_ohlc(&[
        (10.0, 12.0, 8.0, 10.0),
        (10.5, 13.0, 9.0, 12.0),
        (12.0, 14.0, 11.0, 13.5),
        (13.0, 13.5, 10.0, 11.0),
    ]);
    let out = keltner::keltner_series(&candles, 3, 2, 2.0);
    for i in 0..candles.len() {
        assert!(approx(out.upper[i] + out.lower[i], 2.0 * out.basis[i]));
        assert!(out.upper[i] >= out.lower[i]);
    }
}

#[test]
fn keltner_collapses_to_basis_when_ranges_are_zero() {
    let candles = flat_candles(30, 100.0);
    let out = keltner::keltner_series(&candles, 20, 10, 2.0);
    for i in 0..candles.len() {
        assert!(approx(out.basis[i], 100.0));
        assert!(approx(out.upper[i], 100.0));
        assert!(approx(out.lower[i], 100.0));
    }
}

// ---- Engine ---------------------------------------------------------------

#[test]
fn engine_rejects_insufficient_history() {
    let candles = flat_candles(150, 100.0);
    let err = IndicatorEngine::compute(&candles, &IndicatorConfig::default()).unwrap_err();
    match err {
        AlertError::InsufficientHistory { got, need } => {
            assert_eq!(got, 150);
            assert_eq!(need, 200);
        }
        other => panic!("expected InsufficientHistory, got {other:?}"),
    }
}

#[test]
fn engine_min_bars_tracks_configuration() {
    assert_eq!(IndicatorConfig::default().min_bars(), 200);

    let small = IndicatorConfig {
        ema_short: 3,
        ema_mid: 4,
        ema_long: 5,
        rsi_len: 3,
        rsi_threshold: 30.0,
        kc_len: 4,
        kc_atr_len: 3,
        kc_multiplier: 2.0,
        macd_fast: 3,
        macd_slow: 5,
        macd_signal: 4,
    };
    // The MACD slow EMA plus its signal smoothing dominates here.
    assert_eq!(small.min_bars(), 9);
}

#[test]
fn engine_snapshot_of_flat_series() {
    let candles = flat_candles(250, 100.0);
    let snapshot = IndicatorEngine::snapshot(&candles, &IndicatorConfig::default()).unwrap();

    assert!(approx(snapshot.close, 100.0));
    assert!(approx(snapshot.ema_short, 100.0));
    assert!(approx(snapshot.ema_mid, 100.0));
    assert!(approx(snapshot.ema_long, 100.0));
    assert!(approx(snapshot.rsi, 50.0));
    assert!(approx(snapshot.kc_lower, 100.0));
    assert!(approx(snapshot.macd_line, 0.0));
    assert!(approx(snapshot.macd_signal, 0.0));
    assert!(approx(snapshot.macd_histogram, 0.0));
    assert!(approx(snapshot.prev_macd_line, 0.0));
    assert!(approx(snapshot.prev_macd_signal, 0.0));
}

#[test]
fn engine_series_stay_aligned_to_input() {
    let closes: Vec<f64> = (0..220).map(|i| 100.0 + (i as f64 * 0.3).cos()).collect();
    let candles = candles_from_closes(&closes);
    let series = IndicatorEngine::compute(&candles, &IndicatorConfig::default()).unwrap();

    assert_eq!(series.len(), candles.len());
    assert_eq!(series.ema_short.len(), candles.len());
    assert_eq!(series.ema_long.len(), candles.len());
    assert_eq!(series.rsi.len(), candles.len());
    assert_eq!(series.kc_lower.len(), candles.len());
    assert_eq!(series.macd_histogram.len(), candles.len());
}
