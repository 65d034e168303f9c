//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use stockpulse::models::candle::Candle;

const DAY_SECS: i64 = 86_400;
const BASE_TS: i64 = 1_700_000_000;

/// Candles where open/high/low/close all sit on the given closes.
pub fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Candle {
            timestamp: Utc
                .timestamp_opt(BASE_TS + i as i64 * DAY_SECS, 0)
                .unwrap(),
            open: close,
            high: close,
            low: close,
            close,
        })
        .collect()
}

/// A constant-price series of length `n`.
pub fn flat_candles(n: usize, price: f64) -> Vec<Candle> {
    candles_from_closes(&vec![price; n])
}

/// Candles with explicit (open, high, low, close) rows.
pub fn candles_ohlc(rows: &[(f64, f64, f64, f64)]) -> Vec<Candle> {
    rows.iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| Candle {
            timestamp: Utc
                .timestamp_opt(BASE_TS + i as i64 * DAY_SECS, 0)
                .unwrap(),
            open,
            high,
            low,
            close,
        })
        .collect()
}
