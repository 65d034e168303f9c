//! MACD (Moving Average Convergence Divergence) indicator
//!
//! MACD line = EMA(fast) - EMA(slow)
//! Signal    = EMA(line, signal window)
//! Histogram = line - signal

use crate::common::math;

/// MACD line, signal line and histogram, all aligned to the input closes.
#[derive(Debug, Clone)]
pub struct MacdSeries {
    pub line: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Compute the three MACD series.
///
/// The signal line reuses the same seeded recursive EMA as the line itself,
/// so the histogram identity `line - signal` holds at every position.
pub fn macd_series(closes: &[f64], fast: usize, slow: usize, signal: usize) -> MacdSeries {
    let fast_ema = math::ema(closes, fast);
    let slow_ema = math::ema(closes, slow);

    let line: Vec<f64> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(f, s)| f - s)
        .collect();
    let signal = math::ema(&line, signal);
    let histogram: Vec<f64> = line.iter().zip(&signal).map(|(l, s)| l - s).collect();

    MacdSeries {
        line,
        signal,
        histogram,
    }
}
