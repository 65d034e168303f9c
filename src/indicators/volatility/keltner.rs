//! Keltner Channel: an EMA basis offset by a multiple of ATR.

use crate::indicators::trend::ema;
use crate::indicators::volatility::atr;
use crate::models::candle::Candle;

/// Basis, upper and lower band series, aligned to the input bars.
#[derive(Debug, Clone)]
pub struct KeltnerSeries {
    pub basis: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

pub fn keltner_series(
    candles: &[Candle],
    basis_window: usize,
    atr_window: usize,
    multiplier: f64,
) -> KeltnerSeries {
    let basis = ema::close_ema(candles, basis_window);
    let atr = atr::atr_series(candles, atr_window);

    let upper: Vec<f64> = basis
        .iter()
        .zip(&atr)
        .map(|(b, a)| b + multiplier * a)
        .collect();
    let lower: Vec<f64> = basis
        .iter()
        .zip(&atr)
        .map(|(b, a)| b - multiplier * a)
        .collect();

    KeltnerSeries {
        basis,
        upper,
        lower,
    }
}
