//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::candle::Candle;

/// ATR series aligned to the input bars.
///
/// True range per bar is `max(high - low, |high - prevClose|,
/// |low - prevClose|)`; the first bar has no previous close, so its true
/// range is just `high - low`. The ranges are then smoothed with the same
/// recursive EMA the trend indicators use.
pub fn atr_series(candles: &[Candle], window: usize) -> Vec<f64> {
    if candles.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::with_capacity(candles.len());
    ranges.push(candles[0].high - candles[0].low);
    for i in 1..candles.len() {
        ranges.push(math::true_range(
            candles[i].high,
            candles[i].low,
            candles[i - 1].close,
        ));
    }

    math::ema(&ranges, window)
}
