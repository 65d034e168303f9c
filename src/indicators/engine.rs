//! Indicator engine: turns a raw bar sequence into derived series and a
//! latest-value snapshot for the signal evaluator.

use crate::config::IndicatorConfig;
use crate::error::AlertError;
use crate::indicators::momentum::{macd, rsi};
use crate::indicators::trend::ema;
use crate::indicators::volatility::keltner;
use crate::models::candle::Candle;
use crate::models::indicators::IndicatorSnapshot;

/// All derived series for one instrument, index-aligned to the input bars.
#[derive(Debug, Clone)]
pub struct IndicatorSeries {
    pub close: Vec<f64>,
    pub ema_short: Vec<f64>,
    pub ema_mid: Vec<f64>,
    pub ema_long: Vec<f64>,
    pub rsi: Vec<f64>,
    pub kc_basis: Vec<f64>,
    pub kc_upper: Vec<f64>,
    pub kc_lower: Vec<f64>,
    pub macd_line: Vec<f64>,
    pub macd_signal: Vec<f64>,
    pub macd_histogram: Vec<f64>,
}

pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Compute every derived series. Pure function of (bars, config); the
    /// input is only ever borrowed.
    pub fn compute(
        candles: &[Candle],
        config: &IndicatorConfig,
    ) -> Result<IndicatorSeries, AlertError> {
        let need = config.min_bars();
        if candles.len() < need {
            return Err(AlertError::InsufficientHistory {
                got: candles.len(),
                need,
            });
        }

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let kc = keltner::keltner_series(
            candles,
            config.kc_len,
            config.kc_atr_len,
            config.kc_multiplier,
        );
        let macd = macd::macd_series(
            &closes,
            config.macd_fast,
            config.macd_slow,
            config.macd_signal,
        );

        Ok(IndicatorSeries {
            ema_short: ema::close_ema(candles, config.ema_short),
            ema_mid: ema::close_ema(candles, config.ema_mid),
            ema_long: ema::close_ema(candles, config.ema_long),
            rsi: rsi::rsi_series(&closes, config.rsi_len),
            kc_basis: kc.basis,
            kc_upper: kc.upper,
            kc_lower: kc.lower,
            macd_line: macd.line,
            macd_signal: macd.signal,
            macd_histogram: macd.histogram,
            close: closes,
        })
    }

    /// Compute and immediately take the latest-value snapshot.
    pub fn snapshot(
        candles: &[Candle],
        config: &IndicatorConfig,
    ) -> Result<IndicatorSnapshot, AlertError> {
        Self::compute(candles, config)?.snapshot()
    }
}

impl IndicatorSeries {
    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Latest-value reads plus the second-to-last MACD pair.
    ///
    /// Every read must be finite; a non-finite value after the RSI
    /// special-casing means the snapshot is indeterminate and no partial
    /// result is returned.
    pub fn snapshot(&self) -> Result<IndicatorSnapshot, AlertError> {
        let last = self.close.len() - 1;
        let prev = last - 1;

        Ok(IndicatorSnapshot {
            close: finite("close", self.close[last])?,
            ema_short: finite("ema_short", self.ema_short[last])?,
            ema_mid: finite("ema_mid", self.ema_mid[last])?,
            ema_long: finite("ema_long", self.ema_long[last])?,
            rsi: finite("rsi", self.rsi[last])?,
            kc_lower: finite("kc_lower", self.kc_lower[last])?,
            macd_line: finite("macd_line", self.macd_line[last])?,
            macd_signal: finite("macd_signal", self.macd_signal[last])?,
            macd_histogram: finite("macd_histogram", self.macd_histogram[last])?,
            prev_macd_line: finite("prev_macd_line", self.macd_line[prev])?,
            prev_macd_signal: finite("prev_macd_signal", self.macd_signal[prev])?,
        })
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, AlertError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AlertError::Indeterminate { field })
    }
}
