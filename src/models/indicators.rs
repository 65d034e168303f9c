use serde::Serialize;

/// Latest-value reads from every derived series for one instrument.
///
/// This is the only state the signal evaluator consumes; the second-to-last
/// MACD pair is carried for crossover detection. Every field is guaranteed
/// finite by the engine before a snapshot is handed out.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorSnapshot {
    pub close: f64,
    pub ema_short: f64,
    pub ema_mid: f64,
    pub ema_long: f64,
    pub rsi: f64,
    pub kc_lower: f64,
    pub macd_line: f64,
    pub macd_signal: f64,
    pub macd_histogram: f64,
    pub prev_macd_line: f64,
    pub prev_macd_signal: f64,
}
