//! Signal evaluator: reduces an indicator snapshot to a buy/hold report.

use chrono::Utc;

use crate::models::indicators::IndicatorSnapshot;
use crate::models::signal::{Decision, SignalFlags, SignalReport};

/// Applies the six-condition rule set to a snapshot.
///
/// Pure function of (snapshot, threshold); a snapshot only exists after the
/// engine has validated history length and finiteness, so there is nothing
/// to fail here.
pub struct SignalEvaluator {
    rsi_threshold: f64,
}

impl SignalEvaluator {
    pub fn new(rsi_threshold: f64) -> Self {
        Self { rsi_threshold }
    }

    pub fn evaluate(&self, symbol: &str, snapshot: IndicatorSnapshot) -> SignalReport {
        let flags = SignalFlags {
            price_above_ema_short: snapshot.close > snapshot.ema_short,
            price_above_ema_mid: snapshot.close > snapshot.ema_mid,
            price_above_ema_long: snapshot.close > snapshot.ema_long,
            rsi_oversold: snapshot.rsi < self.rsi_threshold,
            below_keltner_lower: snapshot.close < snapshot.kc_lower,
            macd_bullish_cross: snapshot.macd_line > snapshot.macd_signal
                && snapshot.prev_macd_line <= snapshot.prev_macd_signal,
        };

        // Strict unanimous vote: any single failing condition forces Hold.
        let decision = if flags.all() {
            Decision::Buy
        } else {
            Decision::Hold
        };

        SignalReport {
            symbol: symbol.to_string(),
            snapshot,
            flags,
            decision,
            evaluated_at: Utc::now(),
        }
    }
}
