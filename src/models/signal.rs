use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::indicators::IndicatorSnapshot;

/// Per-condition outcomes of the rule set.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SignalFlags {
    pub price_above_ema_short: bool,
    pub price_above_ema_mid: bool,
    pub price_above_ema_long: bool,
    pub rsi_oversold: bool,
    pub below_keltner_lower: bool,
    pub macd_bullish_cross: bool,
}

impl SignalFlags {
    /// Unanimous vote across all six conditions. The aggregate decision is
    /// always derived through here; there are no hidden conditions.
    pub fn all(&self) -> bool {
        self.price_above_ema_short
            && self.price_above_ema_mid
            && self.price_above_ema_long
            && self.rsi_oversold
            && self.below_keltner_lower
            && self.macd_bullish_cross
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Decision {
    Buy,
    Hold,
}

/// One symbol's evaluation outcome for a single run.
#[derive(Debug, Clone, Serialize)]
pub struct SignalReport {
    pub symbol: String,
    pub snapshot: IndicatorSnapshot,
    pub flags: SignalFlags,
    pub decision: Decision,
    pub evaluated_at: DateTime<Utc>,
}

impl SignalReport {
    pub fn is_buy(&self) -> bool {
        self.decision == Decision::Buy
    }
}
