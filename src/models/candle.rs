use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One trading day's price record for one instrument.
///
/// Immutable once fetched; the engine only ever borrows candles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    /// A candle is usable when every price field is a positive finite number.
    pub fn is_valid(&self) -> bool {
        [self.open, self.high, self.low, self.close]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}
