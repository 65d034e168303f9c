//! Run configuration loaded from the environment.
//!
//! Every knob the pipeline uses (symbol list, lookback, indicator window
//! lengths, thresholds, webhook endpoint) lives here; nothing downstream
//! reads the environment directly.

use std::env;
use std::str::FromStr;

use crate::error::AlertError;

/// Window lengths and thresholds for the indicator engine.
#[derive(Debug, Clone)]
pub struct IndicatorConfig {
    pub ema_short: usize,
    pub ema_mid: usize,
    pub ema_long: usize,
    pub rsi_len: usize,
    pub rsi_threshold: f64,
    pub kc_len: usize,
    pub kc_atr_len: usize,
    pub kc_multiplier: f64,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            ema_short: 35,
            ema_mid: 50,
            ema_long: 200,
            rsi_len: 14,
            rsi_threshold: 30.0,
            kc_len: 20,
            kc_atr_len: 10,
            kc_multiplier: 2.0,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
        }
    }
}

impl IndicatorConfig {
    /// Minimum number of bars required before any snapshot is taken.
    ///
    /// The longest single window dominates; the MACD signal line needs the
    /// slow EMA plus its own smoothing window, and RSI consumes one bar for
    /// the first delta. The crossover check needs two aligned readings.
    pub fn min_bars(&self) -> usize {
        [
            self.ema_short,
            self.ema_mid,
            self.ema_long,
            self.rsi_len + 1,
            self.kc_len,
            self.kc_atr_len + 1,
            self.macd_slow + self.macd_signal,
            2,
        ]
        .into_iter()
        .max()
        .unwrap_or(2)
    }
}

/// Full application configuration for one run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub webhook_url: String,
    pub symbols: Vec<String>,
    pub lookback_range: String,
    pub bar_interval: String,
    pub symbol_delay_ms: u64,
    pub indicators: IndicatorConfig,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Only the webhook URL is hard-required; everything else falls back to
    /// the defaults the rule thresholds were tuned against.
    pub fn from_env() -> Result<Self, AlertError> {
        let webhook_url = env::var("DISCORD_WEBHOOK_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(AlertError::MissingConfig("DISCORD_WEBHOOK_URL"))?;

        let symbols = env::var("SYMBOLS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_uppercase())
                    .filter(|p| !p.is_empty())
                    .collect::<Vec<String>>()
            })
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| vec!["AAPL".into(), "MSFT".into(), "GOOGL".into()]);

        let indicators = IndicatorConfig {
            ema_short: env_or("EMA_SHORT_LEN", 35),
            ema_mid: env_or("EMA_MID_LEN", 50),
            ema_long: env_or("EMA_LONG_LEN", 200),
            rsi_len: env_or("RSI_LEN", 14),
            rsi_threshold: env_or("RSI_THRESHOLD", 30.0),
            kc_len: env_or("KC_LEN", 20),
            kc_atr_len: env_or("KC_ATR_LEN", 10),
            kc_multiplier: env_or("KC_MULTIPLIER", 2.0),
            macd_fast: env_or("MACD_FAST_LEN", 12),
            macd_slow: env_or("MACD_SLOW_LEN", 26),
            macd_signal: env_or("MACD_SIGNAL_LEN", 9),
        };

        Ok(Self {
            webhook_url,
            symbols,
            lookback_range: env_or("LOOKBACK_RANGE", "1y".to_string()),
            bar_interval: env_or("BAR_INTERVAL", "1d".to_string()),
            symbol_delay_ms: env_or("SYMBOL_DELAY_MS", 1_000),
            indicators,
        })
    }
}

/// Deployment environment name, used to pick the log format.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
