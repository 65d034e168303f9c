//! One-shot alert run: fetch, evaluate and notify across the symbol list.

use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::error::AlertError;
use crate::indicators::IndicatorEngine;
use crate::models::signal::SignalReport;
use crate::services::market_data::MarketDataProvider;
use crate::services::notifier::WebhookNotifier;
use crate::signals::SignalEvaluator;

/// Counters for one completed run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub evaluated: usize,
    pub skipped: usize,
    pub buy_signals: usize,
    pub notified: bool,
}

/// Sequences fetch -> evaluate -> notify for one run.
///
/// Symbols are processed one at a time with a fixed delay in between to
/// respect the data source's rate limits; each symbol's bars and report are
/// independent of every other symbol's.
pub struct AlertRuntime<P> {
    config: AppConfig,
    provider: P,
    notifier: WebhookNotifier,
    evaluator: SignalEvaluator,
}

impl<P: MarketDataProvider> AlertRuntime<P> {
    pub fn new(config: AppConfig, provider: P, notifier: WebhookNotifier) -> Self {
        let evaluator = SignalEvaluator::new(config.indicators.rsi_threshold);
        Self {
            config,
            provider,
            notifier,
            evaluator,
        }
    }

    /// Evaluate every configured symbol once and deliver the batched alert.
    ///
    /// Per-symbol failures are logged and skipped; a delivery failure is
    /// logged and the run still completes normally.
    pub async fn run_once(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        let mut buys: Vec<SignalReport> = Vec::new();
        let delay = Duration::from_millis(self.config.symbol_delay_ms);

        for (i, symbol) in self.config.symbols.iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                sleep(delay).await;
            }

            match self.evaluate_symbol(symbol).await {
                Ok(report) => {
                    summary.evaluated += 1;
                    info!(
                        symbol = %symbol,
                        decision = ?report.decision,
                        rsi = report.snapshot.rsi,
                        close = report.snapshot.close,
                        "evaluated {}: {:?}",
                        symbol,
                        report.decision
                    );
                    if report.is_buy() {
                        buys.push(report);
                    }
                }
                Err(e) => {
                    summary.skipped += 1;
                    warn!(symbol = %symbol, error = %e, "skipping {}: {}", symbol, e);
                }
            }
        }

        summary.buy_signals = buys.len();
        match self
            .notifier
            .send_buy_alerts(&buys, &self.config.indicators)
            .await
        {
            Ok(()) => summary.notified = !buys.is_empty(),
            Err(e) => {
                // Failure to notify is not failure to evaluate.
                error!(error = %e, "alert delivery failed: {}", e);
            }
        }

        info!(
            evaluated = summary.evaluated,
            skipped = summary.skipped,
            buy_signals = summary.buy_signals,
            "run complete: {} evaluated, {} skipped, {} buy signal(s)",
            summary.evaluated,
            summary.skipped,
            summary.buy_signals
        );
        summary
    }

    async fn evaluate_symbol(&self, symbol: &str) -> Result<SignalReport, AlertError> {
        let candles = self
            .provider
            .fetch_daily(
                symbol,
                &self.config.lookback_range,
                &self.config.bar_interval,
            )
            .await?;

        debug!(
            symbol = %symbol,
            count = candles.len(),
            "fetched {} bars for {}",
            candles.len(),
            symbol
        );

        let snapshot = IndicatorEngine::snapshot(&candles, &self.config.indicators)?;
        Ok(self.evaluator.evaluate(symbol, snapshot))
    }
}
