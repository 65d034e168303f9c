//! Discord webhook notification sink.
//!
//! The pipeline owns the message content; this module owns serialization
//! and delivery. All buy decisions from one run go out as one message,
//! chunked against the sink's per-message embed limit.

use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::IndicatorConfig;
use crate::error::AlertError;
use crate::models::signal::SignalReport;

/// Discord rejects messages with more than ten embeds.
pub const MAX_EMBEDS_PER_MESSAGE: usize = 10;

const COLOR_BUY: u32 = 65280;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct WebhookNotifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl WebhookNotifier {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            webhook_url: webhook_url.into(),
        }
    }

    /// Deliver one run's buy reports, chunked if needed.
    ///
    /// Delivery failure does not roll back or retry anything; the caller
    /// logs it and the run still completes.
    pub async fn send_buy_alerts(
        &self,
        reports: &[SignalReport],
        indicators: &IndicatorConfig,
    ) -> Result<(), AlertError> {
        if reports.is_empty() {
            debug!("no buy signals this run, nothing to deliver");
            return Ok(());
        }

        for chunk in reports.chunks(MAX_EMBEDS_PER_MESSAGE) {
            let payload = WebhookPayload {
                content: format!(
                    "**Daily chart scan:** {} buy signal(s): {}",
                    reports.len(),
                    chunk
                        .iter()
                        .map(|r| r.symbol.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                embeds: chunk
                    .iter()
                    .map(|r| build_embed(r, indicators))
                    .collect(),
            };

            let response = self
                .client
                .post(&self.webhook_url)
                .json(&payload)
                .send()
                .await
                .map_err(|e| AlertError::NotificationDelivery(e.to_string()))?;

            if !response.status().is_success() {
                return Err(AlertError::NotificationDelivery(format!(
                    "webhook returned {}",
                    response.status()
                )));
            }
        }

        info!(
            buy_count = reports.len(),
            "delivered {} buy alert(s) to webhook",
            reports.len()
        );
        Ok(())
    }
}

fn build_embed(report: &SignalReport, indicators: &IndicatorConfig) -> Embed {
    let s = &report.snapshot;
    let f = &report.flags;
    let description = format!(
        "**Current Price:** ${:.2}\n\
         --- Indicator Details ---\n\
         - **Price > EMA {}**: {} (EMA {}: {:.2})\n\
         - **Price > EMA {}**: {} (EMA {}: {:.2})\n\
         - **Price > EMA {}**: {} (EMA {}: {:.2})\n\
         - **RSI < {}**: {} (RSI: {:.2})\n\
         - **Price < KC Lower**: {} (KC Lower: {:.2})\n\
         - **MACD Bullish Crossover**: {} (MACD Hist: {:.2})",
        s.close,
        indicators.ema_short,
        f.price_above_ema_short,
        indicators.ema_short,
        s.ema_short,
        indicators.ema_mid,
        f.price_above_ema_mid,
        indicators.ema_mid,
        s.ema_mid,
        indicators.ema_long,
        f.price_above_ema_long,
        indicators.ema_long,
        s.ema_long,
        indicators.rsi_threshold,
        f.rsi_oversold,
        s.rsi,
        f.below_keltner_lower,
        s.kc_lower,
        f.macd_bullish_cross,
        s.macd_histogram,
    );

    Embed {
        title: format!("Daily chart analysis for {}", report.symbol),
        description,
        color: COLOR_BUY,
        footer: EmbedFooter {
            text: format!(
                "Evaluated {}",
                report.evaluated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
        },
    }
}

#[derive(Debug, Serialize)]
struct WebhookPayload {
    content: String,
    embeds: Vec<Embed>,
}

#[derive(Debug, Serialize)]
struct Embed {
    title: String,
    description: String,
    color: u32,
    footer: EmbedFooter,
}

#[derive(Debug, Serialize)]
struct EmbedFooter {
    text: String,
}
