//! Market data provider interface and the Yahoo Finance chart implementation.

use async_trait::async_trait;
use chrono::DateTime;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::AlertError;
use crate::models::candle::Candle;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait MarketDataProvider {
    /// Get historical daily bars for a symbol, oldest first.
    ///
    /// `range` and `interval` use the source's own vocabulary ("1y", "1d").
    async fn fetch_daily(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<Candle>, AlertError>;
}

/// Provider backed by the Yahoo Finance v8 chart endpoint.
///
/// One bounded GET per symbol, no retry loop; failure handling belongs to
/// the per-symbol run boundary.
pub struct YahooChartProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooChartProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at a different host (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base_url: base_url.into(),
        }
    }
}

impl Default for YahooChartProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for YahooChartProvider {
    async fn fetch_daily(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<Candle>, AlertError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        let response = self
            .client
            .get(&url)
            .query(&[("range", range), ("interval", interval)])
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(
                symbol = %symbol,
                status = %response.status(),
                "chart endpoint returned an error status for {}",
                symbol
            );
            return Err(AlertError::DataUnavailable {
                symbol: symbol.to_string(),
            });
        }

        let body: ChartResponse = response.json().await?;
        let candles = parse_chart(symbol, body)?;

        debug!(
            symbol = %symbol,
            count = candles.len(),
            "fetched {} daily bars for {}",
            candles.len(),
            symbol
        );
        Ok(candles)
    }
}

fn parse_chart(symbol: &str, body: ChartResponse) -> Result<Vec<Candle>, AlertError> {
    let no_data = || AlertError::DataUnavailable {
        symbol: symbol.to_string(),
    };

    let result = body
        .chart
        .result
        .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
        .ok_or_else(no_data)?;

    let timestamps = result.timestamp.unwrap_or_default();
    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .unwrap_or_default();

    let mut candles = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        // Rows with any missing field are dropped; the indicator math
        // requires gap-free open/high/low/close.
        let (open, high, low, close) = match (
            field(&quote.open, i),
            field(&quote.high, i),
            field(&quote.low, i),
            field(&quote.close, i),
        ) {
            (Some(o), Some(h), Some(l), Some(c)) => (o, h, l, c),
            _ => continue,
        };

        let Some(timestamp) = DateTime::from_timestamp(ts, 0) else {
            continue;
        };

        let candle = Candle {
            timestamp,
            open,
            high,
            low,
            close,
        };
        if candle.is_valid() {
            candles.push(candle);
        }
    }

    if candles.is_empty() {
        return Err(no_data());
    }
    Ok(candles)
}

fn field(values: &[Option<f64>], index: usize) -> Option<f64> {
    values.get(index).copied().flatten()
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
}
