//! Stockpulse Alerter
//!
//! One-shot run: loads configuration from the environment, evaluates every
//! configured symbol and pushes the batched buy alert to the webhook.

use dotenvy::dotenv;
use stockpulse::config::AppConfig;
use stockpulse::core::runtime::AlertRuntime;
use stockpulse::logging;
use stockpulse::services::market_data::YahooChartProvider;
use stockpulse::services::notifier::WebhookNotifier;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    // The only fatal configuration error: no webhook endpoint at all.
    let config = AppConfig::from_env()?;

    let env = stockpulse::config::get_environment();
    info!(environment = %env, "Starting Stockpulse Alerter");
    info!(
        symbols = ?config.symbols,
        range = %config.lookback_range,
        interval = %config.bar_interval,
        "scanning {} symbol(s)",
        config.symbols.len()
    );

    let provider = YahooChartProvider::new();
    let notifier = WebhookNotifier::new(config.webhook_url.clone());
    let runtime = AlertRuntime::new(config, provider, notifier);

    let summary = runtime.run_once().await;
    info!(
        evaluated = summary.evaluated,
        skipped = summary.skipped,
        buy_signals = summary.buy_signals,
        notified = summary.notified,
        "alerter finished"
    );

    Ok(())
}
