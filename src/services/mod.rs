pub mod market_data;
pub mod notifier;

pub use market_data::{MarketDataProvider, YahooChartProvider};
pub use notifier::WebhookNotifier;
