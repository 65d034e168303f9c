//! Error taxonomy for the alert pipeline.
//!
//! Every variant except `MissingConfig` is handled at the per-symbol or
//! per-run boundary; none of them aborts the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AlertError {
    /// The data source returned nothing for the symbol.
    #[error("no market data returned for {symbol}")]
    DataUnavailable { symbol: String },

    /// Fewer bars than the longest configured warm-up window.
    #[error("insufficient history: {got} bars, need at least {need}")]
    InsufficientHistory { got: usize, need: usize },

    /// A latest-value indicator read resolved to a non-finite number.
    #[error("indicator {field} is not finite at the latest bar")]
    Indeterminate { field: &'static str },

    /// The market data request itself failed.
    #[error("market data request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The outbound webhook message could not be delivered.
    #[error("webhook delivery failed: {0}")]
    NotificationDelivery(String),

    /// Required configuration is absent; aborts before any evaluation.
    #[error("missing required configuration: {0}")]
    MissingConfig(&'static str),
}
