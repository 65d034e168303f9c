pub mod candle;
pub mod indicators;
pub mod signal;

pub use candle::Candle;
pub use indicators::IndicatorSnapshot;
pub use signal::{Decision, SignalFlags, SignalReport};
