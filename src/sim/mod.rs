//! Illustrative trade-outcome sampler.
//!
//! Draws wins and losses from a biased coin flip at a fixed win rate and
//! applies a constant profit target or stop loss per trade. This is a
//! teaching aid for sizing expectations, not a market simulation; nothing
//! in the alert pipeline depends on it.

use rand::Rng;

/// Parameters for one sampling run.
#[derive(Debug, Clone)]
pub struct SamplerParams {
    /// Probability in [0, 1] that a trade hits the profit target.
    pub win_rate: f64,
    /// Per-trade return when the coin lands on a win.
    pub profit_target_pct: f64,
    /// Per-trade return when it does not (negative).
    pub stop_loss_pct: f64,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            win_rate: 0.75,
            profit_target_pct: 0.15,
            stop_loss_pct: -0.25,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SampleSummary {
    pub trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub total_return_pct: f64,
}

impl SampleSummary {
    pub fn win_rate(&self) -> f64 {
        if self.trades == 0 {
            0.0
        } else {
            self.wins as f64 / self.trades as f64
        }
    }

    pub fn avg_trade_return_pct(&self) -> f64 {
        if self.trades == 0 {
            0.0
        } else {
            self.total_return_pct / self.trades as f64
        }
    }
}

/// Sample `trades` outcomes with the given RNG.
pub fn sample_outcomes<R: Rng>(
    params: &SamplerParams,
    trades: usize,
    rng: &mut R,
) -> SampleSummary {
    let mut summary = SampleSummary {
        trades,
        ..Default::default()
    };

    for _ in 0..trades {
        if rng.gen::<f64>() < params.win_rate {
            summary.wins += 1;
            summary.total_return_pct += params.profit_target_pct;
        } else {
            summary.losses += 1;
            summary.total_return_pct += params.stop_loss_pct;
        }
    }

    summary
}
