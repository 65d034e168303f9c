//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = average gain / average loss, both simple rolling means over the
//! window (not Wilder smoothing; downstream thresholds are tuned against
//! the rolling-mean variant).

/// RSI series aligned to the input closes.
///
/// The first `window` positions are NaN: one bar is consumed by the first
/// delta and the rolling means need a full window of deltas. A window with
/// no losses resolves by the formula's limit to 100; a window with neither
/// gains nor losses is neutral at 50 rather than a 0/0 NaN.
pub fn rsi_series(closes: &[f64], window: usize) -> Vec<f64> {
    let n = closes.len();
    if window == 0 || n == 0 {
        return Vec::new();
    }

    let mut gains = Vec::with_capacity(n.saturating_sub(1));
    let mut losses = Vec::with_capacity(n.saturating_sub(1));
    for i in 1..n {
        let delta = closes[i] - closes[i - 1];
        if delta > 0.0 {
            gains.push(delta);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-delta);
        }
    }

    let mut out = vec![f64::NAN; n];
    for i in window..n {
        // Deltas i-window .. i-1 cover closes i-window ..= i.
        let lo = i - window;
        let avg_gain: f64 = gains[lo..i].iter().sum::<f64>() / window as f64;
        let avg_loss: f64 = losses[lo..i].iter().sum::<f64>() / window as f64;

        out[i] = if avg_loss == 0.0 {
            if avg_gain == 0.0 {
                50.0
            } else {
                100.0
            }
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - (100.0 / (1.0 + rs))
        };
    }

    out
}
