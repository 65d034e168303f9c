//! Shared numeric building blocks for the indicator modules.

/// Recursive exponential moving average over the whole input.
///
/// Smoothing factor is `2 / (window + 1)`. The first output seeds from the
/// first input value rather than a simple-average warm-up, so the series is
/// defined at every position and composes recursively (EMA of EMA). With
/// `window == 1` the smoothing factor is 1 and the input comes back
/// unchanged.
pub fn ema(values: &[f64], window: usize) -> Vec<f64> {
    if values.is_empty() || window == 0 {
        return Vec::new();
    }

    let alpha = 2.0 / (window as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev = values[0];
    out.push(prev);

    for &value in &values[1..] {
        prev = alpha * value + (1.0 - alpha) * prev;
        out.push(prev);
    }

    out
}

/// True range of one bar given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}
