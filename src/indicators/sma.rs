//! Simple moving averages over a closing-price series.

/// Arithmetic mean over each trailing `window` closes. Indices before the
/// window is full are `None`. The input is never mutated.
pub fn sma_series(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; closes.len()];
    }
    let mut out = Vec::with_capacity(closes.len());
    for i in 0..closes.len() {
        if i + 1 < window {
            out.push(None);
        } else {
            let sum: f64 = closes[i + 1 - window..=i].iter().sum();
            out.push(Some(sum / window as f64));
        }
    }
    out
}

/// Mean of the last `window` closes, or `None` while the window is unfilled.
pub fn sma_latest(closes: &[f64], window: usize) -> Option<f64> {
    if window == 0 || closes.len() < window {
        return None;
    }
    let sum: f64 = closes[closes.len() - window..].iter().sum();
    Some(sum / window as f64)
}
