//! Trend state and crossover detection from two moving-average streams.

use crate::indicators::sma::sma_series;
use crate::models::indicators::{CrossoverSignal, Trend};

fn trend_at(short: Option<f64>, mid: Option<f64>) -> Option<Trend> {
    match (short, mid) {
        (Some(s), Some(m)) => Some(if s > m { Trend::Bullish } else { Trend::Bearish }),
        _ => None,
    }
}

fn bit(trend: Trend) -> i8 {
    match trend {
        Trend::Bullish => 1,
        Trend::Bearish => 0,
    }
}

/// Derive the latest trend membership and its transition delta.
///
/// The trend is defined only where both moving averages are defined; the
/// delta additionally needs the previous bar's trend. Both are diagnostics:
/// the decision rule re-tests the raw comparisons each cycle, so a signal
/// can hold across consecutive bars rather than firing only on the cross.
pub fn detect(closes: &[f64], short_window: usize, mid_window: usize) -> CrossoverSignal {
    let short = sma_series(closes, short_window);
    let mid = sma_series(closes, mid_window);
    let n = closes.len();

    let trend = match n {
        0 => None,
        _ => trend_at(short[n - 1], mid[n - 1]),
    };
    let prev = match n {
        0 | 1 => None,
        _ => trend_at(short[n - 2], mid[n - 2]),
    };
    let delta = match (trend, prev) {
        (Some(now), Some(before)) => Some(bit(now) - bit(before)),
        _ => None,
    };

    CrossoverSignal { trend, delta }
}
