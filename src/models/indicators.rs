//! Indicator value models.
//!
//! A moving-average value is `None` until its window is fully populated.
//! Missing values never compare as real numbers; every consumer must treat
//! a comparison against `None` as false.

use serde::{Deserialize, Serialize};

/// Latest-bar view of the close and its three moving averages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub close: f64,
    pub ma_short: Option<f64>,
    pub ma_mid: Option<f64>,
    pub ma_long: Option<f64>,
}

/// Trend membership for one bar, from ma_short vs ma_mid. Equality counts
/// as bearish (not strictly greater).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Bullish,
    Bearish,
}

/// Crossover diagnostics for the latest bar.
///
/// `delta` is +1 on a bullish cross, -1 on a bearish cross, 0 when the trend
/// held, and `None` when either endpoint bar has an undefined trend. It is
/// reported for observability only; the decision rule re-tests the raw
/// comparisons each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossoverSignal {
    pub trend: Option<Trend>,
    pub delta: Option<i8>,
}
