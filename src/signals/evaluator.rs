//! Decision rule combining the indicator snapshot with the correlation gate.

use crate::models::alert::Decision;
use crate::models::indicators::IndicatorSnapshot;

/// Strictly-greater comparison where a missing operand is false.
fn gt(lhs: Option<f64>, rhs: Option<f64>) -> bool {
    matches!((lhs, rhs), (Some(l), Some(r)) if l > r)
}

/// Evaluate the decision rule for the latest bar.
///
/// Rules are tested in order, first match wins:
/// 1. BUY: ma_short > ma_mid, close > ma_long, and correlation defined and
///    above the threshold.
/// 2. SELL: ma_short < ma_mid and close < ma_long. SELL carries no
///    correlation gate; the asymmetry mirrors the reference behavior and is
///    intentional.
/// 3. otherwise no signal.
///
/// Any comparison against a missing operand is false, and exact ties fall
/// through to no signal. Pure function of its inputs.
pub fn evaluate(
    snapshot: &IndicatorSnapshot,
    correlation: Option<f64>,
    buy_threshold: f64,
) -> Decision {
    let close = Some(snapshot.close);

    if gt(snapshot.ma_short, snapshot.ma_mid)
        && gt(close, snapshot.ma_long)
        && gt(correlation, Some(buy_threshold))
    {
        Decision::Buy
    } else if gt(snapshot.ma_mid, snapshot.ma_short) && gt(snapshot.ma_long, close) {
        Decision::Sell
    } else {
        Decision::Neutral
    }
}
