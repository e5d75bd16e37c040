//! Decision and alert record models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one evaluation cycle. Exactly one per tick, never retried or
/// merged across cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
    #[serde(rename = "No Signal")]
    Neutral,
}

impl Decision {
    /// Only BUY and SELL reach the notification sink.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Decision::Neutral)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Buy => write!(f, "BUY"),
            Decision::Sell => write!(f, "SELL"),
            Decision::Neutral => write!(f, "No Signal"),
        }
    }
}

/// Immutable record of one evaluation, handed to the notification sink
/// (actionable decisions only) and the audit log (every cycle).
///
/// `date` is the date of the latest bar, not wall clock, so re-evaluating
/// the same historical window reproduces the record byte for byte. The serde
/// names match the audit CSV header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Correlation")]
    pub correlation: Option<f64>,
    #[serde(rename = "Signal")]
    pub decision: Decision,
}

impl AlertRecord {
    /// Notification subject line, e.g. "XRPUSDT BUY Alert".
    pub fn subject(&self) -> String {
        format!("{} {} Alert", self.symbol, self.decision)
    }

    /// Notification body: signal kind, price, correlation and trend word.
    pub fn body(&self) -> String {
        let correlation = match self.correlation {
            Some(value) => format!("{:.2}", value),
            None => "n/a".to_string(),
        };
        let trend = match self.decision {
            Decision::Buy => "Bullish",
            Decision::Sell => "Bearish",
            Decision::Neutral => "Flat",
        };
        format!(
            "{} Signal for {}\nPrice: {}\nCorr: {}\nTrend: {}",
            self.decision, self.symbol, self.price, correlation, trend
        )
    }
}
