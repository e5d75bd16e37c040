//! Shared helpers for integration tests

use chrono::DateTime;
use std::collections::HashMap;
use std::sync::Mutex;
use trendalert::errors::{NotifyError, ProviderError};
use trendalert::models::price::PricePoint;
use trendalert::services::market_data::PriceProvider;
use trendalert::services::notifier::NotificationSink;

pub const DAY: i64 = 86_400;

/// Daily bars from the epoch, one per close, oldest first.
pub fn daily_series(closes: &[f64]) -> Vec<PricePoint> {
    daily_series_from(0, closes)
}

/// Daily bars starting `start_day` days after the epoch.
pub fn daily_series_from(start_day: i64, closes: &[f64]) -> Vec<PricePoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let ts = DateTime::from_timestamp((start_day + i as i64) * DAY, 0).unwrap();
            PricePoint::new(ts, close)
        })
        .collect()
}

/// Multiplicative closes whose returns alternate between `a` and `b`. With
/// both positive the series rises steadily, with both negative it falls, and
/// either way the return stream has non-zero variance.
pub fn alternating_closes(len: usize, start: f64, a: f64, b: f64) -> Vec<f64> {
    let mut closes = vec![start];
    for i in 1..len {
        let ret = if i % 2 == 0 { a } else { b };
        let prev = closes[i - 1];
        closes.push(prev * (1.0 + ret));
    }
    closes
}

/// In-memory provider serving a fixed series per symbol.
pub struct StaticProvider {
    series: HashMap<String, Vec<PricePoint>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self {
            series: HashMap::new(),
        }
    }

    pub fn with_series(mut self, symbol: &str, points: Vec<PricePoint>) -> Self {
        self.series.insert(symbol.to_string(), points);
        self
    }
}

#[async_trait::async_trait]
impl PriceProvider for StaticProvider {
    async fn fetch(
        &self,
        symbol: &str,
        _interval: &str,
        limit: usize,
    ) -> Result<Vec<PricePoint>, ProviderError> {
        let points = self
            .series
            .get(symbol)
            .cloned()
            .ok_or_else(|| ProviderError::Empty {
                symbol: symbol.to_string(),
            })?;
        let skip = points.len().saturating_sub(limit);
        Ok(points[skip..].to_vec())
    }
}

/// Provider that always fails with a non-success status.
pub struct FailingProvider;

#[async_trait::async_trait]
impl PriceProvider for FailingProvider {
    async fn fetch(
        &self,
        symbol: &str,
        _interval: &str,
        _limit: usize,
    ) -> Result<Vec<PricePoint>, ProviderError> {
        Err(ProviderError::Status {
            symbol: symbol.to_string(),
            status: reqwest::StatusCode::BAD_GATEWAY,
        })
    }
}

/// Sink that records every notification it receives.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
}

#[async_trait::async_trait]
impl NotificationSink for RecordingNotifier {
    async fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .unwrap()
            .push((subject.to_string(), body.to_string()));
        Ok(())
    }
}

/// Sink that always fails.
pub struct FailingNotifier;

#[async_trait::async_trait]
impl NotificationSink for FailingNotifier {
    async fn notify(&self, _subject: &str, _body: &str) -> Result<(), NotifyError> {
        let err = "not an address"
            .parse::<lettre::message::Mailbox>()
            .unwrap_err();
        Err(NotifyError::Address(err))
    }
}
