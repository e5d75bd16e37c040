//! Binance public klines adapter.
//!
//! The klines payload is an array of bar arrays (open-time, OHLC, volume,
//! and exchange bookkeeping); only open-time (index 0, epoch milliseconds)
//! and close (index 4, decimal string) are consumed.

use crate::errors::ProviderError;
use crate::models::price::PricePoint;
use crate::services::market_data::PriceProvider;
use chrono::DateTime;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub struct BinanceProvider {
    client: reqwest::Client,
    base_url: String,
}

impl BinanceProvider {
    /// `base_url` without the endpoint path, e.g. `https://api.binance.com`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn payload_error(symbol: &str, reason: impl Into<String>) -> ProviderError {
        ProviderError::Payload {
            symbol: symbol.to_string(),
            reason: reason.into(),
        }
    }
}

#[async_trait::async_trait]
impl PriceProvider for BinanceProvider {
    async fn fetch(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<PricePoint>, ProviderError> {
        let url = format!("{}/api/v3/klines", self.base_url);
        let limit = limit.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", interval),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                symbol: symbol.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                symbol: symbol.to_string(),
                status,
            });
        }

        let rows: Vec<Vec<Value>> = response
            .json()
            .await
            .map_err(|e| Self::payload_error(symbol, e.to_string()))?;

        let mut points = Vec::with_capacity(rows.len());
        for row in &rows {
            let open_time = row
                .first()
                .and_then(Value::as_i64)
                .ok_or_else(|| Self::payload_error(symbol, "missing open time"))?;
            let close_raw = row
                .get(4)
                .and_then(Value::as_str)
                .ok_or_else(|| Self::payload_error(symbol, "missing close"))?;
            let close: f64 = close_raw.parse().map_err(|_| {
                Self::payload_error(symbol, format!("invalid close value {:?}", close_raw))
            })?;
            let timestamp = DateTime::from_timestamp_millis(open_time).ok_or_else(|| {
                Self::payload_error(symbol, format!("open time {} out of range", open_time))
            })?;
            points.push(PricePoint::new(timestamp, close));
        }

        points.sort_by_key(|p| p.timestamp);
        points.dedup_by_key(|p| p.timestamp);

        if points.is_empty() {
            return Err(ProviderError::Empty {
                symbol: symbol.to_string(),
            });
        }

        debug!(
            symbol = %symbol,
            count = points.len(),
            "fetched {} bars for {}",
            points.len(),
            symbol
        );
        Ok(points)
    }
}
