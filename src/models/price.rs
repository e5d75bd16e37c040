//! Price series primitives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One closing-price observation for a fixed bar interval. A well-formed
/// series is ordered oldest first with strictly increasing timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }
}

/// Extract the close column from a series.
pub fn closes(points: &[PricePoint]) -> Vec<f64> {
    points.iter().map(|p| p.close).collect()
}
