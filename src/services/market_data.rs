//! Price series provider interface.

use crate::errors::ProviderError;
use crate::models::price::PricePoint;

/// Pull-based source of closing-price series.
///
/// Implementations return the series ordered oldest first, deduplicated by
/// timestamp, and non-empty; anything else is a `ProviderError`.
#[async_trait::async_trait]
pub trait PriceProvider {
    async fn fetch(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<PricePoint>, ProviderError>;
}
