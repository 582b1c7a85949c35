//! Price source trait definitions.

use async_trait::async_trait;

use crate::error::DataError;
use crate::types::{Period, PriceSeries};

/// Trait for providers of daily price history.
///
/// Acquiring, retrying and caching quotes is the provider's concern; the
/// indicator engine only ever sees the returned series.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch daily history for `symbol` covering the trailing `period`.
    ///
    /// # Returns
    /// A non-empty series ordered from oldest to newest
    async fn fetch_history(&self, symbol: &str, period: Period) -> Result<PriceSeries, DataError>;

    /// Get the source name.
    fn name(&self) -> &str;
}
