//! Outbound Ports (Driven Ports / SPI)

use crate::domain::entities::TxHistoryPage;
use crate::domain::errors::ProviderError;
use async_trait::async_trait;

/// Source of per-address history pages (a chain indexer).
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch page `page` (0 = most recent) of `address`'s history.
    async fn history(
        &self,
        address: &str,
        page: usize,
        page_size: usize,
    ) -> Result<TxHistoryPage, ProviderError>;
}
