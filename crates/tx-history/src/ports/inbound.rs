//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{ChronikTx, TxHistoryPage};
use crate::domain::errors::HistoryError;
use async_trait::async_trait;

/// Primary transaction history API
#[async_trait]
pub trait TxHistoryApi: Send + Sync {
    /// Displayed history of a wallet.
    ///
    /// Fetches the first page of every address, flattens, sorts and trims
    /// to the configured rendered count. Fails if any address fails.
    async fn get_history(&self, addresses: &[String]) -> Result<Vec<ChronikTx>, HistoryError>;

    /// One history page of one address, at the configured page size.
    async fn get_history_page(
        &self,
        address: &str,
        page: usize,
    ) -> Result<TxHistoryPage, HistoryError>;

    /// Sort an already-fetched flat history for display.
    fn sort_history(&self, txs: &[ChronikTx]) -> Vec<ChronikTx>;
}
