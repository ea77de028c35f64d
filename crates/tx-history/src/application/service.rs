//! Transaction History Service
//!
//! Main service implementing TxHistoryApi.

use crate::algorithms::{flatten_tx_history, sort_and_trim_tx_history, sort_tx_history};
use crate::config::HistoryConfig;
use crate::domain::entities::{ChronikTx, TxHistoryPage};
use crate::domain::errors::HistoryError;
use crate::ports::inbound::TxHistoryApi;
use crate::ports::outbound::HistoryProvider;
use async_trait::async_trait;
use futures::future::try_join_all;

use tracing::{debug, info, warn};

/// Transaction History Service
///
/// Orchestrates the history pipeline:
/// 1. Fetch the first page of every wallet address, concurrently
/// 2. Flatten the pages
/// 3. Sort newest first
/// 4. Trim to the rendered count
pub struct TxHistoryService<P> {
    provider: P,
    config: HistoryConfig,
}

impl<P: HistoryProvider> TxHistoryService<P> {
    /// Create a new service with default config
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config: HistoryConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(provider: P, config: HistoryConfig) -> Result<Self, HistoryError> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    async fn fetch_page(&self, address: &str, page: usize) -> Result<TxHistoryPage, HistoryError> {
        self.provider
            .history(address, page, self.config.tx_history_page_size)
            .await
            .map_err(|source| {
                warn!(address, page, error = %source, "History request failed");
                HistoryError::Provider {
                    address: address.to_string(),
                    source,
                }
            })
    }
}

#[async_trait]
impl<P: HistoryProvider> TxHistoryApi for TxHistoryService<P> {
    async fn get_history(&self, addresses: &[String]) -> Result<Vec<ChronikTx>, HistoryError> {
        if addresses.is_empty() {
            debug!("No addresses, empty history");
            return Ok(vec![]);
        }

        // 1. One request per address; any failure fails the lot
        let requests = addresses.iter().map(|address| self.fetch_page(address, 0));
        let pages = try_join_all(requests).await?;

        // 2. Flatten
        let flat = flatten_tx_history(&pages);
        debug!(
            address_count = addresses.len(),
            tx_count = flat.len(),
            "Flattened history pages"
        );

        // 3. Sort and trim
        let history = sort_and_trim_tx_history(&flat, self.config.tx_history_count);

        info!(
            fetched = flat.len(),
            rendered = history.len(),
            "Wallet history ready"
        );

        Ok(history)
    }

    async fn get_history_page(
        &self,
        address: &str,
        page: usize,
    ) -> Result<TxHistoryPage, HistoryError> {
        let result = self.fetch_page(address, page).await?;
        debug!(address, page, tx_count = result.txs.len(), "Fetched history page");
        Ok(result)
    }

    fn sort_history(&self, txs: &[ChronikTx]) -> Vec<ChronikTx> {
        sort_tx_history(txs)
    }
}
