//! In-memory history provider
//!
//! Holds each address's full history and paginates it the way the indexer
//! does. Backs fixtures and offline use; loads from JSON of the form
//! `{ "<address>": [<TxHistoryPage>, ...] }`.

use crate::config::INDEXER_MAX_PAGE_SIZE;
use crate::domain::entities::{ChronikTx, TxHistoryPage};
use crate::domain::errors::{HistoryError, ProviderError};
use crate::ports::outbound::HistoryProvider;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// History provider backed by a map of address -> txs (most recent first).
#[derive(Debug, Default, Clone)]
pub struct InMemoryHistoryProvider {
    histories: HashMap<String, Vec<ChronikTx>>,
    failing: HashSet<String>,
}

impl InMemoryHistoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `txs` as the full history of `address`.
    pub fn with_history(mut self, address: impl Into<String>, txs: Vec<ChronikTx>) -> Self {
        self.histories.insert(address.into(), txs);
        self
    }

    /// Make every request for `address` fail as if the indexer were down.
    pub fn with_failing_address(mut self, address: impl Into<String>) -> Self {
        self.failing.insert(address.into());
        self
    }

    /// Load from JSON. Pages of one address are concatenated in order.
    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        let pages: HashMap<String, Vec<TxHistoryPage>> = serde_json::from_str(json)?;

        let histories = pages
            .into_iter()
            .map(|(address, pages)| {
                let txs = pages.into_iter().flat_map(|p| p.txs).collect();
                (address, txs)
            })
            .collect();

        Ok(Self {
            histories,
            failing: HashSet::new(),
        })
    }

    pub fn address_count(&self) -> usize {
        self.histories.len()
    }
}

#[async_trait]
impl HistoryProvider for InMemoryHistoryProvider {
    async fn history(
        &self,
        address: &str,
        page: usize,
        page_size: usize,
    ) -> Result<TxHistoryPage, ProviderError> {
        if self.failing.contains(address) {
            return Err(ProviderError::Unavailable(format!(
                "request for {address} refused"
            )));
        }

        if page_size > INDEXER_MAX_PAGE_SIZE {
            return Err(ProviderError::PageSizeTooLarge {
                size: page_size,
                max: INDEXER_MAX_PAGE_SIZE,
            });
        }

        let txs = self
            .histories
            .get(address)
            .ok_or_else(|| ProviderError::UnknownAddress(address.to_string()))?;

        let num_pages = if page_size == 0 {
            0
        } else {
            txs.len().div_ceil(page_size)
        };
        let start = page.saturating_mul(page_size).min(txs.len());
        let end = start.saturating_add(page_size).min(txs.len());

        trace!(address, page, page_size, start, end, "Serving history page");

        Ok(TxHistoryPage::with_counts(
            txs[start..end].to_vec(),
            num_pages,
            txs.len(),
        ))
    }
}
