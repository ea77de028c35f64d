//! Configuration for transaction history

use crate::domain::errors::HistoryError;
use serde::{Deserialize, Serialize};
use std::env;

/// Largest page the indexer will serve.
pub const INDEXER_MAX_PAGE_SIZE: usize = 200;

/// History configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// How many txs the wallet renders
    pub tx_history_count: usize,
    /// Page size requested per address
    pub tx_history_page_size: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            tx_history_count: 20,
            tx_history_page_size: 25,
        }
    }
}

impl HistoryConfig {
    /// Defaults overridden from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `TX_HISTORY_COUNT`: txs rendered (default: 20)
    /// - `TX_HISTORY_PAGE_SIZE`: per-address page size (default: 25)
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            tx_history_count: env::var("TX_HISTORY_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.tx_history_count),

            tx_history_page_size: env::var("TX_HISTORY_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.tx_history_page_size),
        }
    }

    pub fn validate(&self) -> Result<(), HistoryError> {
        if self.tx_history_count == 0 {
            return Err(HistoryError::InvalidConfig(
                "tx_history_count must be non-zero".to_string(),
            ));
        }

        if self.tx_history_page_size == 0 || self.tx_history_page_size > INDEXER_MAX_PAGE_SIZE {
            return Err(HistoryError::InvalidConfig(format!(
                "tx_history_page_size {} outside 1..={}",
                self.tx_history_page_size, INDEXER_MAX_PAGE_SIZE
            )));
        }

        Ok(())
    }
}
