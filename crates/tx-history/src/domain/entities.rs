//! Core entities for transaction history
//!
//! Records are decoded from indexer JSON. Only the fields the ordering needs
//! are typed; everything else rides along in `extra` and is written back out
//! unchanged.

use super::value_objects::{
    BlockHeight, LenientNumericU64, LenientU64, UnixSeconds, UNKNOWN_TIME_FIRST_SEEN,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::serde_as;

/// Block that confirmed a transaction.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMetadata {
    #[serde_as(as = "LenientNumericU64")]
    #[serde(default)]
    pub height: BlockHeight,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Miner-assigned block time
    #[serde_as(as = "LenientU64")]
    #[serde(default)]
    pub timestamp: UnixSeconds,
}

impl BlockMetadata {
    pub fn new(height: BlockHeight, timestamp: UnixSeconds) -> Self {
        Self {
            height,
            hash: None,
            timestamp,
        }
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }
}

/// Confirmation state of a transaction, as a tagged variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxStatus {
    /// Mined into a block
    Confirmed {
        height: BlockHeight,
        timestamp: UnixSeconds,
    },
    /// Still in the mempool
    Unconfirmed { first_seen: UnixSeconds },
}

/// A transaction record as returned by the indexer.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChronikTx {
    /// Hex transaction id. Opaque; only used as a key.
    pub txid: String,
    /// Confirming block, absent while unconfirmed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockMetadata>,
    /// When the indexer first saw the tx in its mempool. `0` = unknown.
    #[serde_as(as = "LenientU64")]
    #[serde(default)]
    pub time_first_seen: UnixSeconds,
    /// Remaining indexer fields (inputs, outputs, tokenEntries, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChronikTx {
    /// An unconfirmed record with unknown first-seen time.
    pub fn new(txid: impl Into<String>) -> Self {
        Self {
            txid: txid.into(),
            block: None,
            time_first_seen: UNKNOWN_TIME_FIRST_SEEN,
            extra: Map::new(),
        }
    }

    pub fn unconfirmed(txid: impl Into<String>, time_first_seen: UnixSeconds) -> Self {
        Self::new(txid).with_time_first_seen(time_first_seen)
    }

    pub fn confirmed(txid: impl Into<String>, height: BlockHeight, timestamp: UnixSeconds) -> Self {
        Self::new(txid).with_block(BlockMetadata::new(height, timestamp))
    }

    pub fn with_block(mut self, block: BlockMetadata) -> Self {
        self.block = Some(block);
        self
    }

    pub fn with_time_first_seen(mut self, ts: UnixSeconds) -> Self {
        self.time_first_seen = ts;
        self
    }

    pub fn is_confirmed(&self) -> bool {
        self.block.is_some()
    }

    /// Block height, if confirmed.
    pub fn height(&self) -> Option<BlockHeight> {
        self.block.as_ref().map(|b| b.height)
    }

    pub fn status(&self) -> TxStatus {
        match &self.block {
            Some(block) => TxStatus::Confirmed {
                height: block.height,
                timestamp: block.timestamp,
            },
            None => TxStatus::Unconfirmed {
                first_seen: self.time_first_seen,
            },
        }
    }
}

/// One page of an address's history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxHistoryPage {
    #[serde(default)]
    pub txs: Vec<ChronikTx>,
    #[serde(default)]
    pub num_pages: u32,
    #[serde(default)]
    pub num_txs: u32,
}

impl TxHistoryPage {
    /// A single-page history holding all of `txs`.
    pub fn new(txs: Vec<ChronikTx>) -> Self {
        let num_pages = if txs.is_empty() { 0 } else { 1 };
        let num_txs = txs.len();
        Self::with_counts(txs, num_pages, num_txs)
    }

    /// One page of a longer history. Counts beyond `u32::MAX` saturate.
    pub fn with_counts(txs: Vec<ChronikTx>, num_pages: usize, num_txs: usize) -> Self {
        Self {
            txs,
            num_pages: u32::try_from(num_pages).unwrap_or(u32::MAX),
            num_txs: u32::try_from(num_txs).unwrap_or(u32::MAX),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.txs.is_empty()
    }
}
