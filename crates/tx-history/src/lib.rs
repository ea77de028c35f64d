//! # Wallet Transaction History
//!
//! Turns per-address indexer history pages into the single list a wallet
//! displays: newest activity first, unconfirmed transactions on top.
//!
//! ## Architecture
//!
//! - **Domain**: `ChronikTx`, `BlockMetadata`, `TxStatus`, `TxHistoryPage`, invariants
//! - **Algorithms**: page flattening, chronological sort and trim
//! - **Ports**: Inbound (`TxHistoryApi`) and Outbound (`HistoryProvider`)
//! - **Application**: `TxHistoryService` orchestration
//! - **Adapters**: `InMemoryHistoryProvider` for fixtures and offline use
//!
//! ## Ordering
//!
//! | Rank | Rule |
//! |------|------|
//! | 1 | Unconfirmed before confirmed |
//! | 2 | Unconfirmed: `timeFirstSeen` descending (`0` = unknown, last) |
//! | 3 | Confirmed: block height descending, then `timeFirstSeen` descending |
//! | 4 | Exact ties keep input order |
//!
//! ```
//! use tx_history::{sort_tx_history, ChronikTx};
//!
//! let history = sort_tx_history(&[
//!     ChronikTx::confirmed("mined", 758_570, 1_663_956_316),
//!     ChronikTx::unconfirmed("mempool", 1_663_957_661),
//! ]);
//! assert_eq!(history[0].txid, "mempool");
//! ```

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

pub use adapters::InMemoryHistoryProvider;
pub use algorithms::{flatten_tx_history, sort_and_trim_tx_history, sort_tx_history};
pub use application::TxHistoryService;
pub use config::HistoryConfig;
pub use domain::entities::*;
pub use domain::errors::{HistoryError, ProviderError};
pub use domain::value_objects::*;
pub use ports::inbound::TxHistoryApi;
pub use ports::outbound::HistoryProvider;
pub use telemetry::{env_filter, init_tracing, TelemetryConfig, TelemetryError};
