//! Algorithms for transaction history
//!
//! - Flattening per-address history pages into one list
//! - Chronological sort (unconfirmed first, newest first) and trim

pub mod flatten;
pub mod sort;

pub use flatten::flatten_tx_history;
pub use sort::{sort_and_trim_tx_history, sort_tx_history};
