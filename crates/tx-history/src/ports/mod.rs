//! Ports module for transaction history
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::TxHistoryApi;
pub use outbound::HistoryProvider;
