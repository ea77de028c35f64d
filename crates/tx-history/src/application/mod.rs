//! Application layer for transaction history

pub mod service;

pub use service::TxHistoryService;
