//! Adapters for transaction history
//!
//! Implementations of the outbound ports.

pub mod memory;

pub use memory::InMemoryHistoryProvider;
