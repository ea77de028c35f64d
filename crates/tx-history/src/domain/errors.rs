//! Error types for transaction history
//!
//! Sorting itself cannot fail. Errors come from fetching pages and from
//! configuration.

use thiserror::Error;

/// Errors surfaced by the history service
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Indexer request for one address failed; the whole history fails with it
    #[error("History request failed for {address}: {source}")]
    Provider {
        address: String,
        #[source]
        source: ProviderError,
    },

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// History JSON could not be decoded
    #[error("Failed to decode history: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors from a history provider (the indexer side)
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Unknown address: {0}")]
    UnknownAddress(String),

    #[error("Page size exceeded: {size} > {max}")]
    PageSizeTooLarge { size: usize, max: usize },

    #[error("Indexer unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProviderError::PageSizeTooLarge { size: 500, max: 200 };
        assert_eq!(err.to_string(), "Page size exceeded: 500 > 200");
    }

    #[test]
    fn test_provider_error_wrapped_with_address() {
        let err = HistoryError::Provider {
            address: "ecash:qq9h6d0a5q65fgywv4ry64x04ep906mdku8f0gxfgx".to_string(),
            source: ProviderError::Unavailable("connection refused".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "History request failed for ecash:qq9h6d0a5q65fgywv4ry64x04ep906mdku8f0gxfgx: Indexer unavailable: connection refused"
        );
    }

    #[test]
    fn test_decode_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: HistoryError = serde_err.into();
        assert!(matches!(err, HistoryError::Decode(_)));
    }
}
