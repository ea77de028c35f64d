//! History page flattening
//!
//! A wallet has several addresses and the indexer answers per address.
//! Flattening concatenates the pages in order; a tx that touches two wallet
//! addresses shows up once per page.

use crate::domain::entities::{ChronikTx, TxHistoryPage};

/// Concatenate the txs of every page, in page order.
pub fn flatten_tx_history(pages: &[TxHistoryPage]) -> Vec<ChronikTx> {
    let total: usize = pages.iter().map(|p| p.txs.len()).sum();
    let mut flat = Vec::with_capacity(total);

    for page in pages {
        flat.extend(page.txs.iter().cloned());
    }

    flat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_preserves_page_order() {
        let pages = vec![
            TxHistoryPage::new(vec![ChronikTx::new("a1"), ChronikTx::new("a2")]),
            TxHistoryPage::new(vec![]),
            TxHistoryPage::new(vec![ChronikTx::new("b1")]),
        ];

        let flat = flatten_tx_history(&pages);
        let txids: Vec<_> = flat.iter().map(|tx| tx.txid.as_str()).collect();

        assert_eq!(txids, vec!["a1", "a2", "b1"]);
    }

    #[test]
    fn test_flatten_keeps_shared_tx_twice() {
        let shared = ChronikTx::unconfirmed("shared", 100);
        let pages = vec![
            TxHistoryPage::new(vec![shared.clone()]),
            TxHistoryPage::new(vec![shared]),
        ];

        assert_eq!(flatten_tx_history(&pages).len(), 2);
    }

    #[test]
    fn test_flatten_no_pages() {
        assert!(flatten_tx_history(&[]).is_empty());
    }
}
