//! # Wallet History End-to-End
//!
//! Drives `TxHistoryService` over the in-memory provider loaded from a
//! two-address wallet fixture.

use tx_history::{
    HistoryConfig, HistoryError, InMemoryHistoryProvider, ProviderError, TxHistoryApi,
    TxHistoryService,
};

const FIRST_ADDRESS: &str = "ecash:qqa9lv3kjd8vq7952p7rq0f6lkpqvlu0cydvxtd70g";
const SECOND_ADDRESS: &str = "ecash:qzqe3z5j4w6r8dpm7tnu4tqjk0ns9rfhsu6j2jc8kz";

fn wallet_provider() -> InMemoryHistoryProvider {
    InMemoryHistoryProvider::from_json(include_str!("fixtures/wallet_pages.json"))
        .expect("fixture decodes")
}

fn wallet_addresses() -> Vec<String> {
    vec![FIRST_ADDRESS.to_string(), SECOND_ADDRESS.to_string()]
}

#[tokio::test]
async fn test_wallet_history_merges_addresses() {
    let service = TxHistoryService::new(wallet_provider());

    let history = service.get_history(&wallet_addresses()).await.unwrap();
    let txids: Vec<_> = history.iter().map(|tx| tx.txid.as_str()).collect();

    assert_eq!(
        txids,
        vec![
            // mempool tx of the first address
            "601e8020143b5bd41fa2356cc78fc625d14e0c417d12307fe89dc6c524a4f40f",
            // both addresses in block 758570, later first-seen first
            "bbabb697499be861810de2f81772da76f4da69c176e9a711425f1d3c0fbaf9ff",
            "8e6098cec2a4803780659f1fd9788c45e45a7bdde1c0986bef3ad136d4aca878",
            "e12c9ac8336cf1a7a2bb47bb9543a76d86431bc2b776346a2ac705f8f09b4d94",
            "c47f8318d877e6a9a271df57759eab927ed843f68e2328b0455f9cb694db3fe2",
        ]
    );
}

#[tokio::test]
async fn test_wallet_history_trimmed_to_rendered_count() {
    let config = HistoryConfig {
        tx_history_count: 2,
        ..Default::default()
    };
    let service = TxHistoryService::with_config(wallet_provider(), config).unwrap();

    let history = service.get_history(&wallet_addresses()).await.unwrap();

    assert_eq!(history.len(), 2);
    assert!(!history[0].is_confirmed());
    assert_eq!(history[1].height(), Some(758_570));
}

#[tokio::test]
async fn test_one_failing_address_fails_wallet_history() {
    let provider = wallet_provider().with_failing_address(SECOND_ADDRESS);
    let service = TxHistoryService::new(provider);

    let err = service
        .get_history(&wallet_addresses())
        .await
        .unwrap_err();

    match err {
        HistoryError::Provider { address, source } => {
            assert_eq!(address, SECOND_ADDRESS);
            assert!(matches!(source, ProviderError::Unavailable(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_unknown_address_fails_wallet_history() {
    let service = TxHistoryService::new(wallet_provider());
    let addresses = vec![FIRST_ADDRESS.to_string(), "ecash:unknown".to_string()];

    let result = service.get_history(&addresses).await;

    assert!(matches!(
        result,
        Err(HistoryError::Provider {
            source: ProviderError::UnknownAddress(_),
            ..
        })
    ));
}

#[tokio::test]
async fn test_history_page_uses_configured_page_size() {
    let config = HistoryConfig {
        tx_history_page_size: 2,
        ..Default::default()
    };
    let service = TxHistoryService::with_config(wallet_provider(), config).unwrap();

    let first = service.get_history_page(FIRST_ADDRESS, 0).await.unwrap();
    let second = service.get_history_page(FIRST_ADDRESS, 1).await.unwrap();

    assert_eq!(first.txs.len(), 2);
    assert_eq!(second.txs.len(), 1);
    assert_eq!(first.num_pages, 2);
    assert_eq!(first.num_txs, 3);
}

#[tokio::test]
async fn test_largest_accepted_page_size_is_served() {
    let config = HistoryConfig {
        tx_history_page_size: tx_history::config::INDEXER_MAX_PAGE_SIZE,
        ..Default::default()
    };
    let service = TxHistoryService::with_config(wallet_provider(), config).unwrap();

    let history = service.get_history(&wallet_addresses()).await.unwrap();

    assert_eq!(history.len(), 5);
}

#[test]
fn test_page_size_above_indexer_cap_rejected_up_front() {
    let config: HistoryConfig =
        serde_json::from_str(r#"{ "tx_history_page_size": 300, "max_page_size": 500 }"#).unwrap();

    let result = TxHistoryService::with_config(wallet_provider(), config);

    assert!(matches!(result, Err(HistoryError::InvalidConfig(_))));
}
