//! End-to-end tests for the market summarizer pipeline:
//! lookup → fetch → format → summarize, with mocked services.

use moai::{
    market::{DESCRIPTION_LIMIT, DESCRIPTION_TITLE, PRICE_TITLE},
    summarizer::{DISCLAIMER, FAILURE_MESSAGE},
    testing::{MockChatModel, MockMarketSource},
    Coin, FetchFailure, MarketDataFetcher, MarketError, TextSummarizer,
};

/// Canned data for every supported coin.
fn full_source(description: Option<&str>) -> MockMarketSource {
    Coin::ALL.into_iter().fold(MockMarketSource::new(), |source, coin| {
        source
            .with_price(coin.api_id(), 65000.12, 2.35, 1_700_000_000)
            .with_details(coin.api_id(), 1, 1.28e12, 3.5e10, description)
    })
}

#[tokio::test]
async fn test_bitcoin_price_block() {
    let fetcher = MarketDataFetcher::new(full_source(Some("Bitcoin is digital money.")));

    let items = fetcher.collect("bitcoin").await.unwrap();

    assert_eq!(items[0].title, PRICE_TITLE);
    assert!(items[0].content.contains("65000.12"));
    assert!(items[0].content.contains("2.35%"));
}

#[tokio::test]
async fn test_unsupported_coin_makes_no_requests() {
    let source = full_source(None);
    let fetcher = MarketDataFetcher::new(source.clone());

    let err = fetcher.collect("dogecoin").await.unwrap_err();

    match err {
        MarketError::UnsupportedCoin(e) => assert_eq!(e.name, "dogecoin"),
        other => panic!("expected UnsupportedCoin, got {other:?}"),
    }
    assert_eq!(source.call_count(), 0);
}

#[tokio::test]
async fn test_every_supported_coin_yields_two_or_three_items() {
    for description in [None, Some(""), Some("About this coin.")] {
        let fetcher = MarketDataFetcher::new(full_source(description));
        let expected = if description.is_some_and(|d| !d.is_empty()) { 3 } else { 2 };

        for coin in Coin::ALL {
            let items = fetcher.collect(coin.name()).await.unwrap();
            assert_eq!(items.len(), expected, "{coin} with {description:?}");
        }
    }
}

#[tokio::test]
async fn test_avalanche_requests_use_canonical_id() {
    let source = full_source(None);
    let fetcher = MarketDataFetcher::new(source.clone());

    fetcher.collect("avalanche").await.unwrap();

    assert_eq!(
        source.calls(),
        vec!["simple/price:avalanche-2", "coins:avalanche-2"]
    );
}

#[tokio::test]
async fn test_long_description_is_truncated() {
    let long = "x".repeat(DESCRIPTION_LIMIT + 250);
    let fetcher = MarketDataFetcher::new(full_source(Some(&long)));

    let items = fetcher.collect("cardano").await.unwrap();

    assert_eq!(items[2].title, DESCRIPTION_TITLE);
    assert_eq!(items[2].content, format!("{}...", "x".repeat(DESCRIPTION_LIMIT)));
}

#[tokio::test]
async fn test_price_failure_stops_before_details() {
    let source = MockMarketSource::new().with_details("solana", 5, 1.0, 1.0, None);
    let fetcher = MarketDataFetcher::new(source.clone());

    let err = fetcher.collect("solana").await.unwrap_err();

    assert!(matches!(err, MarketError::Fetch(FetchFailure::Price(_))));
    assert_eq!(source.calls(), vec!["simple/price:solana"]);
}

#[tokio::test]
async fn test_details_failure_is_fetch_failure() {
    let source = MockMarketSource::new().with_price("polkadot", 7.1, -0.4, 1_700_000_000);
    let fetcher = MarketDataFetcher::new(source);

    let err = fetcher.collect("polkadot").await.unwrap_err();

    assert!(matches!(err, MarketError::Fetch(FetchFailure::Details(_))));
}

#[tokio::test]
async fn test_out_of_range_timestamp_is_fetch_failure() {
    let source = MockMarketSource::new()
        .with_price("cardano", 0.45, 1.2, i64::MAX)
        .with_details("cardano", 9, 1.6e10, 3.1e8, None);
    let fetcher = MarketDataFetcher::new(source);

    let err = fetcher.collect("cardano").await.unwrap_err();

    assert!(matches!(
        err,
        MarketError::Fetch(FetchFailure::InvalidTimestamp(i64::MAX))
    ));
}

#[tokio::test]
async fn test_collected_items_are_summarized() {
    let fetcher = MarketDataFetcher::new(full_source(Some("Ethereum runs smart contracts.")));
    let model = MockChatModel::replying("ETH yatay seyrediyor.");
    let summarizer = TextSummarizer::new(model.clone());

    let items = fetcher.collect("ethereum").await.unwrap();
    let summary = summarizer.summarize(&items).await;

    assert_eq!(summary, format!("ETH yatay seyrediyor.{}", DISCLAIMER));
    let user = &model.calls()[0].user;
    assert_eq!(user.matches("Başlık: ").count(), 3);
    assert!(user.contains("İçerik: Ethereum runs smart contracts."));
}

#[tokio::test]
async fn test_model_failure_still_prints_message() {
    let fetcher = MarketDataFetcher::new(full_source(None));
    let summarizer = TextSummarizer::new(MockChatModel::failing());

    let items = fetcher.collect("arbitrum").await.unwrap();

    assert_eq!(summarizer.summarize(&items).await, FAILURE_MESSAGE);
}
