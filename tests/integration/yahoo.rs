//! Integration tests for the Yahoo Finance chart client.

use std::time::Duration;

use crossover_alert::services::market_data::{MarketDataError, MarketDataProvider};
use crossover_alert::services::yahoo::{RetryPolicy, YahooMarketDataProvider};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::fixtures::BUY_SERIES;
use crate::test_utils::{chart_body, mock_chart, mock_unknown_symbol};

fn fast_retries() -> RetryPolicy {
    RetryPolicy {
        max_retries: 3,
        min_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
    }
}

async fn provider_for(server: &MockServer) -> YahooMarketDataProvider {
    YahooMarketDataProvider::with_base_url(server.uri())
        .expect("client builds")
        .with_retry_policy(fast_retries())
}

#[tokio::test]
async fn fetches_daily_candles_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/BTC-USD"))
        .and(query_param("range", "300d"))
        .and(query_param("interval", "1d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(
            "BTC-USD",
            &BUY_SERIES.iter().copied().map(Some).collect::<Vec<_>>(),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let candles = provider.get_daily_candles("BTC-USD", 300).await.expect("candles");

    assert_eq!(candles.len(), BUY_SERIES.len());
    assert_eq!(candles.last().unwrap().close, 157.5);
    assert!(candles.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}

#[tokio::test]
async fn drops_bars_without_a_close() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/ETH-USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body(
            "ETH-USD",
            &[Some(10.0), None, Some(12.0)],
        )))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let candles = provider.get_daily_candles("ETH-USD", 300).await.expect("candles");
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    assert_eq!(closes, vec![10.0, 12.0]);
}

#[tokio::test]
async fn unknown_symbol_is_empty_not_an_error() {
    let server = MockServer::start().await;
    mock_unknown_symbol(&server, "ZZZ-USD").await;

    let provider = provider_for(&server).await;
    let candles = provider.get_daily_candles("ZZZ-USD", 300).await.expect("empty result");
    assert!(candles.is_empty());
}

#[tokio::test]
async fn not_found_error_code_with_ok_status_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/OLD-USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(crate::test_utils::not_found_body()))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    assert!(provider.get_daily_candles("OLD-USD", 300).await.unwrap().is_empty());
}

#[tokio::test]
async fn provider_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/BTC-USD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": {
                "result": null,
                "error": { "code": "Bad Request", "description": "Invalid input" }
            }
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let err = provider.get_daily_candles("BTC-USD", 300).await.unwrap_err();
    assert!(matches!(err, MarketDataError::Provider { ref code, .. } if code == "Bad Request"));
}

#[tokio::test]
async fn retries_transient_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/SOL-USD"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    mock_chart(&server, "SOL-USD", &[1.0, 2.0, 3.0]).await;

    let provider = provider_for(&server).await;
    let candles = provider.get_daily_candles("SOL-USD", 300).await.expect("recovered");
    assert_eq!(candles.len(), 3);
}

#[tokio::test]
async fn gives_up_after_max_retries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/SOL-USD"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .expect(4)
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let err = provider.get_daily_candles("SOL-USD", 300).await.unwrap_err();
    assert!(matches!(err, MarketDataError::Status { status: 500, .. }));
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/ADA-USD"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let err = provider.get_daily_candles("ADA-USD", 300).await.unwrap_err();
    assert!(!err.is_transient());
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/XRP-USD"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>consent</html>"))
        .mount(&server)
        .await;

    let provider = provider_for(&server).await;
    let err = provider.get_daily_candles("XRP-USD", 300).await.unwrap_err();
    assert!(matches!(err, MarketDataError::Decode(_)));
}
