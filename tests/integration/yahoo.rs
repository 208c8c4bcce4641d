//! Integration tests for the Yahoo chart provider against a mocked server.

use quantrix::services::{MarketDataProvider, YahooFinanceProvider};
use quantrix::MonitorError;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn chart_body() -> serde_json::Value {
    json!({
        "chart": {
            "result": [{
                "meta": { "symbol": "MSFT" },
                "timestamp": [1735689600, 1735776000, 1735862400, 1735948800],
                "indicators": {
                    "quote": [{
                        "open":   [100.0, 101.0, null,  103.0],
                        "high":   [101.0, 102.0, 103.0, 104.0],
                        "low":    [99.0,  100.0, 101.0, 102.0],
                        "close":  [100.5, 101.5, 102.5, 103.5],
                        "volume": [1000.0, 1100.0, 1200.0, 1300.0]
                    }]
                }
            }],
            "error": null
        }
    })
}

#[tokio::test]
async fn fetches_and_parses_daily_bars() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/MSFT"))
        .and(query_param("interval", "1d"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body()))
        .mount(&server)
        .await;

    let provider = YahooFinanceProvider::with_base_url(&server.uri()).unwrap();
    let bars = provider.fetch_history("MSFT", 30).await.unwrap();

    // The slot with a null open is skipped; the rest come back in order.
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].close, 100.5);
    assert_eq!(bars[2].close, 103.5);
    assert!(bars[0].date < bars[1].date);
    assert!(bars[1].date < bars[2].date);
}

#[tokio::test]
async fn api_error_payload_is_data_unavailable_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/NOPE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found" }
            }
        })))
        .mount(&server)
        .await;

    let provider = YahooFinanceProvider::with_base_url(&server.uri()).unwrap();
    let err = provider.fetch_history("NOPE", 30).await.unwrap_err();

    match err {
        MonitorError::DataUnavailable { ticker, source } => {
            assert_eq!(ticker, "NOPE");
            assert!(source.contains("Not Found"));
        }
        other => panic!("expected DataUnavailable, got {:?}", other),
    }

    // A definitive payload must not be retried.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}

#[tokio::test]
async fn empty_result_is_data_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/EMPTY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": { "result": [], "error": null }
        })))
        .mount(&server)
        .await;

    let provider = YahooFinanceProvider::with_base_url(&server.uri()).unwrap();
    assert!(provider.fetch_history("EMPTY", 30).await.is_err());
}
