//! Integration tests for the dashboard HTTP surface.

use std::sync::Arc;
use std::time::Instant;

use axum_test::TestServer;
use quantrix::core::http::{create_router, AppState, HealthStatus};
use quantrix::core::scanner::Scanner;
use quantrix::metrics::Metrics;
use quantrix::store::ReportStore;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::test_utils::{scratch_dir, test_config, uptrend_bars, StubProvider};

fn test_server(store: Arc<ReportStore>) -> TestServer {
    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics: Arc::new(Metrics::new().expect("metrics registry")),
        start_time: Arc::new(Instant::now()),
        store,
    };
    let router = create_router(state, scratch_dir("dashboard-static"));
    TestServer::new(router).expect("test server")
}

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let server = test_server(Arc::new(ReportStore::new(scratch_dir("dash-health"))));
    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "quantrix-monitor");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let server = test_server(Arc::new(ReportStore::new(scratch_dir("dash-metrics"))));
    let response = server.get("/metrics").await;
    response.assert_status_ok();
    assert!(
        response.text().contains("http_requests_total"),
        "expected Prometheus metrics output"
    );
}

#[tokio::test]
async fn report_endpoint_is_404_before_first_scan() {
    let server = test_server(Arc::new(ReportStore::new(scratch_dir("dash-empty"))));
    let response = server.get("/api/report").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn report_endpoint_serves_persisted_scan() {
    let store = Arc::new(ReportStore::new(scratch_dir("dash-report")));

    let provider = StubProvider::new().with_bars("GOOD", uptrend_bars(250));
    let mut config = test_config();
    config.watchlist.truncate(1);
    let scanner = Scanner::new(Arc::new(provider), config).with_store(store.clone());
    scanner.run_scan().await.expect("scan completes");

    let server = test_server(store);
    let response = server.get("/api/report").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["strong_buy_count"], 1);
    assert_eq!(body["tickers"][0]["ticker"], "GOOD");
    assert_eq!(body["tickers"][0]["score"]["classification"], "STRONG_BUY");
}
