//! Shared fixtures for the integration suites.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;
use quantrix::config::{MonitorConfig, WatchlistEntry};
use quantrix::models::{Bar, WatchlistCategory};
use quantrix::services::MarketDataProvider;
use quantrix::MonitorError;

pub fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Days::new(offset)
}

/// Rising daily bars with constant volume.
pub fn uptrend_bars(count: usize) -> Vec<Bar> {
    (0..count)
        .map(|i| {
            let price = 100.0 + i as f64 * 0.5;
            Bar::new(
                day(i as u64),
                price,
                price + 0.3,
                price - 0.2,
                price,
                1000.0,
            )
        })
        .collect()
}

/// Flat daily bars with constant volume.
pub fn flat_bars(count: usize) -> Vec<Bar> {
    (0..count)
        .map(|i| Bar::new(day(i as u64), 100.0, 100.1, 99.9, 100.0, 1000.0))
        .collect()
}

/// A scratch directory under the system temp dir, recreated per test.
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("quantrix-test-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

pub enum StubResponse {
    Bars(Vec<Bar>),
    Unavailable(String),
}

/// In-memory provider keyed by ticker.
pub struct StubProvider {
    responses: HashMap<String, StubResponse>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, ticker: &str, bars: Vec<Bar>) -> Self {
        self.responses
            .insert(ticker.to_string(), StubResponse::Bars(bars));
        self
    }

    pub fn with_failure(mut self, ticker: &str, reason: &str) -> Self {
        self.responses.insert(
            ticker.to_string(),
            StubResponse::Unavailable(reason.to_string()),
        );
        self
    }
}

#[async_trait]
impl MarketDataProvider for StubProvider {
    async fn fetch_history(
        &self,
        ticker: &str,
        _lookback_days: u32,
    ) -> Result<Vec<Bar>, MonitorError> {
        match self.responses.get(ticker) {
            Some(StubResponse::Bars(bars)) => Ok(bars.clone()),
            Some(StubResponse::Unavailable(reason)) => {
                Err(MonitorError::data_unavailable(ticker, reason))
            }
            None => Err(MonitorError::data_unavailable(ticker, "no stub configured")),
        }
    }
}

/// Three-symbol config pointed at nothing on disk.
pub fn test_config() -> MonitorConfig {
    MonitorConfig {
        watchlist: vec![
            WatchlistEntry::new("GOOD", WatchlistCategory::BigTech),
            WatchlistEntry::new("SHORT", WatchlistCategory::QuantumPurePlay),
            WatchlistEntry::new("BAD", WatchlistCategory::Defense),
        ],
        concurrency: 4,
        ..MonitorConfig::default()
    }
}
