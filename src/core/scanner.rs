//! Batch orchestrator: fetch and evaluate the whole watchlist.
//!
//! Per-ticker evaluation is pure and independent, so the batch fans out
//! concurrently with a bounded `buffer_unordered`. A failure in one
//! ticker's pipeline never touches another's: it becomes an error-marked
//! result with all-null indicators and a zero score.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::config::{MonitorConfig, WatchlistEntry};
use crate::metrics::Metrics;
use crate::models::report::{TickerResult, WatchReport};
use crate::models::series::PriceSeries;
use crate::services::market_data::MarketDataProvider;
use crate::signals::engine::{SignalEngine, MIN_BARS};
use crate::store::{ReportStore, StoreError};

pub struct Scanner {
    provider: Arc<dyn MarketDataProvider>,
    config: MonitorConfig,
    store: Option<Arc<ReportStore>>,
    metrics: Option<Arc<Metrics>>,
}

impl Scanner {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: MonitorConfig) -> Self {
        Self {
            provider,
            config,
            store: None,
            metrics: None,
        }
    }

    pub fn with_store(mut self, store: Arc<ReportStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Run one full watchlist scan, persist the report if a store is
    /// attached, and return it.
    pub async fn run_scan(&self) -> Result<WatchReport, StoreError> {
        let start = Instant::now();
        info!(
            tickers = self.config.watchlist.len(),
            concurrency = self.config.concurrency,
            "starting watchlist scan"
        );

        let config = Arc::new(self.config.clone());
        let mut indexed: Vec<(usize, TickerResult)> =
            stream::iter(self.config.watchlist.iter().cloned().enumerate())
                .map(|(index, entry)| {
                    let provider = self.provider.clone();
                    let config = config.clone();
                    async move {
                        let result = evaluate_entry(provider.as_ref(), &entry, &config).await;
                        (index, result)
                    }
                })
                .buffer_unordered(self.config.concurrency.max(1))
                .collect()
                .await;

        // Completion order is arbitrary; report order follows the watchlist.
        indexed.sort_by_key(|(index, _)| *index);
        let results: Vec<TickerResult> = indexed.into_iter().map(|(_, result)| result).collect();

        let failures = results.iter().filter(|r| r.error.is_some()).count();
        let report = WatchReport::assemble(results);

        self.log_strong_buys(&report);

        if let Some(ref metrics) = self.metrics {
            metrics.scans_total.inc();
            metrics
                .tickers_evaluated_total
                .inc_by(report.tickers.len() as u64);
            metrics.ticker_failures_total.inc_by(failures as u64);
            metrics.strong_buy_signals.set(report.strong_buy_count as f64);
            metrics
                .scan_duration_seconds
                .observe(start.elapsed().as_secs_f64());
            metrics
                .last_scan_timestamp
                .set(Utc::now().timestamp() as f64);
        }

        if let Some(ref store) = self.store {
            let path = store.write_latest(&report).await?;
            store.append_history(&report).await?;
            info!(path = %path.display(), "report persisted");
        }

        info!(
            tickers = report.tickers.len(),
            failures = failures,
            strong_buys = report.strong_buy_count,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "watchlist scan complete"
        );
        Ok(report)
    }

    fn log_strong_buys(&self, report: &WatchReport) {
        let mut strong: Vec<&TickerResult> =
            report.tickers.iter().filter(|t| t.is_strong_buy()).collect();
        if strong.is_empty() {
            return;
        }
        strong.sort_by(|a, b| {
            b.score
                .total
                .partial_cmp(&a.score.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for result in strong {
            info!(
                ticker = %result.ticker,
                category = %result.category,
                score = result.score.total,
                price = result.indicators.current_price,
                "strong buy signal"
            );
        }
    }
}

/// Fetch, preprocess, and evaluate one watchlist entry. Any failure folds
/// into an error-marked result for that ticker alone.
async fn evaluate_entry(
    provider: &dyn MarketDataProvider,
    entry: &WatchlistEntry,
    config: &MonitorConfig,
) -> TickerResult {
    let bars = match provider
        .fetch_history(&entry.ticker, config.lookback_days)
        .await
    {
        Ok(bars) => bars,
        Err(e) => {
            warn!(ticker = %entry.ticker, error = %e, "fetch failed, marking result");
            return TickerResult::failed(&entry.ticker, entry.category, &e);
        }
    };

    let series = match PriceSeries::from_bars(&entry.ticker, &bars, MIN_BARS) {
        Ok(series) => series,
        Err(e) => {
            warn!(ticker = %entry.ticker, error = %e, "unusable history, marking result");
            return TickerResult::failed(&entry.ticker, entry.category, &e);
        }
    };

    if series.rejected() > 0 {
        debug!(
            ticker = %entry.ticker,
            rejected = series.rejected(),
            kept = series.len(),
            "series cleaned"
        );
    }

    SignalEngine::evaluate_ticker(&entry.ticker, entry.category, &series, &config.engine)
}
