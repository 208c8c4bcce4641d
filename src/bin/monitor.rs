//! Quantrix Monitor
//!
//! Long-running scheduled scanner: runs one scan immediately, then keeps
//! scanning on the configured interval until interrupted.

use std::sync::Arc;

use dotenvy::dotenv;
use quantrix::config::MonitorConfig;
use quantrix::core::scanner::Scanner;
use quantrix::core::scheduler::ScanScheduler;
use quantrix::logging;
use quantrix::metrics::Metrics;
use quantrix::services::yahoo::YahooFinanceProvider;
use quantrix::store::ReportStore;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = MonitorConfig::from_env();
    let env = quantrix::config::get_environment();
    info!("Starting Quantrix Monitor");
    info!(environment = %env, "Environment");
    info!(
        tickers = config.watchlist.len(),
        interval = config.scan_interval_seconds,
        output = %config.output_dir.display(),
        "watchlist scan every {}s",
        config.scan_interval_seconds
    );

    let interval = config.scan_interval_seconds;
    let metrics = Arc::new(Metrics::new()?);
    let provider = Arc::new(YahooFinanceProvider::new());
    let store = Arc::new(ReportStore::new(config.output_dir.clone()));

    let scanner = Arc::new(
        Scanner::new(provider, config)
            .with_store(store)
            .with_metrics(metrics),
    );

    // Initial scan so the dashboard has data before the first tick.
    if let Err(e) = scanner.run_scan().await {
        warn!(error = %e, "initial scan failed to persist");
    }

    let scheduler = ScanScheduler::new(scanner, interval)
        .map_err(|e| format!("Failed to create scheduler: {}", e))?;
    scheduler.start().await;

    info!("Monitor started, waiting for shutdown signal...");
    signal::ctrl_c().await?;
    info!("Shutting down monitor...");
    scheduler.stop().await;
    info!("Monitor stopped");

    Ok(())
}
