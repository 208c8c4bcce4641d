//! Quantrix Scan
//!
//! Runs a single watchlist scan and writes the report, then exits.
//! Useful from cron or for checking the pipeline by hand.

use std::sync::Arc;

use dotenvy::dotenv;
use quantrix::config::MonitorConfig;
use quantrix::core::scanner::Scanner;
use quantrix::logging;
use quantrix::services::yahoo::YahooFinanceProvider;
use quantrix::store::ReportStore;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = MonitorConfig::from_env();
    let env = quantrix::config::get_environment();
    info!("Starting Quantrix one-shot scan");
    info!(environment = %env, tickers = config.watchlist.len(), "Environment");

    let provider = Arc::new(YahooFinanceProvider::new());
    let store = Arc::new(ReportStore::new(config.output_dir.clone()));

    let scanner = Scanner::new(provider, config).with_store(store);
    let report = scanner.run_scan().await?;

    info!(
        tickers = report.tickers.len(),
        strong_buys = report.strong_buy_count,
        "scan finished"
    );
    Ok(())
}
