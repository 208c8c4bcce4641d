//! Environment helpers and the immutable runtime configuration.
//!
//! All tunables are carried in plain config values handed to the engine at
//! call time; nothing in the evaluation path reads globals.

use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::models::report::WatchlistCategory;

/// Deployment environment, used to pick the log formatter.
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// One monitored symbol with its descriptive grouping.
#[derive(Debug, Clone)]
pub struct WatchlistEntry {
    pub ticker: String,
    pub category: WatchlistCategory,
}

impl WatchlistEntry {
    pub fn new(ticker: &str, category: WatchlistCategory) -> Self {
        Self {
            ticker: ticker.to_string(),
            category,
        }
    }
}

/// Lookback windows for the indicator library.
#[derive(Debug, Clone)]
pub struct IndicatorConfig {
    pub sma_short: usize,
    pub sma_mid: usize,
    pub sma_long: usize,
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bb_period: usize,
    pub bb_std_dev: f64,
    pub volume_period: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_short: 20,
            sma_mid: 50,
            sma_long: 200,
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bb_period: 20,
            bb_std_dev: 2.0,
            volume_period: 20,
        }
    }
}

/// Rule thresholds and point values for the signal scorer.
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub rsi_momentum_low: f64,
    pub rsi_momentum_high: f64,
    pub rsi_oversold: f64,
    pub lower_band_threshold: f64,
    pub volume_ratio_threshold: f64,
    pub uptrend_points: f64,
    pub long_term_points: f64,
    pub momentum_points: f64,
    pub oversold_points: f64,
    pub macd_points: f64,
    pub lower_band_points: f64,
    pub volume_points: f64,
    pub strong_buy_threshold: f64,
    pub watch_threshold: f64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            rsi_momentum_low: 50.0,
            rsi_momentum_high: 70.0,
            rsi_oversold: 30.0,
            lower_band_threshold: 0.20,
            volume_ratio_threshold: 1.5,
            uptrend_points: 1.0,
            long_term_points: 1.0,
            momentum_points: 1.0,
            oversold_points: 1.5,
            macd_points: 1.0,
            lower_band_points: 1.5,
            volume_points: 1.0,
            strong_buy_threshold: 3.0,
            watch_threshold: 1.5,
        }
    }
}

/// Everything the pure evaluation path needs, passed in per call.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub indicators: IndicatorConfig,
    pub scoring: ScoreConfig,
}

/// Full monitor configuration: watchlist, engine tunables, and the
/// peripheral knobs (lookback, interval, output location).
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    pub watchlist: Vec<WatchlistEntry>,
    pub engine: EngineConfig,
    pub lookback_days: u32,
    pub scan_interval_seconds: u64,
    pub concurrency: usize,
    pub output_dir: PathBuf,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            watchlist: default_watchlist(),
            engine: EngineConfig::default(),
            lookback_days: 365,
            scan_interval_seconds: 3600,
            concurrency: 4,
            output_dir: PathBuf::from("data"),
        }
    }
}

impl MonitorConfig {
    /// Build the configuration from the environment, falling back to
    /// defaults field by field.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.lookback_days = env_parse("LOOKBACK_DAYS", config.lookback_days);
        config.scan_interval_seconds =
            env_parse("SCAN_INTERVAL_SECONDS", config.scan_interval_seconds);
        config.concurrency = env_parse("SCAN_CONCURRENCY", config.concurrency).max(1);
        if let Ok(dir) = std::env::var("OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Ok(raw) = std::env::var("WATCHLIST") {
            match parse_watchlist(&raw) {
                Ok(entries) if !entries.is_empty() => config.watchlist = entries,
                Ok(_) => warn!("WATCHLIST is empty, keeping default watchlist"),
                Err(e) => warn!(error = %e, "invalid WATCHLIST, keeping default watchlist"),
            }
        }
        config
    }
}

/// The curated research watchlist the monitor ships with.
pub fn default_watchlist() -> Vec<WatchlistEntry> {
    use WatchlistCategory::*;
    [
        ("IONQ", QuantumPurePlay),
        ("RGTI", QuantumPurePlay),
        ("QUBT", QuantumPurePlay),
        ("IBM", BigTech),
        ("GOOGL", BigTech),
        ("MSFT", BigTech),
        ("AMZN", BigTech),
        ("HON", Defense),
        ("LMT", Defense),
        ("FIX", AiInfrastructure),
        ("VRT", AiInfrastructure),
        ("ETN", AiInfrastructure),
        ("HDSN", AiInfrastructure),
    ]
    .into_iter()
    .map(|(ticker, category)| WatchlistEntry::new(ticker, category))
    .collect()
}

/// Parse a `TICKER=CATEGORY,TICKER=CATEGORY,...` watchlist override.
pub fn parse_watchlist(raw: &str) -> Result<Vec<WatchlistEntry>, String> {
    let mut entries = Vec::new();
    for item in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (ticker, category) = item
            .split_once('=')
            .ok_or_else(|| format!("expected TICKER=CATEGORY, got '{}'", item))?;
        let category = category.trim().parse::<WatchlistCategory>()?;
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(format!("empty ticker in '{}'", item));
        }
        entries.push(WatchlistEntry::new(ticker, category));
    }
    Ok(entries)
}
