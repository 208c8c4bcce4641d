//! Prometheus metrics for scans and the HTTP layer.

use prometheus::{
    Encoder, Gauge, Histogram, HistogramOpts, IntCounter, Opts, Registry, TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub scans_total: IntCounter,
    pub tickers_evaluated_total: IntCounter,
    pub ticker_failures_total: IntCounter,
    pub strong_buy_signals: Gauge,
    pub scan_duration_seconds: Histogram,
    pub last_scan_timestamp: Gauge,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = IntCounter::with_opts(Opts::new(
            "http_requests_total",
            "Total HTTP requests served",
        ))?;
        let scans_total =
            IntCounter::with_opts(Opts::new("scans_total", "Total watchlist scans completed"))?;
        let tickers_evaluated_total = IntCounter::with_opts(Opts::new(
            "tickers_evaluated_total",
            "Total per-ticker evaluations, including failed ones",
        ))?;
        let ticker_failures_total = IntCounter::with_opts(Opts::new(
            "ticker_failures_total",
            "Ticker evaluations that produced an error-marked result",
        ))?;
        let strong_buy_signals = Gauge::with_opts(Opts::new(
            "strong_buy_signals",
            "Strong-buy count in the most recent report",
        ))?;
        let scan_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "scan_duration_seconds",
            "Wall-clock duration of a full watchlist scan",
        ))?;
        let last_scan_timestamp = Gauge::with_opts(Opts::new(
            "last_scan_timestamp",
            "Unix timestamp of the most recent completed scan",
        ))?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(scans_total.clone()))?;
        registry.register(Box::new(tickers_evaluated_total.clone()))?;
        registry.register(Box::new(ticker_failures_total.clone()))?;
        registry.register(Box::new(strong_buy_signals.clone()))?;
        registry.register(Box::new(scan_duration_seconds.clone()))?;
        registry.register(Box::new(last_scan_timestamp.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            scans_total,
            tickers_evaluated_total,
            ticker_failures_total,
            strong_buy_signals,
            scan_duration_seconds,
            last_scan_timestamp,
        })
    }

    /// Render the registry in the Prometheus text exposition format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
