//! Yahoo Finance market data provider implementation.

use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use tracing::{debug, warn};
use url::Url;

use super::messages::ChartResponse;
use crate::error::MonitorError;
use crate::models::bar::Bar;
use crate::services::market_data::MarketDataProvider;

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const USER_AGENT: &str = "Mozilla/5.0 (compatible; quantrix/0.1)";
const MAX_RETRIES: usize = 3;

/// Daily-bar provider backed by the public v8 chart endpoint.
///
/// Transport failures are retried with exponential backoff; a definitive
/// error payload from the API is not.
pub struct YahooFinanceProvider {
    client: reqwest::Client,
    base_url: Url,
}

impl YahooFinanceProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL).expect("default base URL parses")
    }

    /// Point the provider at a different host, e.g. a mock server in tests.
    pub fn with_base_url(base_url: &str) -> Result<Self, url::ParseError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(15))
            .build()
            .expect("reqwest client builds");
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    fn chart_url(&self, ticker: &str, lookback_days: u32) -> Result<Url, MonitorError> {
        let mut url = self
            .base_url
            .join(&format!("v8/finance/chart/{}", ticker))
            .map_err(|e| MonitorError::data_unavailable(ticker, e))?;
        url.query_pairs_mut()
            .append_pair("range", &format!("{}d", lookback_days))
            .append_pair("interval", "1d")
            .append_pair("events", "history");
        Ok(url)
    }

    /// One HTTP round trip. Everything that can fail here is transient and
    /// worth retrying.
    async fn request_chart(
        &self,
        ticker: &str,
        lookback_days: u32,
    ) -> Result<ChartResponse, MonitorError> {
        let url = self.chart_url(ticker, lookback_days)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MonitorError::data_unavailable(ticker, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MonitorError::data_unavailable(
                ticker,
                format!("HTTP {}", status),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| MonitorError::data_unavailable(ticker, e))
    }

    /// Turn a chart response into bars, surfacing the API's own error
    /// payload as `DataUnavailable`.
    fn interpret_chart(ticker: &str, chart: ChartResponse) -> Result<Vec<Bar>, MonitorError> {
        if let Some(error) = chart.chart.error {
            return Err(MonitorError::data_unavailable(
                ticker,
                format!("{}: {}", error.code, error.description),
            ));
        }

        let result = chart
            .chart
            .result
            .and_then(|mut results| {
                if results.is_empty() {
                    None
                } else {
                    Some(results.remove(0))
                }
            })
            .ok_or_else(|| MonitorError::data_unavailable(ticker, "empty chart result"))?;

        Ok(result.into_bars())
    }
}

impl Default for YahooFinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for YahooFinanceProvider {
    async fn fetch_history(
        &self,
        ticker: &str,
        lookback_days: u32,
    ) -> Result<Vec<Bar>, MonitorError> {
        let chart = (|| self.request_chart(ticker, lookback_days))
            .retry(ExponentialBuilder::default().with_max_times(MAX_RETRIES))
            .notify(|error: &MonitorError, delay: Duration| {
                warn!(
                    ticker = %ticker,
                    error = %error,
                    retry_in_ms = delay.as_millis() as u64,
                    "chart request failed, retrying"
                );
            })
            .await?;

        let bars = Self::interpret_chart(ticker, chart)?;
        debug!(ticker = %ticker, bars = bars.len(), "fetched daily history");
        Ok(bars)
    }
}
