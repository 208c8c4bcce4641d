//! Market data provider interface.

use async_trait::async_trait;

use crate::error::MonitorError;
use crate::models::bar::Bar;

/// Source of daily bar history for a symbol.
///
/// A provider failure surfaces as `DataUnavailable` for that ticker only;
/// the scanner treats it like insufficient history and moves on.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch up to `lookback_days` calendar days of daily bars, ordered
    /// oldest to newest.
    async fn fetch_history(&self, ticker: &str, lookback_days: u32)
        -> Result<Vec<Bar>, MonitorError>;
}
