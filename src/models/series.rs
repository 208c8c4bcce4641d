//! Series preprocessing: raw bars in, a cleaned price/volume series out.

use chrono::NaiveDate;
use tracing::warn;

use crate::error::MonitorError;
use crate::models::bar::Bar;

/// Cleaned closing-price and volume series for one symbol, oldest to newest.
///
/// Construction drops malformed bars and bars that break the
/// strictly-increasing-date invariant; it never interpolates missing trading
/// days. Indicators operate on sequence index, not calendar time.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    ticker: String,
    dates: Vec<NaiveDate>,
    closes: Vec<f64>,
    volumes: Vec<f64>,
    rejected: usize,
}

impl PriceSeries {
    /// Build a series from raw bars, requiring at least `min_len` valid bars.
    ///
    /// Invalid bars (non-positive price, negative volume) and out-of-order or
    /// duplicate-date bars are rejected individually; the rest of the series
    /// survives. Fails with `InsufficientHistory` when fewer than `min_len`
    /// valid bars remain.
    pub fn from_bars(ticker: &str, bars: &[Bar], min_len: usize) -> Result<Self, MonitorError> {
        let mut dates = Vec::with_capacity(bars.len());
        let mut closes = Vec::with_capacity(bars.len());
        let mut volumes = Vec::with_capacity(bars.len());
        let mut rejected = 0usize;

        for bar in bars {
            if let Err(reason) = bar.validate() {
                let error = MonitorError::InvalidBar {
                    ticker: ticker.to_string(),
                    reason,
                };
                warn!(ticker = %ticker, date = %bar.date, error = %error, "rejecting bar");
                rejected += 1;
                continue;
            }
            if let Some(&last) = dates.last() {
                if bar.date <= last {
                    let error = MonitorError::InvalidBar {
                        ticker: ticker.to_string(),
                        reason: format!("date {} not after {}", bar.date, last),
                    };
                    warn!(ticker = %ticker, date = %bar.date, error = %error, "rejecting bar");
                    rejected += 1;
                    continue;
                }
            }
            dates.push(bar.date);
            closes.push(bar.close);
            volumes.push(bar.volume);
        }

        if closes.len() < min_len {
            return Err(MonitorError::InsufficientHistory {
                ticker: ticker.to_string(),
                required: min_len,
                available: closes.len(),
            });
        }

        Ok(Self {
            ticker: ticker.to_string(),
            dates,
            closes,
            volumes,
            rejected,
        })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn volumes(&self) -> &[f64] {
        &self.volumes
    }

    pub fn last_close(&self) -> Option<f64> {
        self.closes.last().copied()
    }

    pub fn last_volume(&self) -> Option<f64> {
        self.volumes.last().copied()
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Close of the bar before the latest one, for day-over-day change.
    pub fn previous_close(&self) -> Option<f64> {
        if self.closes.len() < 2 {
            return None;
        }
        Some(self.closes[self.closes.len() - 2])
    }

    /// Number of bars dropped during cleaning.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}
