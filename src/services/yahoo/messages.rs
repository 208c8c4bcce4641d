//! Wire types for the Yahoo Finance v8 chart endpoint.

use chrono::DateTime;
use serde::Deserialize;

use crate::models::bar::Bar;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    pub quote: Vec<Quote>,
}

/// Per-field arrays parallel to `timestamp`. Yahoo emits `null` for
/// halted/missing sessions, so every slot is optional.
#[derive(Debug, Default, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

impl ChartResult {
    /// Convert the parallel arrays into bars, skipping any slot with a
    /// missing field. Order follows `timestamp`, which Yahoo returns oldest
    /// to newest.
    pub fn into_bars(self) -> Vec<Bar> {
        let quote = match self.indicators.quote.into_iter().next() {
            Some(quote) => quote,
            None => return Vec::new(),
        };

        let mut bars = Vec::with_capacity(self.timestamp.len());
        for (i, &ts) in self.timestamp.iter().enumerate() {
            let slot = |values: &[Option<f64>]| values.get(i).copied().flatten();
            let (open, high, low, close, volume) = match (
                slot(&quote.open),
                slot(&quote.high),
                slot(&quote.low),
                slot(&quote.close),
                slot(&quote.volume),
            ) {
                (Some(o), Some(h), Some(l), Some(c), Some(v)) => (o, h, l, c, v),
                _ => continue,
            };
            let date = match DateTime::from_timestamp(ts, 0) {
                Some(dt) => dt.date_naive(),
                None => continue,
            };
            bars.push(Bar::new(date, open, high, low, close, volume));
        }
        bars
    }
}
