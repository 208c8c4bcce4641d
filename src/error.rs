//! Error taxonomy for the monitoring pipeline.
//!
//! None of these abort a batch: an invalid bar is dropped, insufficient
//! history degrades indicators to unavailable, and an upstream fetch failure
//! marks only that ticker's result.

use std::fmt;

#[derive(Debug)]
pub enum MonitorError {
    /// A bar with a non-positive price, negative volume, or out-of-order
    /// date. The offending bar is rejected; the series continues.
    InvalidBar { ticker: String, reason: String },

    /// Not enough valid bars to analyze the symbol at all.
    InsufficientHistory {
        ticker: String,
        required: usize,
        available: usize,
    },

    /// The upstream market-data provider failed for this ticker. Treated
    /// the same as insufficient history: the result is marked, the batch
    /// continues.
    DataUnavailable { ticker: String, source: String },
}

impl fmt::Display for MonitorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonitorError::InvalidBar { ticker, reason } => {
                write!(f, "invalid bar for {ticker}: {reason}")
            }
            MonitorError::InsufficientHistory {
                ticker,
                required,
                available,
            } => write!(
                f,
                "insufficient history for {ticker}: required {required}, available {available}"
            ),
            MonitorError::DataUnavailable { ticker, source } => {
                write!(f, "market data unavailable for {ticker}: {source}")
            }
        }
    }
}

impl std::error::Error for MonitorError {}

impl MonitorError {
    pub fn data_unavailable(ticker: &str, source: impl ToString) -> Self {
        Self::DataUnavailable {
            ticker: ticker.to_string(),
            source: source.to_string(),
        }
    }
}
