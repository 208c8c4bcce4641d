use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of price/volume history. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Check the bar for malformed data. Every price must be positive and
    /// finite, volume non-negative.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("non-positive {} price: {}", name, value));
            }
        }
        if !self.volume.is_finite() || self.volume < 0.0 {
            return Err(format!("negative volume: {}", self.volume));
        }
        Ok(())
    }
}
