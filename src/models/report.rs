//! Per-ticker results and the aggregate report the dashboard consumes.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MonitorError;
use crate::models::indicators::IndicatorSet;

/// Descriptive watchlist grouping. Does not affect scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WatchlistCategory {
    QuantumPurePlay,
    BigTech,
    Defense,
    AiInfrastructure,
}

impl fmt::Display for WatchlistCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::QuantumPurePlay => "Quantum Pure-Play",
            Self::BigTech => "Big Tech",
            Self::Defense => "Defense/Industrial",
            Self::AiInfrastructure => "AI Infrastructure",
        };
        f.write_str(name)
    }
}

impl FromStr for WatchlistCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QUANTUM_PURE_PLAY" => Ok(Self::QuantumPurePlay),
            "BIG_TECH" => Ok(Self::BigTech),
            "DEFENSE" => Ok(Self::Defense),
            "AI_INFRASTRUCTURE" => Ok(Self::AiInfrastructure),
            other => Err(format!("unknown watchlist category: {}", other)),
        }
    }
}

/// Alert tier derived from the composite score. `StrongBuy` is the scored
/// state; the watch tier only affects presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Neutral,
    Watch,
    StrongBuy,
}

/// Composite bullishness score: sum of every fired rule's points, with the
/// per-rule breakdown preserved for explainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalScore {
    pub total: f64,
    pub components: BTreeMap<String, f64>,
    pub classification: Classification,
}

impl SignalScore {
    /// Score for a ticker with nothing to evaluate.
    pub fn zero() -> Self {
        Self {
            total: 0.0,
            components: BTreeMap::new(),
            classification: Classification::Neutral,
        }
    }
}

/// One symbol's evaluation, produced fresh every scan cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerResult {
    pub ticker: String,
    pub category: WatchlistCategory,
    pub timestamp: DateTime<Utc>,
    pub indicators: IndicatorSet,
    pub score: SignalScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TickerResult {
    /// Result record for a ticker whose data could not be evaluated.
    /// Indicators stay null, the score stays zero, the batch continues.
    pub fn failed(ticker: &str, category: WatchlistCategory, error: &MonitorError) -> Self {
        Self {
            ticker: ticker.to_string(),
            category,
            timestamp: Utc::now(),
            indicators: IndicatorSet::empty(),
            score: SignalScore::zero(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_strong_buy(&self) -> bool {
        self.score.classification == Classification::StrongBuy
    }
}

/// Aggregate output of one full watchlist scan. Field names are a stable
/// contract with the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchReport {
    pub generated_at: DateTime<Utc>,
    pub tickers: Vec<TickerResult>,
    pub strong_buy_count: usize,
}

impl WatchReport {
    pub fn assemble(tickers: Vec<TickerResult>) -> Self {
        let strong_buy_count = tickers.iter().filter(|t| t.is_strong_buy()).count();
        Self {
            generated_at: Utc::now(),
            tickers,
            strong_buy_count,
        }
    }
}
