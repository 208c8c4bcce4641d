use serde::{Deserialize, Serialize};

/// Snapshot of every indicator for one symbol as of its most recent bar.
///
/// Each field is `None` when the history is too short to compute it; absent
/// fields are omitted from the serialized output so the dashboard reads
/// absence as "not computable".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma20: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma50: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma200: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi14: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_line: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_signal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_histogram: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bb_upper: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bb_middle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bb_lower: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bb_percent_b: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bb_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_volume20: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_ratio: Option<f64>,
}

impl IndicatorSet {
    /// All-null snapshot, used for tickers whose data never arrived.
    pub fn empty() -> Self {
        Self::default()
    }
}
