//! Per-ticker evaluation: cleaned series in, indicator snapshot and score out.

use chrono::Utc;

use crate::config::{EngineConfig, IndicatorConfig};
use crate::indicators::{
    calculate_average_volume, calculate_bollinger_bands, calculate_macd, calculate_rsi,
    calculate_sma,
};
use crate::models::indicators::IndicatorSet;
use crate::models::report::{SignalScore, TickerResult, WatchlistCategory};
use crate::models::series::PriceSeries;
use crate::signals::scorer::score_indicators;

/// The minimum usable history: one valid bar anchors the current price.
/// Everything window-based degrades to `None` on its own.
pub const MIN_BARS: usize = 1;

pub struct SignalEngine;

impl SignalEngine {
    /// Compute every indicator the scorer consumes. Pure; never suspends.
    pub fn compute_indicators(series: &PriceSeries, config: &IndicatorConfig) -> IndicatorSet {
        let closes = series.closes();
        let volumes = series.volumes();

        let macd = calculate_macd(
            closes,
            config.macd_fast,
            config.macd_slow,
            config.macd_signal,
        );
        let bollinger = calculate_bollinger_bands(closes, config.bb_period, config.bb_std_dev);
        let avg_volume = calculate_average_volume(volumes, config.volume_period);
        let current_price = series.last_close();
        let current_volume = series.last_volume();

        let change_pct = match (current_price, series.previous_close()) {
            (Some(price), Some(previous)) if previous != 0.0 => {
                Some((price - previous) / previous * 100.0)
            }
            _ => None,
        };
        let volume_ratio = match (current_volume, avg_volume) {
            (Some(volume), Some(avg)) if avg > 0.0 => Some(volume / avg),
            _ => None,
        };

        IndicatorSet {
            sma20: calculate_sma(closes, config.sma_short),
            sma50: calculate_sma(closes, config.sma_mid),
            sma200: calculate_sma(closes, config.sma_long),
            rsi14: calculate_rsi(closes, config.rsi_period),
            macd_line: macd.map(|m| m.line),
            macd_signal: macd.map(|m| m.signal),
            macd_histogram: macd.map(|m| m.histogram),
            bb_upper: bollinger.map(|b| b.upper),
            bb_middle: bollinger.map(|b| b.middle),
            bb_lower: bollinger.map(|b| b.lower),
            bb_percent_b: bollinger.and_then(|b| b.percent_b),
            bb_width: bollinger.map(|b| b.width),
            avg_volume20: avg_volume,
            current_volume,
            current_price,
            change_pct,
            volume_ratio,
        }
    }

    /// Evaluate one series: indicators plus the scored rule table.
    pub fn evaluate(series: &PriceSeries, config: &EngineConfig) -> (IndicatorSet, SignalScore) {
        let indicators = Self::compute_indicators(series, &config.indicators);
        let score = score_indicators(&indicators, &config.scoring);
        (indicators, score)
    }

    /// Full per-ticker result record, stamped with the evaluation time.
    pub fn evaluate_ticker(
        ticker: &str,
        category: WatchlistCategory,
        series: &PriceSeries,
        config: &EngineConfig,
    ) -> TickerResult {
        let (indicators, score) = Self::evaluate(series, config);
        TickerResult {
            ticker: ticker.to_string(),
            category,
            timestamp: Utc::now(),
            indicators,
            score,
            error: None,
        }
    }
}
