//! The bullishness rule table.
//!
//! Each rule fires independently; its points are added only when the guard
//! holds and every indicator it references is available. A rule that
//! references an unavailable indicator is skipped, never defaulted. The two
//! RSI rules overlap by construction (momentum zone and oversold bounce are
//! separate entries, not branches of one conditional) and stay that way.

use std::collections::BTreeMap;

use crate::config::ScoreConfig;
use crate::models::indicators::IndicatorSet;
use crate::models::report::{Classification, SignalScore};

pub const RULE_STRONG_UPTREND: &str = "strong_uptrend";
pub const RULE_LONG_TERM_BULLISH: &str = "long_term_bullish";
pub const RULE_MOMENTUM: &str = "momentum";
pub const RULE_OVERSOLD_BOUNCE: &str = "oversold_bounce";
pub const RULE_MACD_BULLISH: &str = "macd_bullish";
pub const RULE_NEAR_LOWER_BAND: &str = "near_lower_band";
pub const RULE_VOLUME_CONVICTION: &str = "volume_conviction";

/// Evaluate the rule table against the latest indicator snapshot.
pub fn score_indicators(set: &IndicatorSet, config: &ScoreConfig) -> SignalScore {
    let mut components = BTreeMap::new();
    let mut fire = |name: &str, points: f64| {
        components.insert(name.to_string(), points);
    };

    // Price > SMA20 > SMA50.
    if let (Some(price), Some(sma20), Some(sma50)) = (set.current_price, set.sma20, set.sma50) {
        if price > sma20 && sma20 > sma50 {
            fire(RULE_STRONG_UPTREND, config.uptrend_points);
        }
    }

    // Price above the 200-day SMA.
    if let (Some(price), Some(sma200)) = (set.current_price, set.sma200) {
        if price > sma200 {
            fire(RULE_LONG_TERM_BULLISH, config.long_term_points);
        }
    }

    // RSI in the momentum zone, not overbought.
    if let Some(rsi) = set.rsi14 {
        if rsi >= config.rsi_momentum_low && rsi <= config.rsi_momentum_high {
            fire(RULE_MOMENTUM, config.momentum_points);
        }
    }

    // RSI oversold, potential bounce.
    if let Some(rsi) = set.rsi14 {
        if rsi < config.rsi_oversold {
            fire(RULE_OVERSOLD_BOUNCE, config.oversold_points);
        }
    }

    // MACD line above its signal line.
    if let (Some(line), Some(signal)) = (set.macd_line, set.macd_signal) {
        if line > signal {
            fire(RULE_MACD_BULLISH, config.macd_points);
        }
    }

    // Price near the lower Bollinger band.
    if let Some(percent_b) = set.bb_percent_b {
        if percent_b < config.lower_band_threshold {
            fire(RULE_NEAR_LOWER_BAND, config.lower_band_points);
        }
    }

    // Volume well above its 20-day average.
    if let (Some(volume), Some(avg_volume)) = (set.current_volume, set.avg_volume20) {
        if volume > config.volume_ratio_threshold * avg_volume {
            fire(RULE_VOLUME_CONVICTION, config.volume_points);
        }
    }

    let total: f64 = components.values().sum();
    let classification = classify(total, config);

    SignalScore {
        total,
        components,
        classification,
    }
}

fn classify(total: f64, config: &ScoreConfig) -> Classification {
    if total >= config.strong_buy_threshold {
        Classification::StrongBuy
    } else if total >= config.watch_threshold {
        Classification::Watch
    } else {
        Classification::Neutral
    }
}
