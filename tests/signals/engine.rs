//! Unit tests for the per-ticker signal engine

use chrono::NaiveDate;
use quantrix::config::EngineConfig;
use quantrix::models::{Bar, PriceSeries, WatchlistCategory};
use quantrix::signals::SignalEngine;

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Days::new(offset)
}

fn series_from_closes(closes: &[f64], volume: f64) -> PriceSeries {
    let bars: Vec<Bar> = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar::new(day(i as u64), close, close + 0.1, close - 0.1, close, volume))
        .collect();
    PriceSeries::from_bars("TEST", &bars, 1).unwrap()
}

#[test]
fn test_short_history_all_window_indicators_null() {
    let series = series_from_closes(&vec![100.0; 10], 1000.0);
    let (set, score) = SignalEngine::evaluate(&series, &EngineConfig::default());

    assert!(set.sma20.is_none());
    assert!(set.sma50.is_none());
    assert!(set.sma200.is_none());
    assert!(set.rsi14.is_none());
    assert!(set.macd_line.is_none());
    assert!(set.bb_upper.is_none());
    assert!(set.avg_volume20.is_none());
    assert_eq!(set.current_price, Some(100.0));
    assert_eq!(score.total, 0.0);
}

#[test]
fn test_flat_series_scores_zero() {
    // 200 identical closes: SMAs equal the price, band width collapses,
    // RSI and percent-b are unavailable, and nothing fires.
    let series = series_from_closes(&vec![100.0; 200], 1000.0);
    let (set, score) = SignalEngine::evaluate(&series, &EngineConfig::default());

    assert_eq!(set.sma20, Some(100.0));
    assert_eq!(set.sma50, Some(100.0));
    assert_eq!(set.sma200, Some(100.0));
    assert!(set.rsi14.is_none());
    assert_eq!(set.bb_width, Some(0.0));
    assert!(set.bb_percent_b.is_none());
    assert_eq!(set.change_pct, Some(0.0));
    assert_eq!(score.total, 0.0);
    assert!(score.components.is_empty());
}

#[test]
fn test_steady_uptrend_scores_trend_rules() {
    // Rising closes: price above both short SMAs and the 200-day, MACD
    // above its signal. RSI is pinned at 100 (no losing day) so neither
    // RSI rule fires; volume is flat so conviction does not fire.
    let closes: Vec<f64> = (0..250).map(|i| 100.0 + i as f64 * 0.5).collect();
    let series = series_from_closes(&closes, 1000.0);
    let (set, score) = SignalEngine::evaluate(&series, &EngineConfig::default());

    assert_eq!(set.rsi14, Some(100.0));
    assert_eq!(score.total, 3.0);
    assert_eq!(
        score.classification,
        quantrix::models::Classification::StrongBuy
    );
}

#[test]
fn test_evaluate_ticker_carries_identity() {
    let series = series_from_closes(&vec![100.0; 30], 1000.0);
    let result = SignalEngine::evaluate_ticker(
        "IONQ",
        WatchlistCategory::QuantumPurePlay,
        &series,
        &EngineConfig::default(),
    );
    assert_eq!(result.ticker, "IONQ");
    assert_eq!(result.category, WatchlistCategory::QuantumPurePlay);
    assert!(result.error.is_none());
}

#[test]
fn test_volume_ratio_and_change_pct() {
    let mut closes = vec![100.0; 30];
    *closes.last_mut().unwrap() = 110.0;
    let bars: Vec<Bar> = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let volume = if i == closes.len() - 1 { 3000.0 } else { 1000.0 };
            Bar::new(day(i as u64), close, close + 0.1, close - 0.1, close, volume)
        })
        .collect();
    let series = PriceSeries::from_bars("TEST", &bars, 1).unwrap();
    let (set, score) = SignalEngine::evaluate(&series, &EngineConfig::default());

    assert!((set.change_pct.unwrap() - 10.0).abs() < 1e-10);
    // Average includes the spike: (19 * 1000 + 3000) / 20 = 1100.
    assert!((set.avg_volume20.unwrap() - 1100.0).abs() < 1e-10);
    assert!(set.volume_ratio.unwrap() > 2.0);
    assert!(score
        .components
        .contains_key(quantrix::signals::scorer::RULE_VOLUME_CONVICTION));
}
