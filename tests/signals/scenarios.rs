//! Market-scenario tests for the full evaluate path

use chrono::NaiveDate;
use quantrix::config::EngineConfig;
use quantrix::models::{Bar, Classification, PriceSeries};
use quantrix::signals::scorer::{RULE_NEAR_LOWER_BAND, RULE_OVERSOLD_BOUNCE};
use quantrix::signals::SignalEngine;

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + chrono::Days::new(offset)
}

fn build_series(closes: &[f64], volumes: &[f64]) -> PriceSeries {
    let bars: Vec<Bar> = closes
        .iter()
        .zip(volumes)
        .enumerate()
        .map(|(i, (&close, &volume))| {
            Bar::new(day(i as u64), close, close + 0.2, close - 0.2, close, volume)
        })
        .collect();
    PriceSeries::from_bars("SCEN", &bars, 1).unwrap()
}

#[test]
fn test_oversold_pullback_triggers_bounce_rules() {
    // A long flat base, then fifteen straight losing days on heavy volume:
    // RSI pins low, price sits under the lower band, volume spikes.
    let mut closes: Vec<f64> = (0..60).map(|i| 100.0 + (i % 3) as f64 * 0.2).collect();
    for i in 0..15 {
        closes.push(99.0 - i as f64 * 1.5);
    }
    let mut volumes = vec![1000.0; closes.len()];
    let n = volumes.len();
    volumes[n - 1] = 2500.0;

    let series = build_series(&closes, &volumes);
    let (set, score) = SignalEngine::evaluate(&series, &EngineConfig::default());

    assert!(set.rsi14.unwrap() < 30.0);
    assert!(set.bb_percent_b.unwrap() < 0.20);
    assert!(score.components.contains_key(RULE_OVERSOLD_BOUNCE));
    assert!(score.components.contains_key(RULE_NEAR_LOWER_BAND));
    assert!(score.total >= 3.0);
    assert_eq!(score.classification, Classification::StrongBuy);
}

#[test]
fn test_slow_bleed_never_reaches_strong_buy() {
    // A slow bleed: losing days dominate but the last close hugs the
    // middle of the band and volume is unremarkable.
    let closes: Vec<f64> = (0..120)
        .map(|i| 150.0 - i as f64 * 0.1 + if i % 2 == 0 { 0.3 } else { -0.3 })
        .collect();
    let volumes = vec![1000.0; closes.len()];

    let series = build_series(&closes, &volumes);
    let (set, score) = SignalEngine::evaluate(&series, &EngineConfig::default());

    // Price below every SMA: no trend rule can fire.
    let price = set.current_price.unwrap();
    assert!(price < set.sma20.unwrap());
    assert!(score.total <= 1.5);
    assert_ne!(score.classification, Classification::StrongBuy);
}

#[test]
fn test_score_stays_within_attainable_range() {
    // Whatever the shape of the data, the additive table is bounded by the
    // sum of all positive rule points.
    let shapes: Vec<Vec<f64>> = vec![
        (0..250).map(|i| 100.0 + i as f64 * 0.5).collect(),
        (0..250).map(|i| 300.0 - i as f64).collect::<Vec<f64>>()
            .into_iter()
            .map(|v| v.max(1.0))
            .collect(),
        (0..250)
            .map(|i| 100.0 + ((i as f64) * 0.7).sin() * 10.0)
            .collect(),
    ];
    for closes in shapes {
        let volumes = vec![1000.0; closes.len()];
        let series = build_series(&closes, &volumes);
        let (_, score) = SignalEngine::evaluate(&series, &EngineConfig::default());
        assert!(score.total >= 0.0);
        assert!(score.total <= 8.0);
        let sum: f64 = score.components.values().sum();
        assert!((score.total - sum).abs() < 1e-10);
    }
}
