//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;

/// MACD line, signal line, and histogram as of the latest close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdValue {
    pub line: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// Calculate MACD.
///
/// MACD line = EMA(fast) - EMA(slow); signal = EMA(signal_period) of the
/// MACD line series; histogram = line - signal. EMAs use smoothing
/// `2/(n+1)` seeded with the SMA of the first n values.
///
/// Returns `None` if the series is shorter than `slow + signal_period`.
pub fn calculate_macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal_period: usize,
) -> Option<MacdValue> {
    if fast == 0 || slow <= fast || signal_period == 0 {
        return None;
    }
    if closes.len() < slow + signal_period {
        return None;
    }

    let fast_series = math::ema_series(closes, fast)?;
    let slow_series = math::ema_series(closes, slow)?;

    // Both EMA series end at the latest close; align them from the point the
    // slow EMA exists.
    let offset = fast_series.len() - slow_series.len();
    let macd_series: Vec<f64> = slow_series
        .iter()
        .enumerate()
        .map(|(i, slow_ema)| fast_series[i + offset] - slow_ema)
        .collect();

    let line = *macd_series.last()?;
    let signal = math::ema(&macd_series, signal_period)?;

    Some(MacdValue {
        line,
        signal,
        histogram: line - signal,
    })
}
