//! Rolling-window math helpers shared by the indicator functions.

/// Arithmetic mean of the last `period` values.
///
/// Returns `None` if fewer than `period` values are available.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let sum: f64 = values[values.len() - period..].iter().sum();
    Some(sum / period as f64)
}

/// One EMA step: blend `value` into `previous` with smoothing `2/(n+1)`.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let alpha = 2.0 / (period as f64 + 1.0);
    previous + alpha * (value - previous)
}

/// EMA of the full series, seeded with the SMA of the first `period` values.
///
/// Returns `None` if fewer than `period` values are available.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    ema_series(values, period).map(|series| series[series.len() - 1])
}

/// Full EMA series, seeded with the SMA of the first `period` values.
///
/// Element 0 of the returned vector corresponds to input index `period - 1`
/// (the seed), so the output has `len - period + 1` elements.
pub fn ema_series(values: &[f64], period: usize) -> Option<Vec<f64>> {
    if period == 0 || values.len() < period {
        return None;
    }
    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;
    let mut series = Vec::with_capacity(values.len() - period + 1);
    series.push(seed);
    let mut previous = seed;
    for &value in &values[period..] {
        previous = ema_from_previous(value, previous, period);
        series.push(previous);
    }
    Some(series)
}

/// Population standard deviation of the last `period` values.
///
/// Returns `None` if fewer than `period` values are available.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    let mean = sma(values, period)?;
    let window = &values[values.len() - period..];
    let variance: f64 = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
    Some(variance.sqrt())
}
