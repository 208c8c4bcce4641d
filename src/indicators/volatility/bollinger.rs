//! Bollinger Bands indicator

use crate::common::math;

/// Bollinger bands as of the latest close.
///
/// `percent_b` is the latest close's position between the bands
/// (0 = lower, 1 = upper); `None` when the bands collapse (upper == lower).
/// `width` is the band spread as a fraction of the middle band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerValue {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub percent_b: Option<f64>,
    pub width: f64,
}

/// Calculate Bollinger Bands over the last `period` closes.
///
/// Middle = SMA(period); upper/lower = middle ± `std_dev` × population
/// standard deviation. Returns `None` if the series is shorter than
/// `period`.
pub fn calculate_bollinger_bands(
    closes: &[f64],
    period: usize,
    std_dev: f64,
) -> Option<BollingerValue> {
    if closes.len() < period {
        return None;
    }

    let middle = math::sma(closes, period)?;
    let std = math::standard_deviation(closes, period)?;

    let upper = middle + (std_dev * std);
    let lower = middle - (std_dev * std);

    let price = *closes.last()?;
    let percent_b = if upper == lower {
        None
    } else {
        Some((price - lower) / (upper - lower))
    };

    Some(BollingerValue {
        upper,
        middle,
        lower,
        percent_b,
        width: (upper - lower) / middle,
    })
}
