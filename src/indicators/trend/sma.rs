//! SMA (Simple Moving Average) indicator

use crate::common::math;

/// Arithmetic mean of the last `period` closes.
///
/// Returns `None` if the series is shorter than `period`.
pub fn calculate_sma(closes: &[f64], period: usize) -> Option<f64> {
    math::sma(closes, period)
}
