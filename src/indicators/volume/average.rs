//! Average volume indicator

use crate::common::math;

/// Arithmetic mean of the last `period` volumes.
///
/// Returns `None` if the series is shorter than `period`.
pub fn calculate_average_volume(volumes: &[f64], period: usize) -> Option<f64> {
    math::sma(volumes, period)
}
