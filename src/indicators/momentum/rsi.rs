//! RSI (Relative Strength Index) indicator

/// Calculate RSI over the last `period` price deltas.
///
/// RSI = 100 - (100 / (1 + RS)), RS = Average Gain / Average Loss.
///
/// Smoothing is a simple rolling average of the last `period` gains and
/// losses (not Wilder's exponential smoothing; the two diverge after the
/// seed window, so this choice is fixed).
///
/// Edge cases:
/// - fewer than `period + 1` closes: `None`
/// - no losses in the window: 100
/// - no gains and no losses (flat window): `None`; the value is undefined
///   and must not satisfy any scoring guard
pub fn calculate_rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    let start = closes.len() - period;
    for i in start..closes.len() {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            gains += change;
        } else {
            losses += change.abs();
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return None;
        }
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}
