//! Indicator library: pure, independent functions over a price series.
//!
//! Every function returns `None` instead of a value when the series is too
//! short for its lookback; callers propagate the absence rather than
//! substituting a default.

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use momentum::macd::{calculate_macd, MacdValue};
pub use momentum::rsi::calculate_rsi;
pub use trend::sma::calculate_sma;
pub use volatility::bollinger::{calculate_bollinger_bands, BollingerValue};
pub use volume::average::calculate_average_volume;
