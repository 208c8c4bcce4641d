//! Signal evaluation: indicator snapshot in, composite score out.

pub mod engine;
pub mod scorer;

pub use engine::SignalEngine;
pub use scorer::score_indicators;
