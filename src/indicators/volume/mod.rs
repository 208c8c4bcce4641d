//! Volume indicators.

pub mod average;
