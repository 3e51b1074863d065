//! Stats module - Descriptive statistics and aggregation

mod calculator;

pub use calculator::{GroupMean, HistogramBin, StatsCalculator};
