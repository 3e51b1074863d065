//! Charts module - Chart descriptions and rendering

mod chart;
mod plotter;

pub use chart::{Chart, ChartSink, GroupedBarChart, HistogramChart};
pub use plotter::ChartPlotter;
