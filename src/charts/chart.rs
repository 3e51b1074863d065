//! Chart descriptions handed from the processor to a renderer.

use crate::stats::{GroupMean, HistogramBin};

/// Frequency-binned distribution of one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bins: Vec<HistogramBin>,
}

impl HistogramChart {
    pub fn new(column: &str, bins: Vec<HistogramBin>) -> Self {
        Self {
            title: format!("Histogram of {}", column),
            x_label: column.to_string(),
            y_label: "Frequency".to_string(),
            bins,
        }
    }

    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

/// One bar per category, height = mean of the numeric column within it.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<GroupMean>,
}

impl GroupedBarChart {
    pub fn new(x_column: &str, y_column: &str, bars: Vec<GroupMean>) -> Self {
        Self {
            title: format!("Bar Chart: {} vs {}", x_column, y_column),
            x_label: x_column.to_string(),
            y_label: y_column.to_string(),
            bars,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Histogram(HistogramChart),
    Bar(GroupedBarChart),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Histogram(h) => &h.title,
            Chart::Bar(b) => &b.title,
        }
    }
}

/// Receives finished charts for display.
pub trait ChartSink {
    fn render(&mut self, chart: Chart);
}

/// Collects charts in order; used where no window is available.
impl ChartSink for Vec<Chart> {
    fn render(&mut self, chart: Chart) {
        self.push(chart);
    }
}
