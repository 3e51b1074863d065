//! Data Processor Module
//! Owns the loaded dataset and computes statistics and charts from it.

use crate::charts::{Chart, ChartSink, GroupedBarChart, HistogramChart};
use crate::data::{DataLoader, Dataset, DatasetError, LoaderError};
use crate::settings::AppSettings;
use crate::stats::StatsCalculator;
use polars::prelude::PolarsError;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("{0}")]
    Load(#[from] LoaderError),
    #[error("No dataset loaded. Load a CSV file first.")]
    NoDatasetLoaded,
    #[error("Column not found: {0}")]
    ColumnNotFound(String),
    #[error("Column '{column}' is not numeric (type {dtype})")]
    NonNumericColumn { column: String, dtype: String },
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

impl From<DatasetError> for ProcessorError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::ColumnNotFound(column) => Self::ColumnNotFound(column),
            DatasetError::NonNumericColumn { column, dtype } => {
                Self::NonNumericColumn { column, dtype }
            }
            DatasetError::PolarsError(e) => Self::Polars(e),
        }
    }
}

/// Whether a dataset is currently held.
#[derive(Debug, Default)]
pub enum DatasetState {
    #[default]
    Empty,
    Loaded(Dataset),
}

/// Shape of a freshly loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows: usize,
    pub columns: usize,
}

/// Holds at most one dataset; every operation is a function of that state.
#[derive(Debug)]
pub struct Processor {
    state: DatasetState,
    loader: DataLoader,
    histogram_bins: usize,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(&AppSettings::default())
    }
}

impl Processor {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            state: DatasetState::Empty,
            loader: DataLoader::new(settings.infer_schema_length),
            histogram_bins: settings.histogram_bins.max(1),
        }
    }

    /// Start with an already-built dataset.
    pub fn with_dataset(settings: &AppSettings, dataset: Dataset) -> Self {
        let mut processor = Self::new(settings);
        processor.state = DatasetState::Loaded(dataset);
        processor
    }

    pub fn state(&self) -> &DatasetState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, DatasetState::Loaded(_))
    }

    pub fn dataset(&self) -> Result<&Dataset, ProcessorError> {
        match &self.state {
            DatasetState::Loaded(dataset) => Ok(dataset),
            DatasetState::Empty => Err(ProcessorError::NoDatasetLoaded),
        }
    }

    /// Replace the current dataset with the CSV at `path`.
    ///
    /// On failure the previous dataset is kept.
    pub fn load(&mut self, path: &Path) -> Result<LoadSummary, ProcessorError> {
        let dataset = self.loader.load_csv(path)?;
        let summary = LoadSummary {
            rows: dataset.row_count(),
            columns: dataset.column_count(),
        };

        log::info!(
            "loaded {}: {} rows, {} columns",
            path.display(),
            summary.rows,
            summary.columns
        );
        self.state = DatasetState::Loaded(dataset);
        Ok(summary)
    }

    pub fn column_names(&self) -> Result<Vec<String>, ProcessorError> {
        Ok(self.dataset()?.column_names())
    }

    pub fn mean(&self, column: &str) -> Result<f64, ProcessorError> {
        Ok(StatsCalculator::mean(&self.dataset()?.numeric_values(column)?))
    }

    pub fn median(&self, column: &str) -> Result<f64, ProcessorError> {
        Ok(StatsCalculator::median(&self.dataset()?.numeric_values(column)?))
    }

    /// Sample standard deviation.
    pub fn stddev(&self, column: &str) -> Result<f64, ProcessorError> {
        Ok(StatsCalculator::std_dev(&self.dataset()?.numeric_values(column)?))
    }

    pub fn histogram(&self, column: &str, sink: &mut dyn ChartSink) -> Result<(), ProcessorError> {
        let values = self.dataset()?.numeric_values(column)?;
        let bins = StatsCalculator::histogram_bins(&values, self.histogram_bins);

        log::debug!("histogram of {}: {} values", column, values.len());
        sink.render(Chart::Histogram(HistogramChart::new(column, bins)));
        Ok(())
    }

    /// Mean of `y_column` per distinct value of `x_column`.
    ///
    /// Numeric categories are ordered by value, text categories by first appearance.
    pub fn bar_chart(
        &self,
        x_column: &str,
        y_column: &str,
        sink: &mut dyn ChartSink,
    ) -> Result<(), ProcessorError> {
        let dataset = self.dataset()?;
        let labels = dataset.category_labels(x_column)?;
        let values = dataset.numeric_column(y_column)?;

        let bars = if dataset.is_numeric(x_column)? {
            let keys = dataset.numeric_column(x_column)?;
            let labels: Vec<Option<String>> = labels
                .into_iter()
                .zip(keys.iter().copied())
                .map(|(label, key)| key.and(label))
                .collect();
            let order: HashMap<&str, f64> = labels
                .iter()
                .zip(keys.iter())
                .filter_map(|(label, key)| Some((label.as_deref()?, (*key)?)))
                .collect();

            let mut bars = StatsCalculator::group_means(&labels, &values);
            bars.sort_by(|a, b| {
                let ka = order.get(a.label.as_str()).copied().unwrap_or(f64::NAN);
                let kb = order.get(b.label.as_str()).copied().unwrap_or(f64::NAN);
                ka.total_cmp(&kb)
            });
            bars
        } else {
            StatsCalculator::group_means(&labels, &values)
        };

        log::debug!("bar chart {} vs {}: {} bars", x_column, y_column, bars.len());
        sink.render(Chart::Bar(GroupedBarChart::new(x_column, y_column, bars)));
        Ok(())
    }
}
