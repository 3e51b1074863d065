//! Application Settings
//! Compiled-in defaults shared by the processor and the GUI shell.

/// Number of equal-width bins used for histograms.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Rows scanned by the CSV reader to infer column types.
pub const DEFAULT_INFER_SCHEMA_LENGTH: usize = 10_000;

/// Runtime settings. Nothing is persisted; every run starts from `Default`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub histogram_bins: usize,
    pub infer_schema_length: Option<usize>,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            infer_schema_length: Some(DEFAULT_INFER_SCHEMA_LENGTH),
            window_size: [1000.0, 700.0],
            min_window_size: [640.0, 480.0],
        }
    }
}

impl AppSettings {
    /// Override the histogram bin count (clamped to at least one bin).
    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins.max(1);
        self
    }
}
