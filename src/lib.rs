//! Data Processor - CSV Descriptive Statistics & Chart Viewer
//!
//! Loads a CSV file, computes mean / median / standard deviation per column
//! and draws histograms and grouped bar charts.

pub mod charts;
pub mod data;
pub mod gui;
pub mod processor;
pub mod settings;
pub mod stats;

pub use processor::{DatasetState, LoadSummary, Processor, ProcessorError};
