//! Shell Actions
//! Maps a confirmed column choice onto the matching processor call.

use crate::charts::ChartSink;
use crate::processor::{Processor, ProcessorError};

/// Scalar statistics offered by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Mean,
    Median,
    StdDev,
}

impl StatKind {
    /// Title of the result dialog.
    pub fn title(self) -> &'static str {
        match self {
            StatKind::Mean => "Mean",
            StatKind::Median => "Median",
            StatKind::StdDev => "Standard Deviation",
        }
    }

    pub fn compute(self, processor: &Processor, column: &str) -> Result<f64, ProcessorError> {
        match self {
            StatKind::Mean => processor.mean(column),
            StatKind::Median => processor.median(column),
            StatKind::StdDev => processor.stddev(column),
        }
    }
}

/// What a pending column prompt will be used for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRequest {
    Statistic(StatKind),
    Histogram,
    BarX,
    BarY { x_column: String },
}

impl PromptRequest {
    pub fn title(&self) -> &'static str {
        match self {
            PromptRequest::Statistic(_) | PromptRequest::Histogram => "Select Column",
            PromptRequest::BarX => "Select X Column",
            PromptRequest::BarY { .. } => "Select Y Column",
        }
    }
}

/// Result of resolving a prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Show a blocking information dialog.
    Notify { title: &'static str, message: String },
    /// A chart was handed to the sink.
    Rendered,
    /// Another column is needed before anything runs.
    Prompt(PromptRequest),
}

/// Render a scalar the way it is shown to the user.
pub fn format_scalar(value: f64) -> String {
    format!("{:?}", value)
}

/// Run the operation behind `request` with the chosen `column`.
pub fn resolve(
    request: PromptRequest,
    column: String,
    processor: &Processor,
    sink: &mut dyn ChartSink,
) -> Result<Outcome, ProcessorError> {
    match request {
        PromptRequest::Statistic(kind) => {
            let value = kind.compute(processor, &column)?;
            Ok(Outcome::Notify {
                title: kind.title(),
                message: format_scalar(value),
            })
        }
        PromptRequest::Histogram => {
            processor.histogram(&column, sink)?;
            Ok(Outcome::Rendered)
        }
        PromptRequest::BarX => Ok(Outcome::Prompt(PromptRequest::BarY { x_column: column })),
        PromptRequest::BarY { x_column } => {
            processor.bar_chart(&x_column, &column, sink)?;
            Ok(Outcome::Rendered)
        }
    }
}
