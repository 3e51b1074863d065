//! GUI module - User interface components

pub mod actions;
mod app;
mod chart_viewer;
mod control_panel;
mod data_viewer;
mod dialogs;
mod prompt;

pub use actions::{Outcome, PromptRequest, StatKind};
pub use app::DataProcessorApp;
pub use chart_viewer::ChartViewer;
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use data_viewer::DatasetViewer;
pub use prompt::{ColumnPrompt, PromptResponse};
