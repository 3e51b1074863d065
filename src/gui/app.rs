//! Data Processor Main Application
//! Control panel on the left; chart, data and prompt windows float over the rest.

use crate::gui::actions::{self, Outcome, PromptRequest};
use crate::gui::dialogs;
use crate::gui::{
    ChartViewer, ColumnPrompt, ControlPanel, ControlPanelAction, DatasetViewer, PromptResponse,
};
use crate::processor::{Processor, ProcessorError};
use crate::settings::AppSettings;
use egui::{RichText, SidePanel};

/// Main application window. Owns the single processor instance.
pub struct DataProcessorApp {
    processor: Processor,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    data_viewer: Option<DatasetViewer>,
    prompt: Option<(PromptRequest, ColumnPrompt)>,
}

impl DataProcessorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: &AppSettings) -> Self {
        Self::with_processor(Processor::new(settings))
    }

    pub fn with_processor(processor: Processor) -> Self {
        Self {
            processor,
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
            data_viewer: None,
            prompt: None,
        }
    }

    /// The shell is blocked while a prompt or a chart window is open.
    fn is_blocked(&self) -> bool {
        self.prompt.is_some() || self.chart_viewer.has_open_charts()
    }

    fn handle_action(&mut self, action: ControlPanelAction) {
        match action {
            ControlPanelAction::LoadCsv => self.handle_load_csv(),
            ControlPanelAction::ShowData => self.handle_show_data(),
            ControlPanelAction::Statistic(kind) => {
                self.open_prompt(PromptRequest::Statistic(kind))
            }
            ControlPanelAction::Histogram => self.open_prompt(PromptRequest::Histogram),
            ControlPanelAction::BarChart => self.open_prompt(PromptRequest::BarX),
            ControlPanelAction::None => {}
        }
    }

    /// Handle CSV file selection
    fn handle_load_csv(&mut self) {
        let Some(path) = dialogs::pick_csv_file() else {
            log::debug!("file selection cancelled");
            return;
        };

        match self.processor.load(&path) {
            Ok(summary) => {
                self.control_panel.set_status(&format!(
                    "Loaded {} rows, {} columns",
                    summary.rows, summary.columns
                ));
                dialogs::show_info("File Loading", "CSV loaded successfully.");
            }
            Err(e) => self.report_error(&e),
        }
    }

    fn handle_show_data(&mut self) {
        match self.processor.dataset() {
            Ok(dataset) => self.data_viewer = Some(DatasetViewer::from_dataset(dataset)),
            Err(e) => self.report_error(&e),
        }
    }

    /// Open the column prompt; requires a loaded dataset for its choices.
    fn open_prompt(&mut self, request: PromptRequest) {
        match self.processor.column_names() {
            Ok(choices) => {
                let prompt = ColumnPrompt::new(request.title(), choices);
                self.prompt = Some((request, prompt));
            }
            Err(e) => self.report_error(&e),
        }
    }

    fn finish_prompt(&mut self, request: PromptRequest, selection: Option<String>) {
        let Some(column) = selection else {
            log::debug!("column prompt cancelled ({:?})", request);
            return;
        };

        match actions::resolve(request, column, &self.processor, &mut self.chart_viewer) {
            Ok(Outcome::Notify { title, message }) => dialogs::show_info(title, &message),
            Ok(Outcome::Rendered) => {}
            Ok(Outcome::Prompt(next)) => self.open_prompt(next),
            Err(e) => self.report_error(&e),
        }
    }

    fn report_error(&mut self, error: &ProcessorError) {
        log::warn!("{}", error);
        self.control_panel.set_error(&error.to_string());
        dialogs::show_error(error);
    }
}

impl eframe::App for DataProcessorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let blocked = self.is_blocked();
        let source = self
            .processor
            .dataset()
            .ok()
            .map(|d| d.source().to_path_buf());

        // Left panel - Control Panel
        let mut action = ControlPanelAction::None;
        SidePanel::left("control_panel")
            .resizable(false)
            .min_width(230.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_enabled_ui(!blocked, |ui| {
                        action = self.control_panel.show(ui, source.as_deref());
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.processor.is_loaded() {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("Load a CSV file to begin").size(18.0));
                });
            }
        });

        self.handle_action(action);

        self.chart_viewer.show(ctx);

        if let Some(viewer) = &mut self.data_viewer {
            if !viewer.show(ctx) {
                self.data_viewer = None;
            }
        }

        let response = self.prompt.as_mut().map(|(_, prompt)| prompt.show(ctx));
        if let Some(PromptResponse::Closed(selection)) = response {
            if let Some((request, _)) = self.prompt.take() {
                self.finish_prompt(request, selection);
            }
        }
    }
}
