//! Control Panel Widget
//! Left side panel with one button per processor operation.

use crate::gui::StatKind;
use egui::{Color32, RichText};
use std::path::Path;

const BUTTON_SIZE: [f32; 2] = [200.0, 30.0];

/// Left side control panel with file info, action buttons and status line.
pub struct ControlPanel {
    pub status: String,
    pub status_is_error: bool,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
            status_is_error: false,
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui, source: Option<&Path>) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Data Processor")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== CSV File Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                let path_text = source
                    .and_then(|p| p.file_name())
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "No file loaded".to_string());

                ui.label(RichText::new(&path_text).size(12.0).color(if source.is_some() {
                    ui.visuals().strong_text_color()
                } else {
                    Color32::GRAY
                }));
            });

        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let buttons = [
                ("📂 Load CSV", ControlPanelAction::LoadCsv),
                ("📋 Show Data", ControlPanelAction::ShowData),
                (
                    "Calculate Mean",
                    ControlPanelAction::Statistic(StatKind::Mean),
                ),
                (
                    "Calculate Median",
                    ControlPanelAction::Statistic(StatKind::Median),
                ),
                (
                    "Calculate Std Dev",
                    ControlPanelAction::Statistic(StatKind::StdDev),
                ),
                ("Generate Histogram", ControlPanelAction::Histogram),
                ("Generate Bar Chart", ControlPanelAction::BarChart),
            ];

            for (label, button_action) in buttons {
                let button = egui::Button::new(RichText::new(label).size(14.0))
                    .min_size(egui::vec2(BUTTON_SIZE[0], BUTTON_SIZE[1]));
                if ui.add(button).clicked() {
                    action = button_action;
                }
                ui.add_space(4.0);
            }
        });

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status_is_error {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set status line text
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, error: &str) {
        self.status = format!("Error: {}", error);
        self.status_is_error = true;
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    LoadCsv,
    ShowData,
    Statistic(StatKind),
    Histogram,
    BarChart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_is_flagged_until_next_status() {
        let mut panel = ControlPanel::new();
        panel.set_error("Column not found: Z");
        assert_eq!(panel.status, "Error: Column not found: Z");
        assert!(panel.status_is_error);

        panel.set_status("Loaded 5 rows, 2 columns");
        assert!(!panel.status_is_error);
    }
}
