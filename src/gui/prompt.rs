//! Column Prompt
//! Modal single-choice dialog. Yields the chosen column, or nothing on cancel.

use egui::{ComboBox, RichText};

/// State of a prompt after one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Pending,
    Closed(Option<String>),
}

pub struct ColumnPrompt {
    title: String,
    choices: Vec<String>,
    selected: Option<String>,
}

impl ColumnPrompt {
    pub fn new(title: &str, choices: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            choices,
            selected: None,
        }
    }

    /// Value the prompt would return if confirmed now.
    fn confirmed(&self) -> Option<String> {
        self.selected.clone().filter(|s| !s.is_empty())
    }

    /// Draw the modal. Escape or a click outside counts as cancel.
    pub fn show(&mut self, ctx: &egui::Context) -> PromptResponse {
        let mut response = PromptResponse::Pending;
        let confirmed = self.confirmed();
        let can_confirm = confirmed.is_some();

        let modal = egui::Modal::new(egui::Id::new("column_prompt")).show(ctx, |ui| {
            ui.set_width(240.0);
            ui.label(RichText::new(self.title.as_str()).size(16.0).strong());
            ui.add_space(8.0);

            ComboBox::from_id_salt("column_prompt_choice")
                .width(220.0)
                .selected_text(self.selected.as_deref().unwrap_or("Choose a column"))
                .show_ui(ui, |ui| {
                    for choice in &self.choices {
                        ui.selectable_value(
                            &mut self.selected,
                            Some(choice.clone()),
                            choice.as_str(),
                        );
                    }
                });

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(can_confirm, egui::Button::new("Okay"))
                    .clicked()
                {
                    response = PromptResponse::Closed(confirmed.clone());
                }
                if ui.button("Cancel").clicked() {
                    response = PromptResponse::Closed(None);
                }
            });
        });

        if response == PromptResponse::Pending && modal.should_close() {
            response = PromptResponse::Closed(None);
        }
        response
    }
}
