//! Data Viewer Window
//! Scrollable table of every row of the loaded dataset.

use crate::data::Dataset;
use egui_extras::{Column as TableColumn, TableBuilder};

const ROW_HEIGHT: f32 = 18.0;
const HEADER_HEIGHT: f32 = 22.0;

/// Snapshot of the dataset taken when the window was opened.
/// Closing the window never touches the processor.
pub struct DatasetViewer {
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    open: bool,
}

impl DatasetViewer {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let headers = dataset.column_names();
        let rows = (0..dataset.row_count())
            .map(|row| {
                (0..headers.len())
                    .map(|col| dataset.cell_text(row, col))
                    .collect()
            })
            .collect();

        let file_name = dataset
            .source()
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            title: format!("Data Viewer: {}", file_name),
            headers,
            rows,
            open: true,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Draw the window. Returns false once the user closed it.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut close_clicked = false;

        egui::Window::new(self.title.as_str())
            .id(egui::Id::new("data_viewer"))
            .open(&mut self.open)
            .default_size([640.0, 420.0])
            .resizable(true)
            .show(ctx, |ui| {
                ui.label(format!(
                    "{} rows, {} columns",
                    self.rows.len(),
                    self.headers.len()
                ));
                ui.separator();

                let table_height = (ui.available_height() - 40.0).max(120.0);
                egui::ScrollArea::horizontal().show(ui, |ui| {
                    TableBuilder::new(ui)
                        .striped(true)
                        .resizable(true)
                        .max_scroll_height(table_height)
                        .columns(
                            TableColumn::initial(100.0).at_least(40.0).clip(true),
                            self.headers.len(),
                        )
                        .header(HEADER_HEIGHT, |mut header| {
                            for name in &self.headers {
                                header.col(|ui| {
                                    ui.strong(name.as_str());
                                });
                            }
                        })
                        .body(|body| {
                            body.rows(ROW_HEIGHT, self.rows.len(), |mut row| {
                                let cells = &self.rows[row.index()];
                                for cell in cells {
                                    row.col(|ui| {
                                        ui.label(cell.as_str());
                                    });
                                }
                            });
                        });
                });

                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    if ui.button("Close").clicked() {
                        close_clicked = true;
                    }
                });
            });

        if close_clicked {
            self.open = false;
        }
        self.open
    }
}
