//! Chart Viewer Widget
//! Opens one floating window per rendered chart.

use crate::charts::{Chart, ChartPlotter, ChartSink};

const WINDOW_SIZE: [f32; 2] = [560.0, 420.0];

struct ChartWindow {
    id: u64,
    chart: Chart,
    open: bool,
}

/// Chart windows currently on screen.
#[derive(Default)]
pub struct ChartViewer {
    windows: Vec<ChartWindow>,
    next_id: u64,
}

impl ChartViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while at least one chart window is open.
    pub fn has_open_charts(&self) -> bool {
        !self.windows.is_empty()
    }

    /// Draw every open chart window, dropping the ones the user closed.
    pub fn show(&mut self, ctx: &egui::Context) {
        for window in &mut self.windows {
            let mut close_clicked = false;

            egui::Window::new(window.chart.title())
                .id(egui::Id::new(("chart_window", window.id)))
                .open(&mut window.open)
                .default_size(WINDOW_SIZE)
                .collapsible(false)
                .show(ctx, |ui| {
                    match &window.chart {
                        Chart::Histogram(chart) => ChartPlotter::draw_histogram(ui, chart),
                        Chart::Bar(chart) => ChartPlotter::draw_bar_chart(ui, chart),
                    }
                    ui.add_space(6.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("Close").clicked() {
                            close_clicked = true;
                        }
                    });
                });

            if close_clicked {
                window.open = false;
            }
        }

        self.windows.retain(|w| w.open);
    }
}

impl ChartSink for ChartViewer {
    fn render(&mut self, chart: Chart) {
        log::debug!("opening chart window: {}", chart.title());
        self.windows.push(ChartWindow {
            id: self.next_id,
            chart,
            open: true,
        });
        self.next_id += 1;
    }
}
