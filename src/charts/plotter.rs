//! Chart Plotter Module
//! Draws histograms and grouped bar charts using egui_plot.

use crate::charts::{GroupedBarChart, HistogramChart};
use egui::Color32;
use egui_plot::{Bar, BarChart, GridMark, Plot};

/// Fill color for histogram bars
pub const HISTOGRAM_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219), // Blue
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

const PLOT_HEIGHT: f32 = 320.0;

/// Renders chart descriptions into an egui `Ui`.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Color for the bar at `index`.
    pub fn bar_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Label for an x-axis grid mark over categorical bars at 0, 1, 2, ...
    pub fn category_label(labels: &[String], value: f64) -> String {
        let idx = value.round();
        if (value - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    }

    /// Draw a histogram: one bar per bin, touching neighbours.
    pub fn draw_histogram(ui: &mut egui::Ui, chart: &HistogramChart) {
        let bars: Vec<Bar> = chart
            .bins
            .iter()
            .map(|bin| {
                Bar::new(bin.center(), bin.count as f64)
                    .width(bin.width())
                    .name(format!("{:.3} – {:.3}", bin.start, bin.end))
            })
            .collect();

        Plot::new(format!("histogram_{}", chart.x_label))
            .height(PLOT_HEIGHT)
            .allow_scroll(false)
            .x_axis_label(chart.x_label.as_str())
            .y_axis_label(chart.y_label.as_str())
            .include_y(0.0)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .color(HISTOGRAM_COLOR)
                        .name(chart.x_label.as_str()),
                );
            });
    }

    /// Draw one bar per category, categories laid out at integer x positions.
    pub fn draw_bar_chart(ui: &mut egui::Ui, chart: &GroupedBarChart) {
        let labels: Vec<String> = chart.bars.iter().map(|b| b.label.clone()).collect();
        let n = labels.len();

        let bars: Vec<Bar> = chart
            .bars
            .iter()
            .enumerate()
            .map(|(i, group)| {
                let color = Self::bar_color(i);
                Bar::new(i as f64, group.mean)
                    .width(0.8)
                    .name(format!("{} (n={})", group.label, group.count))
                    .fill(color.gamma_multiply(0.8))
                    .stroke(egui::Stroke::new(1.0, color))
            })
            .collect();

        Plot::new(format!("bar_{}_{}", chart.x_label, chart.y_label))
            .height(PLOT_HEIGHT)
            .allow_scroll(false)
            .x_axis_label(chart.x_label.as_str())
            .y_axis_label(chart.y_label.as_str())
            .include_y(0.0)
            .x_grid_spacer(move |_input| {
                (0..n)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| Self::category_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).name(chart.y_label.as_str()));
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_only_on_whole_positions() {
        let labels = vec!["north".to_string(), "south".to_string()];
        assert_eq!(ChartPlotter::category_label(&labels, 0.0), "north");
        assert_eq!(ChartPlotter::category_label(&labels, 1.0), "south");
        assert_eq!(ChartPlotter::category_label(&labels, 0.5), "");
        assert_eq!(ChartPlotter::category_label(&labels, 2.0), "");
        assert_eq!(ChartPlotter::category_label(&labels, -1.0), "");
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(ChartPlotter::bar_color(0), ChartPlotter::bar_color(PALETTE.len()));
    }
}
