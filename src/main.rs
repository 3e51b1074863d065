//! Data Processor - CSV Descriptive Statistics & Chart Viewer

use anyhow::anyhow;
use data_processor::gui::DataProcessorApp;
use data_processor::settings::AppSettings;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = AppSettings::default();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size(settings.min_window_size)
            .with_title("Data Processor"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Data Processor",
        options,
        Box::new(move |cc| Ok(Box::new(DataProcessorApp::new(cc, &settings)))),
    )
    .map_err(|e| anyhow!("failed to start the GUI: {e}"))
}
