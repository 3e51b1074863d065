//! Native blocking dialogs (file picker, information and error boxes).

use crate::processor::ProcessorError;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;

/// Ask for a CSV file. `None` when the user cancels.
pub fn pick_csv_file() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Load CSV")
        .add_filter("CSV Files", &["csv"])
        .pick_file()
}

pub fn show_info(title: &str, message: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn show_error(error: &ProcessorError) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Error")
        .set_description(error.to_string())
        .set_buttons(MessageButtons::Ok)
        .show();
}
