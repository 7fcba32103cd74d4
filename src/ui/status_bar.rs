//! Status bar UI rendering
//!
//! Displays the time under the indicator and the ruler's gesture state.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::utils::{format_offset, format_scale, format_time_of_day};

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let ruler = state.ruler.ruler();
    let colors = state.theme.colors();

    ui.horizontal(|ui| {
        let selected = format_time_of_day(ruler.selected_hours(), ruler.config().total_hours);
        ui.label(RichText::new(format!("Selected: {}", selected)).strong().color(colors.indicator));
        ui.label(RichText::new("|").strong());
        ui.label(format!("Scale: {}", format_scale(ruler.scale())));
        ui.label(RichText::new("|").strong());
        ui.label(format!("Offset: {}", format_offset(ruler.offset())));
        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!("Gesture: {}", ruler.phase())).color(colors.text_dim));
    });
}
