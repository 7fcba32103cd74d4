//! Header panel UI rendering
//!
//! Handles the top bar with the reset button, zoom controls and theme selector.

use eframe::egui;
use egui::Color32;
use crate::app::AppState;
use crate::utils::format_scale;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked "Reset"
    ResetRequested,
    /// User toggled pinch-to-zoom
    ZoomToggled(bool),
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("⟲ Reset").on_hover_text("Back to 00:00 at scale 1").clicked() {
            interaction = Some(HeaderInteraction::ResetRequested);
        }

        ui.separator();

        let mut zoom_enabled = state.ruler.ruler().zoom_enabled();
        if ui.checkbox(&mut zoom_enabled, "🔍 Pinch Zoom").changed() {
            interaction = Some(HeaderInteraction::ZoomToggled(zoom_enabled));
        }

        ui.add_enabled_ui(zoom_enabled, |ui| {
            ui.label(format!("Scale: {}", format_scale(state.ruler.ruler().scale())));
        });

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(
                            &mut current_theme,
                            theme_name.to_string(),
                            theme_name
                        );
                    }
                });

            if old_theme != current_theme {
                log::debug!("theme changed to {}", current_theme);
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
