//! Panel orchestration and layout management.
//!
//! Coordinates the header, ruler and status panels.

use crate::app::AppState;
use crate::ui::{header, ruler_panel, status_bar};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// User requested to reset the ruler
    ResetRequested,
    /// User toggled pinch-to-zoom
    ZoomToggled(bool),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::ResetRequested => PanelInteraction::ResetRequested,
                    header::HeaderInteraction::ZoomToggled(enabled) => PanelInteraction::ZoomToggled(enabled),
                });
            }
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        let ruler_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(0))
            .fill(state.theme.colors().ruler_background);

        egui::CentralPanel::default()
            .frame(ruler_frame)
            .show(ctx, |ui| {
                ruler_panel::render_ruler_panel(ui, ctx, state);
            });

        interaction
    }
}
