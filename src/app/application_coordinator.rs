//! Application-level coordination.
//!
//! Handles configuration loading, header actions and the per-frame
//! advancement of the ruler's release momentum.

use crate::app::AppState;
use std::path::Path;
use time_ruler::RulerConfig;

/// Coordinates application-level operations.
///
/// This struct is responsible for:
/// - Loading the ruler configuration and reporting failures
/// - Applying header actions (reset, zoom toggle)
/// - Driving the momentum animation and scheduling repaints
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Loads a ruler configuration file.
    ///
    /// On failure the defaults stay in place and the error is shown in the header.
    pub fn load_config(state: &mut AppState, path: &Path) {
        match RulerConfig::from_json_file(path) {
            Ok(config) => {
                log::info!("loaded ruler config from {}", path.display());
                state.ruler.apply_config(config);
                state.error_message = None;
            }
            Err(e) => {
                log::warn!("using default ruler config: {:#}", e);
                state.error_message = Some(format!("Error loading config: {:#}", e));
            }
        }
    }

    /// Returns the ruler to midnight at scale 1.
    pub fn reset_ruler(state: &mut AppState) {
        state.ruler.ruler_mut().reset();
    }

    /// Turns pinch-to-zoom on or off.
    pub fn set_zoom_enabled(state: &mut AppState, enabled: bool) {
        log::info!("zoom {}", if enabled { "enabled" } else { "disabled" });
        state.ruler.ruler_mut().set_zoom_enabled(enabled);
    }

    /// Advances release momentum by `dt` seconds.
    ///
    /// Called once per frame. Keeps requesting repaints while the ruler is
    /// still coasting, since egui only repaints on input otherwise.
    pub fn advance_animation(state: &mut AppState, dt: f32, ctx: &egui::Context) {
        state.ruler.ruler_mut().advance(dt);
        if state.ruler.ruler().is_animating() {
            ctx.request_repaint();
        }
    }
}
