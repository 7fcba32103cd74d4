//! Time Ruler GUI Application
//!
//! An interactive 24-hour time ruler built on egui. The ruler strip:
//! - Scrolls horizontally by dragging, with momentum after release
//! - Zooms with pinch or Ctrl + mouse wheel (scale clamped to [1, 4])
//! - Repeats seamlessly every 24 hours around a fixed center indicator
//! - Shows the time under the indicator in the status bar
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - Ruler and theme state
//! - `ui/` - Panel rendering and input handling
//! - `rendering/` - Low-level painting of the ruler strip and indicator
//! - `utils/` - Formatting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod utils;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator, SettingsCoordinator};
use ui::panel_manager::PanelManager;

const ZOOM_ENABLED_KEY: &str = "zoom_enabled";

/// Main application entry point that initializes logging and launches the ruler window.
fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional JSON file overriding the ruler configuration
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 320.0])
            .with_title("Time Ruler"),
        ..Default::default()
    };

    log::info!("starting time ruler");

    eframe::run_native(
        "Time Ruler",
        options,
        Box::new(move |cc| Ok(Box::new(TimeRulerApp::new(cc, config_path)))),
    )
}

/// The time ruler application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` handles configuration loading and header actions
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct TimeRulerApp {
    state: AppState,
}

impl TimeRulerApp {
    /// Creates the application with UI preferences restored from persistent storage.
    fn new(cc: &eframe::CreationContext, config_path: Option<PathBuf>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let mut state = AppState::with_theme(theme_name);

        if let Some(path) = config_path {
            ApplicationCoordinator::load_config(&mut state, &path);
        }

        // A stored preference wins over the config file default
        if let Some(zoom_enabled) = SettingsCoordinator::try_load_setting::<bool>(cc.storage, ZOOM_ENABLED_KEY) {
            state.ruler.ruler_mut().set_zoom_enabled(zoom_enabled);
        }

        Self { state }
    }

    /// Handles panel interactions by delegating to ApplicationCoordinator.
    fn handle_panel_interaction(&mut self, interaction: ui::panel_manager::PanelInteraction) {
        match interaction {
            ui::panel_manager::PanelInteraction::ResetRequested => {
                ApplicationCoordinator::reset_ruler(&mut self.state);
            }
            ui::panel_manager::PanelInteraction::ZoomToggled(enabled) => {
                ApplicationCoordinator::set_zoom_enabled(&mut self.state, enabled);
            }
        }
    }
}

impl eframe::App for TimeRulerApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, ZOOM_ENABLED_KEY, &self.state.ruler.ruler().zoom_enabled());
    }

    /// Main update loop:
    /// 1. Apply theme
    /// 2. Advance release momentum
    /// 3. Render all panels via PanelManager
    /// 4. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        let dt = ctx.input(|i| i.stable_dt);
        ApplicationCoordinator::advance_animation(&mut self.state, dt, ctx);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }
    }
}
