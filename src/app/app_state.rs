//! Centralized application state for the time ruler.
//!
//! The state is composed of focused components that each manage one aspect
//! of the application, which keeps invariants local and lets the UI borrow
//! the ruler and the theme independently.

use crate::state::{RulerState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// Ruler offset/scale, gestures and derived layout
    pub ruler: RulerState,

    /// Theme and styling state
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            ruler: RulerState::new(),
            theme: ThemeState::new(),
            error_message: None,
        }
    }

    /// Creates a new AppState with a specific theme loaded from storage.
    pub fn with_theme(theme_name: String) -> Self {
        Self {
            ruler: RulerState::new(),
            theme: ThemeState::with_theme(theme_name),
            error_message: None,
        }
    }
}
