//! State management modules for the time ruler.
//!
//! This module contains state-only logic (no UI concerns):
//! - Ruler state (offset, scale, gesture phase, derived tick layout)
//! - Theme state (theme manager, current theme)

mod ruler_state;
mod theme_state;

pub use ruler_state::RulerState;
pub use theme_state::ThemeState;
