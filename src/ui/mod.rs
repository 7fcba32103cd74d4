//! UI panel rendering subsystem
//!
//! - Header panel (reset, zoom toggle, theme selector)
//! - Ruler panel (the interactive ruler canvas)
//! - Status bar (selected time, scale, gesture state)
//! - Panel manager (panel orchestration and layout)
//! - Input handling (pointer and touch gestures)

pub mod header;
pub mod ruler_panel;
pub mod status_bar;
pub mod panel_manager;
pub mod input;
