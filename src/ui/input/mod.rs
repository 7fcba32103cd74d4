//! Input handling subsystem for UI interactions.
//!
//! - Ruler input handling (tap, pan, pinch/wheel zoom, release momentum)

pub mod ruler_input_handler;
