//! Rendering subsystem for painting the ruler
//!
//! - Ruler strip rendering (background, ticks, hour labels)
//! - Indicator overlay (fixed center marker)

pub mod ruler_renderer;
pub mod indicator_overlay;
