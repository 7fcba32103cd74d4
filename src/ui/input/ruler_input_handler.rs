//! Ruler input handling for tapping, panning and zooming.
//!
//! This module translates egui pointer/touch input over the ruler canvas
//! into ruler gestures:
//! - Press on the ruler: tap (stops momentum)
//! - Drag: pan by the horizontal drag delta
//! - Drag release: momentum seeded by the pointer's horizontal velocity
//! - Pinch or Ctrl + mouse wheel: zoom by the incremental zoom factor
//!
//! All gestures recognized within a frame are applied together.

use eframe::egui;
use time_ruler::{GestureFrame, TimeRuler};

/// Result of ruler input handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulerInputResult {
    /// No gesture was recognized
    None,
    /// Offset or scale may have changed
    RulerUpdated,
}

/// Collects the gestures recognized over the canvas this frame.
///
/// # Arguments
/// * `ctx` - The egui context for input access
/// * `canvas_rect` - The ruler canvas rectangle
/// * `canvas_response` - The canvas interaction response
pub fn collect_gestures(
    ctx: &egui::Context,
    canvas_rect: egui::Rect,
    canvas_response: &egui::Response,
) -> GestureFrame {
    let mut frame = GestureFrame::default();

    // A fresh press that started on the ruler counts as a tap
    frame.tap = ctx.input(|i| {
        i.pointer.any_pressed()
            && i.pointer
                .press_origin()
                .is_some_and(|pos| canvas_rect.contains(pos))
    });

    if canvas_response.dragged() {
        let delta_x = canvas_response.drag_delta().x;
        if delta_x != 0.0 {
            frame.pan_delta = Some(delta_x);
        }
    }

    if canvas_response.drag_stopped() {
        frame.pan_release_velocity = Some(ctx.input(|i| i.pointer.velocity().x));
    }

    // zoom_delta covers both touch pinches and Ctrl + wheel
    let hovering = ctx.input(|i| i.pointer.hover_pos()).is_some_and(|pos| canvas_rect.contains(pos));
    if hovering || canvas_response.dragged() {
        let zoom = ctx.input(|i| i.zoom_delta());
        if zoom != 1.0 {
            frame.pinch_factor = Some(zoom);
        }
    }

    frame
}

/// Handles all ruler input events and updates the ruler state.
///
/// # Returns
/// The result of input handling
pub fn handle_ruler_input(
    ctx: &egui::Context,
    canvas_rect: egui::Rect,
    canvas_response: &egui::Response,
    ruler: &mut TimeRuler,
) -> RulerInputResult {
    let frame = collect_gestures(ctx, canvas_rect, canvas_response);
    if frame.is_empty() {
        return RulerInputResult::None;
    }

    ruler.apply(&frame);
    RulerInputResult::RulerUpdated
}
