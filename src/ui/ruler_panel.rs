//! Ruler panel UI rendering
//!
//! Allocates the ruler canvas, feeds its input to the gesture state machine
//! and paints the strip and indicator.

use crate::app::AppState;
use crate::rendering::{indicator_overlay, ruler_renderer};
use crate::ui::input::ruler_input_handler::{self, RulerInputResult};
use time_ruler::TimeRuler;

/// A release hands over to momentum, which needs the next frame right away.
fn needs_repaint(input_result: RulerInputResult, ruler: &TimeRuler) -> bool {
    input_result == RulerInputResult::RulerUpdated && ruler.is_animating()
}

/// Renders the ruler canvas filling the remaining panel space.
pub fn render_ruler_panel(ui: &mut egui::Ui, ctx: &egui::Context, state: &mut AppState) {
    let (canvas_response, painter) =
        ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
    let canvas_rect = canvas_response.rect;

    let input_result = ruler_input_handler::handle_ruler_input(
        ctx,
        canvas_rect,
        &canvas_response,
        state.ruler.ruler_mut(),
    );

    if needs_repaint(input_result, state.ruler.ruler()) {
        ctx.request_repaint();
    }

    let config = state.ruler.ruler().config().clone();
    let scale = state.ruler.ruler().scale();
    let colors = state.theme.colors();
    let ticks = state.ruler.ticks(canvas_rect.width());

    ruler_renderer::render_ruler(&painter, canvas_rect, ticks, &config, scale, colors);
    indicator_overlay::render_indicator(&painter, canvas_rect, &config, colors);

    if canvas_response.hovered() {
        ctx.set_cursor_icon(if canvas_response.dragged() {
            egui::CursorIcon::Grabbing
        } else {
            egui::CursorIcon::Grab
        });
    }
}
