//! Fixed center indicator rendering.

use eframe::egui;
use time_ruler::{indicator_anchor, RulerConfig, ThemeColors};

/// Draws the selection indicator at the horizontal center of the canvas.
///
/// The indicator ignores offset and scale; the ruler moves underneath it.
pub fn render_indicator(
    painter: &egui::Painter,
    canvas_rect: egui::Rect,
    config: &RulerConfig,
    colors: &ThemeColors,
) {
    let x = canvas_rect.left() + indicator_anchor(canvas_rect.width());
    let indicator_rect = egui::Rect::from_min_size(
        egui::pos2(x, canvas_rect.top()),
        egui::vec2(config.indicator_width, config.indicator_height),
    );
    painter.rect_filled(indicator_rect, 0.0, colors.indicator);
}
