//! Ruler strip rendering logic
//!
//! Paints the background, hour ticks with their labels and minute ticks.
//! Tick positions arrive pre-computed in canonical band coordinates; every
//! tick is painted once per band replica that intersects the canvas.

use eframe::egui;
use time_ruler::{band_width, label_x, replicas, RulerConfig, ThemeColors, TickKind, TickMark};

/// Extra room left and right of the canvas so labels slide in and out smoothly
const EDGE_MARGIN: f32 = 24.0;

/// Renders the ruler strip
///
/// # Arguments
/// * `painter` - Painter clipped to the canvas
/// * `canvas_rect` - The rectangular area of the ruler
/// * `ticks` - Tick marks in canvas-relative canonical coordinates
/// * `config` - Ruler geometry
/// * `scale` - Current zoom factor
/// * `colors` - The color palette for the current theme
pub fn render_ruler(
    painter: &egui::Painter,
    canvas_rect: egui::Rect,
    ticks: &[TickMark],
    config: &RulerConfig,
    scale: f32,
    colors: &ThemeColors,
) {
    painter.rect_filled(canvas_rect, 0.0, colors.ruler_background);

    let band = band_width(config, scale);
    if band.is_nan() || band <= 0.0 {
        return;
    }

    let label_font = egui::FontId::monospace(config.label_font_size);

    for tick in ticks {
        for x in replicas(tick.x, band, -EDGE_MARGIN, canvas_rect.width() + EDGE_MARGIN) {
            let left = canvas_rect.left() + x;
            let tick_rect = egui::Rect::from_min_size(
                egui::pos2(left, canvas_rect.top()),
                egui::vec2(tick.width, tick.height),
            );

            match &tick.kind {
                TickKind::Hour { hour, label } => {
                    painter.rect_filled(tick_rect, 0.0, colors.hour_tick);
                    painter.text(
                        egui::pos2(
                            canvas_rect.left() + label_x(x, *hour),
                            canvas_rect.top() + config.label_baseline,
                        ),
                        egui::Align2::LEFT_BOTTOM,
                        label,
                        label_font.clone(),
                        colors.label,
                    );
                }
                TickKind::Minute { .. } => {
                    painter.rect_filled(tick_rect, 0.0, colors.minute_tick);
                }
            }
        }
    }
}
