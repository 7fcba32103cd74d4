//! Ruler state management.
//!
//! This module pairs the ruler component (offset, scale, gesture phase) with
//! the tick layout derived from it, so the layout is only recomputed when the
//! ruler or the viewport actually changed.

use time_ruler::{RulerConfig, TickLayoutCache, TickMark, TimeRuler};

/// State of the ruler strip.
///
/// Responsibilities:
/// - Owning the ruler's offset/scale and gesture state machine
/// - Caching the tick layout derived from them
#[derive(Debug, Default)]
pub struct RulerState {
    /// The ruler component
    ruler: TimeRuler,
    /// Tick positions derived from the ruler and viewport
    layout_cache: TickLayoutCache,
}

impl RulerState {
    /// Creates a ruler state with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    /// Returns the ruler component.
    pub fn ruler(&self) -> &TimeRuler {
        &self.ruler
    }

    /// Returns the ruler component for gesture handling.
    pub fn ruler_mut(&mut self) -> &mut TimeRuler {
        &mut self.ruler
    }

    /// Returns how many times the tick layout has been rebuilt.
    #[cfg(test)]
    pub fn layout_recomputes(&self) -> u64 {
        self.layout_cache.recompute_count()
    }

    // ===== Mutations =====

    /// Replaces the ruler configuration and drops the cached layout.
    pub fn apply_config(&mut self, config: RulerConfig) {
        self.ruler.set_config(config);
        self.layout_cache.invalidate();
    }

    /// Returns the ticks for a canvas of `viewport_width`, rebuilding them
    /// only if the ruler or the width changed since the previous frame.
    pub fn ticks(&mut self, viewport_width: f32) -> &[TickMark] {
        let inputs = self.ruler.layout_inputs(viewport_width);
        self.layout_cache.refresh(self.ruler.config(), inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_follow_pan() {
        let mut state = RulerState::new();
        let before = state.ticks(400.0)[0].x;
        state.ruler_mut().pan_change(25.0);
        let after = state.ticks(400.0)[0].x;

        assert_eq!(before, 200.0);
        assert_eq!(after, 225.0);
        assert_eq!(state.layout_recomputes(), 2);
    }

    #[test]
    fn test_idle_frames_reuse_layout() {
        let mut state = RulerState::new();
        for _ in 0..10 {
            state.ticks(640.0);
        }
        assert_eq!(state.layout_recomputes(), 1);

        state.ticks(800.0);
        assert_eq!(state.layout_recomputes(), 2);
    }

    #[test]
    fn test_config_change_rebuilds_layout() {
        let mut state = RulerState::new();
        state.ticks(400.0);

        let config = RulerConfig {
            minute_ticks_per_hour: 3,
            ..RulerConfig::default()
        };
        state.apply_config(config);

        assert_eq!(state.ticks(400.0).len(), 24 * 4);
        assert_eq!(state.layout_recomputes(), 2);
    }
}
