//! The time ruler component state.
//!
//! [`TimeRuler`] owns the two values everything else derives from, the
//! horizontal offset and the zoom scale, and runs the gesture state machine
//! that mutates them.

use crate::config::RulerConfig;
use crate::decay::DecayAnimation;
use crate::gesture::{GestureFrame, GesturePhase, PinchOutcome};
use crate::layout::{self, LayoutInputs, MinuteGranularity, TickMark};

/// Offset/scale state of a 24-hour ruler plus its gesture state machine.
///
/// With zoom disabled the scale stays at 1 and pinch updates are ignored.
#[derive(Debug, Clone)]
pub struct TimeRuler {
    config: RulerConfig,
    /// Horizontal translation in pixels, unbounded
    offset: f64,
    /// Zoom factor within `[min_scale, max_scale]`
    scale: f32,
    phase: GesturePhase,
    decay: Option<DecayAnimation>,
}

impl Default for TimeRuler {
    fn default() -> Self {
        Self::new(RulerConfig::default())
    }
}

impl TimeRuler {
    pub fn new(config: RulerConfig) -> Self {
        let scale = config.min_scale;
        Self {
            config,
            offset: 0.0,
            scale,
            phase: GesturePhase::Idle,
            decay: None,
        }
    }

    // ===== Queries =====

    pub fn config(&self) -> &RulerConfig {
        &self.config
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn zoom_enabled(&self) -> bool {
        self.config.zoom_enabled
    }

    /// True while release momentum is still moving the offset.
    pub fn is_animating(&self) -> bool {
        self.phase == GesturePhase::Decaying
    }

    /// Fractional hour of day under the indicator.
    pub fn selected_hours(&self) -> f32 {
        layout::selected_hours(self.offset, self.scale, &self.config)
    }

    /// Inputs of the derived tick layout for a viewport of `viewport_width`.
    pub fn layout_inputs(&self, viewport_width: f32) -> LayoutInputs {
        LayoutInputs {
            offset: self.offset,
            scale: self.scale,
            viewport_width,
            granularity: MinuteGranularity::for_scale(&self.config, self.scale),
        }
    }

    /// Computes the full tick layout for a viewport of `viewport_width`.
    ///
    /// Callers rendering every frame should prefer [`crate::TickLayoutCache`].
    pub fn ticks(&self, viewport_width: f32) -> Vec<TickMark> {
        layout::build_ticks(&self.config, &self.layout_inputs(viewport_width))
    }

    // ===== Gestures =====

    /// A new touch landed: stop any momentum.
    pub fn tap(&mut self) {
        self.cancel_decay();
        self.set_phase(GesturePhase::Idle);
    }

    /// Pan moved by `delta_x` pixels since the previous update.
    pub fn pan_change(&mut self, delta_x: f32) {
        if !delta_x.is_finite() {
            return;
        }
        self.cancel_decay();
        self.set_phase(GesturePhase::Panning);
        self.offset += f64::from(delta_x);
    }

    /// Pan released with `velocity_x` px/s: start coasting.
    pub fn pan_end(&mut self, velocity_x: f32) {
        let velocity = if velocity_x.is_finite() { velocity_x } else { 0.0 };
        let decay = DecayAnimation::new(velocity, self.config.deceleration, self.config.settle_velocity);

        if decay.is_settled() {
            self.decay = None;
            self.set_phase(GesturePhase::Idle);
        } else {
            self.decay = Some(decay);
            self.set_phase(GesturePhase::Decaying);
        }
    }

    /// Applies an incremental pinch factor to the scale.
    ///
    /// Products below the lower bound clamp to it; products above the upper
    /// bound are rejected and the previous scale is kept.
    pub fn pinch(&mut self, factor: f32) -> PinchOutcome {
        if !self.config.zoom_enabled || !factor.is_finite() || factor <= 0.0 {
            return PinchOutcome::Ignored;
        }

        let value = self.scale * factor;
        if value < self.config.min_scale {
            self.scale = self.config.min_scale;
            PinchOutcome::ClampedToMin(self.scale)
        } else if value <= self.config.max_scale {
            self.scale = value;
            PinchOutcome::Applied(value)
        } else {
            log::debug!("pinch to {:.3} rejected (max {})", value, self.config.max_scale);
            PinchOutcome::Rejected
        }
    }

    /// Applies every gesture recognized during one frame.
    pub fn apply(&mut self, frame: &GestureFrame) {
        if frame.tap {
            self.tap();
        }
        if let Some(factor) = frame.pinch_factor {
            self.pinch(factor);
        }
        if let Some(delta) = frame.pan_delta {
            self.pan_change(delta);
        }
        if let Some(velocity) = frame.pan_release_velocity {
            self.pan_end(velocity);
        }
    }

    /// Advances release momentum by `dt_secs`.
    ///
    /// Returns true if the offset moved.
    pub fn advance(&mut self, dt_secs: f32) -> bool {
        let Some(decay) = self.decay.as_mut() else {
            return false;
        };

        let previous = self.offset;
        self.offset = decay.step(self.offset, dt_secs);

        if decay.is_settled() {
            self.decay = None;
            self.set_phase(GesturePhase::Idle);
        }
        self.offset != previous
    }

    // ===== Mutations =====

    /// Returns to the initial offset and scale.
    pub fn reset(&mut self) {
        self.cancel_decay();
        self.offset = 0.0;
        self.scale = self.config.min_scale;
        self.set_phase(GesturePhase::Idle);
    }

    /// Turns pinch-to-zoom on or off; turning it off snaps the scale back.
    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.config.zoom_enabled = enabled;
        if !enabled {
            self.scale = self.config.min_scale;
        }
    }

    /// Replaces the configuration, keeping the offset and re-clamping the scale.
    pub fn set_config(&mut self, config: RulerConfig) {
        self.scale = self.scale.clamp(config.min_scale, config.max_scale);
        if !config.zoom_enabled {
            self.scale = config.min_scale;
        }
        self.config = config;
    }

    fn cancel_decay(&mut self) {
        self.decay = None;
    }

    fn set_phase(&mut self, phase: GesturePhase) {
        if self.phase != phase {
            log::debug!("ruler gesture {} -> {}", self.phase, phase);
            self.phase = phase;
        }
    }
}
