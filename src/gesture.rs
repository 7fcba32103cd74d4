//! Gesture vocabulary of the ruler.
//!
//! Input backends translate raw pointer/touch input into a [`GestureFrame`]
//! per rendered frame; the ruler applies all recognized gestures of that
//! frame together (tap, pinch and pan are recognized simultaneously).

use std::fmt;

/// Phase of the pan gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No interaction, offset at rest
    #[default]
    Idle,
    /// A pan is in progress and drives the offset directly
    Panning,
    /// The pan was released and the offset coasts on its momentum
    Decaying,
}

impl fmt::Display for GesturePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GesturePhase::Idle => "Idle",
            GesturePhase::Panning => "Panning",
            GesturePhase::Decaying => "Decaying",
        };
        f.write_str(name)
    }
}

/// Result of feeding a pinch update to the ruler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PinchOutcome {
    /// Scale took the new value
    Applied(f32),
    /// The product fell below the lower bound and was clamped to it
    ClampedToMin(f32),
    /// The product exceeded the upper bound; scale kept its previous value
    Rejected,
    /// Zoom is disabled or the factor was not a usable number
    Ignored,
}

/// Gestures recognized during a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureFrame {
    /// A new touch/press started on the ruler
    pub tap: bool,
    /// Incremental pinch scale factor (1.0 = unchanged)
    pub pinch_factor: Option<f32>,
    /// Incremental horizontal pan delta in pixels
    pub pan_delta: Option<f32>,
    /// Horizontal release velocity (px/s) if the pan ended this frame
    pub pan_release_velocity: Option<f32>,
}

impl GestureFrame {
    /// True if nothing was recognized this frame.
    pub fn is_empty(&self) -> bool {
        !self.tap && self.pinch_factor.is_none() && self.pan_delta.is_none() && self.pan_release_velocity.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_is_empty() {
        assert!(GestureFrame::default().is_empty());
        let frame = GestureFrame {
            pan_delta: Some(3.0),
            ..GestureFrame::default()
        };
        assert!(!frame.is_empty());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(GesturePhase::default().to_string(), "Idle");
        assert_eq!(GesturePhase::Decaying.to_string(), "Decaying");
    }
}
