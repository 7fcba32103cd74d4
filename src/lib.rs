pub mod config;
pub mod decay;
pub mod gesture;
pub mod layout;
pub mod ruler;
pub mod theme;

// Export ruler component
pub use ruler::TimeRuler;
pub use config::RulerConfig;
pub use gesture::{GestureFrame, GesturePhase, PinchOutcome};
pub use decay::DecayAnimation;

// Export layout math
pub use layout::{
    TickLayoutCache, TickMark, TickKind, LayoutInputs, MinuteGranularity, build_ticks,
    band_width, hour_label, hour_tick_x, minute_tick_x, indicator_anchor,
    label_x, replicas, selected_hours, wrap_position
};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32};
