//! Ruler configuration.
//!
//! All geometry and behavior constants of the ruler live in [`RulerConfig`].
//! The defaults reproduce the stock 24-hour ruler; a JSON file may override
//! any subset of fields.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Narrowest accepted hour slot at scale 1, in pixels
pub const MIN_HOUR_WIDTH: f32 = 1.0;
/// One tick per minute is the finest subdivision of an hour
pub const MAX_MINUTE_TICKS: u32 = 59;

/// Geometry and behavior settings for a [`crate::TimeRuler`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    /// Horizontal distance between two hour ticks at scale 1, in pixels
    pub hour_width: f32,
    /// Number of hour slots in one repeating band
    pub total_hours: i32,
    /// Number of minute ticks drawn between two hour ticks
    pub minute_ticks_per_hour: u32,
    /// Lower scale bound; pinches below it clamp to it
    pub min_scale: f32,
    /// Upper scale bound; pinches above it are rejected
    pub max_scale: f32,
    /// Whether pinch-to-zoom is recognized at all
    pub zoom_enabled: bool,
    /// Show only the half-hour tick until the scale exceeds `adaptive_threshold`
    pub adaptive_minutes: bool,
    /// Scale above which ten-minute ticks are shown in adaptive mode
    pub adaptive_threshold: f32,
    /// Per-millisecond velocity retention of the release momentum
    pub deceleration: f32,
    /// Speed (px/s) under which the momentum is considered settled
    pub settle_velocity: f32,
    pub hour_tick_width: f32,
    pub hour_tick_height: f32,
    pub minute_tick_width: f32,
    pub minute_tick_height: f32,
    pub half_hour_tick_height: f32,
    pub indicator_width: f32,
    pub indicator_height: f32,
    /// Baseline of the hour labels, measured from the top of the ruler
    pub label_baseline: f32,
    pub label_font_size: f32,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            hour_width: 100.0,
            total_hours: 24,
            minute_ticks_per_hour: 5,
            min_scale: 1.0,
            max_scale: 4.0,
            zoom_enabled: true,
            adaptive_minutes: false,
            adaptive_threshold: 2.0,
            deceleration: 0.998,
            settle_velocity: 1.0,
            hour_tick_width: 2.0,
            hour_tick_height: 100.0,
            minute_tick_width: 1.0,
            minute_tick_height: 60.0,
            half_hour_tick_height: 80.0,
            indicator_width: 3.0,
            indicator_height: 150.0,
            label_baseline: 120.0,
            label_font_size: 14.0,
        }
    }
}

impl RulerConfig {
    /// Reads a configuration from a JSON file and validates it.
    ///
    /// Fields missing from the file keep their default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Parses a configuration from JSON text and validates it.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: RulerConfig = serde_json::from_str(text).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration describes a drawable ruler.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.hour_width.is_finite() && self.hour_width >= MIN_HOUR_WIDTH,
            "hour_width must be at least {} px (got {})",
            MIN_HOUR_WIDTH,
            self.hour_width
        );
        ensure!(self.total_hours > 0, "total_hours must be positive (got {})", self.total_hours);
        ensure!(
            (1..=MAX_MINUTE_TICKS).contains(&self.minute_ticks_per_hour),
            "minute_ticks_per_hour must be in 1..={} (got {})",
            MAX_MINUTE_TICKS,
            self.minute_ticks_per_hour
        );
        ensure!(
            self.min_scale.is_finite() && self.min_scale > 0.0,
            "min_scale must be positive (got {})",
            self.min_scale
        );
        ensure!(
            self.max_scale.is_finite() && self.max_scale >= self.min_scale,
            "max_scale ({}) must not be below min_scale ({})",
            self.max_scale,
            self.min_scale
        );
        ensure!(
            self.deceleration > 0.0 && self.deceleration < 1.0,
            "deceleration must be in (0, 1) (got {})",
            self.deceleration
        );
        ensure!(
            self.settle_velocity.is_finite() && self.settle_velocity > 0.0,
            "settle_velocity must be positive (got {})",
            self.settle_velocity
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RulerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.hour_width, 100.0);
        assert_eq!(config.total_hours, 24);
        assert_eq!(config.min_scale, 1.0);
        assert_eq!(config.max_scale, 4.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = RulerConfig::from_json_str(r#"{"zoom_enabled": false, "hour_width": 120.0}"#).unwrap();
        assert!(!config.zoom_enabled);
        assert_eq!(config.hour_width, 120.0);
        assert_eq!(config.total_hours, 24);
        assert_eq!(config.indicator_height, 150.0);
    }

    #[test]
    fn test_rejects_inverted_scale_bounds() {
        let err = RulerConfig::from_json_str(r#"{"min_scale": 3.0, "max_scale": 2.0}"#).unwrap_err();
        assert!(err.to_string().contains("max_scale"));
    }

    #[test]
    fn test_rejects_bad_deceleration() {
        let config = RulerConfig {
            deceleration: 1.0,
            ..RulerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unbounded_minute_ticks() {
        let err = RulerConfig::from_json_str(r#"{"minute_ticks_per_hour": 4294967295}"#).unwrap_err();
        assert!(format!("{:#}", err).contains("minute_ticks_per_hour"));

        let zero = RulerConfig {
            minute_ticks_per_hour: 0,
            ..RulerConfig::default()
        };
        assert!(zero.validate().is_err());

        let per_minute = RulerConfig {
            minute_ticks_per_hour: 59,
            ..RulerConfig::default()
        };
        assert!(per_minute.validate().is_ok());
    }

    #[test]
    fn test_rejects_subpixel_hour_width() {
        let err = RulerConfig::from_json_str(r#"{"hour_width": 1e-6}"#).unwrap_err();
        assert!(format!("{:#}", err).contains("hour_width"));
        assert!(RulerConfig::from_json_str(r#"{"hour_width": 1.0}"#).is_ok());
    }

    #[test]
    fn test_rejects_zero_settle_velocity() {
        let err = RulerConfig::from_json_str(r#"{"settle_velocity": 0.0}"#).unwrap_err();
        assert!(format!("{:#}", err).contains("settle_velocity"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(RulerConfig::from_json_str("{not json").is_err());
    }
}
