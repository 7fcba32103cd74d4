//! Tick position math for the repeating 24-hour band.
//!
//! Every tick lives at a canonical x-coordinate inside
//! `[anchor, anchor + band)`, where the anchor is the fixed indicator at the
//! horizontal center of the viewport and the band is `total_hours` hour slots
//! wide at the current scale. The renderer then paints each canonical tick
//! once per band-shifted replica that intersects the viewport.
//!
//! These functions are stateless and can be tested independently. The only
//! stateful piece is [`TickLayoutCache`], which recomputes the tick list when
//! one of its inputs changes.

use crate::config::RulerConfig;

/// Spacing of the minute ticks inside an hour slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinuteGranularity {
    /// `minute_ticks_per_hour` evenly spaced ticks (10-minute steps by default)
    TenMinutes,
    /// A single tick at the half hour
    HalfHour,
}

impl MinuteGranularity {
    /// Picks the granularity for the current scale.
    ///
    /// Adaptive rulers only show the half-hour tick until zoomed in past the
    /// configured threshold.
    pub fn for_scale(config: &RulerConfig, scale: f32) -> Self {
        if config.adaptive_minutes && scale <= config.adaptive_threshold {
            MinuteGranularity::HalfHour
        } else {
            MinuteGranularity::TenMinutes
        }
    }

    /// Minute indices drawn inside each hour slot.
    pub fn minute_indices(self, config: &RulerConfig) -> std::ops::RangeInclusive<u32> {
        match self {
            MinuteGranularity::TenMinutes => 1..=config.minute_ticks_per_hour,
            MinuteGranularity::HalfHour => 1..=1,
        }
    }

    /// Unscaled distance between two adjacent minute ticks.
    pub fn minute_width(self, config: &RulerConfig) -> f32 {
        match self {
            MinuteGranularity::TenMinutes => config.hour_width / (config.minute_ticks_per_hour as f32 + 1.0),
            MinuteGranularity::HalfHour => config.hour_width / 2.0,
        }
    }

    /// Whether the minute tick `minute` sits on the half hour.
    pub fn is_half_hour(self, config: &RulerConfig, minute: u32) -> bool {
        match self {
            MinuteGranularity::TenMinutes => u64::from(minute) * 2 == u64::from(config.minute_ticks_per_hour) + 1,
            MinuteGranularity::HalfHour => true,
        }
    }
}

/// X-coordinate of the fixed indicator for a viewport of the given width.
pub fn indicator_anchor(viewport_width: f32) -> f32 {
    viewport_width / 2.0
}

/// Width of one full repeating band at `scale`.
pub fn band_width(config: &RulerConfig, scale: f32) -> f32 {
    config.total_hours as f32 * config.hour_width * scale
}

/// Wraps a raw band-relative coordinate into `[anchor, anchor + band)`.
///
/// The remainder is normalized explicitly so negative raw values land inside
/// the band as well. `raw` carries the unbounded offset, so it stays in `f64`
/// until it has been reduced to the band.
pub fn wrap_position(raw: f64, anchor: f32, band: f32) -> f32 {
    let mut wrapped = raw.rem_euclid(f64::from(band)) as f32;
    // The remainder may round up to `band` for tiny negative inputs
    if wrapped >= band {
        wrapped = 0.0;
    }
    anchor + wrapped
}

/// Canonical x-coordinate of the hour tick `index`.
pub fn hour_tick_x(index: i32, offset: f64, scale: f32, anchor: f32, config: &RulerConfig) -> f32 {
    let raw = f64::from(index) * f64::from(config.hour_width * scale) + offset;
    wrap_position(raw, anchor, band_width(config, scale))
}

/// Canonical x-coordinate of minute tick `minute` inside hour slot `index`.
pub fn minute_tick_x(
    index: i32,
    minute: u32,
    minute_width: f32,
    offset: f64,
    scale: f32,
    anchor: f32,
    config: &RulerConfig,
) -> f32 {
    let raw = f64::from(index) * f64::from(config.hour_width * scale)
        + f64::from(minute) * f64::from(minute_width * scale)
        + offset;
    wrap_position(raw, anchor, band_width(config, scale))
}

/// Hour of day shown under tick `index`, always in `[0, total_hours)`.
pub fn hour_of_index(index: i32, total_hours: i32) -> i32 {
    index.rem_euclid(total_hours)
}

/// Label text for hour tick `index`.
pub fn hour_label(index: i32, total_hours: i32) -> String {
    hour_of_index(index, total_hours).to_string()
}

/// Left edge of an hour label, nudged so the digits sit centered under the tick.
pub fn label_x(tick_x: f32, hour: i32) -> f32 {
    if hour < 10 {
        tick_x - 3.0
    } else {
        tick_x - 6.0
    }
}

/// All band-shifted copies of `x` that fall in `[min_x, max_x)`, left to right.
///
/// Stops early once adding `band` no longer moves the coordinate.
pub fn replicas(x: f32, band: f32, min_x: f32, max_x: f32) -> impl Iterator<Item = f32> {
    let first = if band > 0.0 {
        min_x + (x - min_x).rem_euclid(band)
    } else {
        x
    };
    std::iter::successors(Some(first), move |p| {
        let next = p + band;
        (next > *p).then_some(next)
    })
    .take_while(move |p| *p < max_x)
}

/// Fractional hour of day currently under the indicator.
pub fn selected_hours(offset: f64, scale: f32, config: &RulerConfig) -> f32 {
    let hours = (-offset / f64::from(config.hour_width * scale)).rem_euclid(f64::from(config.total_hours)) as f32;
    if hours >= config.total_hours as f32 {
        0.0
    } else {
        hours
    }
}

/// What a tick mark represents.
#[derive(Debug, Clone, PartialEq)]
pub enum TickKind {
    Hour { hour: i32, label: String },
    Minute { minute: u32, half_hour: bool },
}

/// A single tick at its canonical position.
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    pub kind: TickKind,
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

/// The values the tick layout is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInputs {
    pub offset: f64,
    pub scale: f32,
    pub viewport_width: f32,
    pub granularity: MinuteGranularity,
}

/// Computes the canonical tick list for one band.
pub fn build_ticks(config: &RulerConfig, inputs: &LayoutInputs) -> Vec<TickMark> {
    let anchor = indicator_anchor(inputs.viewport_width);
    let minute_width = inputs.granularity.minute_width(config);
    let minutes = inputs.granularity.minute_indices(config);
    let mut ticks = Vec::with_capacity(config.total_hours.max(0) as usize * (minutes.clone().count() + 1));

    for index in 0..config.total_hours {
        let hour = hour_of_index(index, config.total_hours);
        ticks.push(TickMark {
            kind: TickKind::Hour {
                hour,
                label: hour.to_string(),
            },
            x: hour_tick_x(index, inputs.offset, inputs.scale, anchor, config),
            width: config.hour_tick_width,
            height: config.hour_tick_height,
        });

        for minute in minutes.clone() {
            let half_hour = inputs.granularity.is_half_hour(config, minute);
            ticks.push(TickMark {
                kind: TickKind::Minute { minute, half_hour },
                x: minute_tick_x(index, minute, minute_width, inputs.offset, inputs.scale, anchor, config),
                width: config.minute_tick_width,
                height: if half_hour {
                    config.half_hour_tick_height
                } else {
                    config.minute_tick_height
                },
            });
        }
    }

    ticks
}

/// Tick list derived from [`LayoutInputs`], rebuilt only when they change.
#[derive(Debug, Default)]
pub struct TickLayoutCache {
    inputs: Option<LayoutInputs>,
    ticks: Vec<TickMark>,
    /// Number of rebuilds since creation
    recompute_count: u64,
}

impl TickLayoutCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ticks for `inputs`, rebuilding them if the inputs changed
    /// since the last call.
    pub fn refresh(&mut self, config: &RulerConfig, inputs: LayoutInputs) -> &[TickMark] {
        if self.inputs != Some(inputs) {
            self.ticks = build_ticks(config, &inputs);
            self.inputs = Some(inputs);
            self.recompute_count += 1;
            log::trace!("tick layout rebuilt ({} ticks)", self.ticks.len());
        }
        &self.ticks
    }

    /// Forces a rebuild on the next refresh (e.g. after a config change).
    pub fn invalidate(&mut self) {
        self.inputs = None;
    }

    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(offset: f64, scale: f32) -> LayoutInputs {
        LayoutInputs {
            offset,
            scale,
            viewport_width: 400.0,
            granularity: MinuteGranularity::TenMinutes,
        }
    }

    #[test]
    fn test_zero_tick_sits_on_indicator() {
        let config = RulerConfig::default();
        let anchor = indicator_anchor(400.0);
        assert_eq!(anchor, 200.0);
        assert_eq!(hour_tick_x(0, 0.0, 1.0, anchor, &config), 200.0);
    }

    #[test]
    fn test_negative_index_wraps_to_end_of_band() {
        let config = RulerConfig::default();
        let x = hour_tick_x(-1, 0.0, 1.0, 200.0, &config);
        assert_eq!(x, 2500.0);

        // The visible copy one band to the left
        let visible: Vec<f32> = replicas(x, band_width(&config, 1.0), -10.0, 410.0).collect();
        assert_eq!(visible, vec![100.0]);
    }

    #[test]
    fn test_wrap_position_handles_exact_multiples() {
        assert_eq!(wrap_position(-2400.0, 0.0, 2400.0), 0.0);
        assert_eq!(wrap_position(2400.0, 0.0, 2400.0), 0.0);
        assert_eq!(wrap_position(-1e-9, 0.0, 2400.0), 0.0);
    }

    #[test]
    fn test_far_offsets_keep_subpixel_precision() {
        let config = RulerConfig::default();
        // 1,000,000 full days of panning plus half a pixel
        let offset = 2_400_000_000.0 + 0.5;
        assert_eq!(hour_tick_x(1, offset, 1.0, 200.0, &config), 300.5);
        assert_eq!(hour_tick_x(1, -offset, 1.0, 200.0, &config), 299.5);
        assert!((selected_hours(-offset, 1.0, &config) - 0.005).abs() < 1e-4);
    }

    #[test]
    fn test_hour_labels() {
        assert_eq!(hour_label(0, 24), "0");
        assert_eq!(hour_label(-1, 24), "23");
        assert_eq!(hour_label(25, 24), "1");
        assert_eq!(hour_label(-24, 24), "0");
        assert_eq!(hour_label(47, 24), "23");
    }

    #[test]
    fn test_label_nudge() {
        assert_eq!(label_x(100.0, 9), 97.0);
        assert_eq!(label_x(100.0, 10), 94.0);
    }

    #[test]
    fn test_minute_ticks_subdivide_the_hour() {
        let config = RulerConfig::default();
        let width = MinuteGranularity::TenMinutes.minute_width(&config);
        let x = minute_tick_x(0, 3, width, 0.0, 1.0, 200.0, &config);
        assert!((x - 250.0).abs() < 1e-3);
        assert!(MinuteGranularity::TenMinutes.is_half_hour(&config, 3));
        assert!(!MinuteGranularity::TenMinutes.is_half_hour(&config, 2));

        let scaled = minute_tick_x(0, 3, width, 0.0, 2.0, 200.0, &config);
        assert!((scaled - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_adaptive_granularity() {
        let config = RulerConfig {
            adaptive_minutes: true,
            ..RulerConfig::default()
        };
        assert_eq!(MinuteGranularity::for_scale(&config, 1.5), MinuteGranularity::HalfHour);
        assert_eq!(MinuteGranularity::for_scale(&config, 2.5), MinuteGranularity::TenMinutes);
        assert_eq!(
            MinuteGranularity::for_scale(&RulerConfig::default(), 1.0),
            MinuteGranularity::TenMinutes
        );
        assert_eq!(MinuteGranularity::HalfHour.minute_width(&config), 50.0);
        assert_eq!(MinuteGranularity::HalfHour.minute_indices(&config).count(), 1);
    }

    #[test]
    fn test_build_ticks_counts_and_heights() {
        let config = RulerConfig::default();
        let ticks = build_ticks(&config, &inputs(0.0, 1.0));
        assert_eq!(ticks.len(), 24 * 6);

        let hours = ticks.iter().filter(|t| matches!(t.kind, TickKind::Hour { .. })).count();
        assert_eq!(hours, 24);

        let half_hours: Vec<&TickMark> = ticks
            .iter()
            .filter(|t| matches!(t.kind, TickKind::Minute { half_hour: true, .. }))
            .collect();
        assert_eq!(half_hours.len(), 24);
        assert!(half_hours.iter().all(|t| t.height == 80.0 && t.width == 1.0));
        assert!(ticks
            .iter()
            .filter(|t| matches!(t.kind, TickKind::Hour { .. }))
            .all(|t| t.height == 100.0 && t.width == 2.0));
    }

    #[test]
    fn test_selected_hours() {
        let config = RulerConfig::default();
        assert_eq!(selected_hours(0.0, 1.0, &config), 0.0);
        // Dragging left by 1.5 hours brings 01:30 under the indicator
        assert!((selected_hours(-150.0, 1.0, &config) - 1.5).abs() < 1e-4);
        // Dragging right wraps to the previous day
        assert!((selected_hours(100.0, 1.0, &config) - 23.0).abs() < 1e-4);
        assert!((selected_hours(-400.0, 2.0, &config) - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_replicas_cover_wide_viewports() {
        let xs: Vec<f32> = replicas(150.0, 100.0, 0.0, 450.0).collect();
        assert_eq!(xs, vec![50.0, 150.0, 250.0, 350.0]);
    }

    #[test]
    fn test_replicas_stop_when_band_is_below_precision() {
        // At x = 1000 one f32 step is larger than the band
        let xs: Vec<f32> = replicas(1000.0, 1e-5, 1000.0, 2000.0).collect();
        assert_eq!(xs, vec![1000.0]);

        assert_eq!(replicas(10.0, 0.0, 0.0, 100.0).count(), 1);
        assert_eq!(replicas(10.0, f32::NAN, 0.0, 100.0).count(), 0);
    }

    #[test]
    fn test_huge_minute_tick_count_does_not_overflow() {
        let config = RulerConfig {
            minute_ticks_per_hour: u32::MAX,
            ..RulerConfig::default()
        };
        let width = MinuteGranularity::TenMinutes.minute_width(&config);
        assert!(width > 0.0 && width < 1e-6);
        assert!(!MinuteGranularity::TenMinutes.is_half_hour(&config, u32::MAX));
    }

    #[test]
    fn test_cache_rebuilds_only_on_input_change() {
        let config = RulerConfig::default();
        let mut cache = TickLayoutCache::new();

        cache.refresh(&config, inputs(0.0, 1.0));
        cache.refresh(&config, inputs(0.0, 1.0));
        assert_eq!(cache.recompute_count(), 1);

        let first_x = cache.refresh(&config, inputs(10.0, 1.0))[0].x;
        assert_eq!(cache.recompute_count(), 2);
        assert_eq!(first_x, 210.0);

        cache.invalidate();
        cache.refresh(&config, inputs(10.0, 1.0));
        assert_eq!(cache.recompute_count(), 3);
    }
}
