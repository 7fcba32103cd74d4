//! Text formatting utilities for the time ruler.
//!
//! This module provides helper functions for formatting values in a human-readable way.

/// Formats a fractional hour of day as `HH:MM`, rounded to the nearest minute.
///
/// Values wrap around `total_hours`, so 23:59.6 rounds to `00:00`.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_time_of_day(1.5, 24), "01:30");
/// assert_eq!(format_time_of_day(23.25, 24), "23:15");
/// ```
pub fn format_time_of_day(hours: f32, total_hours: i32) -> String {
    let minutes_per_band = i64::from(total_hours) * 60;
    let minutes = ((hours * 60.0).round() as i64).rem_euclid(minutes_per_band);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Formats a pixel offset with an explicit sign.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_offset(-150.4), "-150 px");
/// assert_eq!(format_offset(12.0), "+12 px");
/// ```
pub fn format_offset(offset: f64) -> String {
    format!("{:+.0} px", offset)
}

/// Formats a zoom factor, e.g. `2.50x`.
pub fn format_scale(scale: f32) -> String {
    format!("{:.2}x", scale)
}
