//! Utility modules for the time ruler.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_offset, format_scale, format_time_of_day};
