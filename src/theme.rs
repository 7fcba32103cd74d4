//! Theme support for the time ruler
//!
//! Provides the color schemes used to paint the ruler strip and the
//! surrounding application chrome. The built-in themes are Dark (the classic
//! black strip with white ticks and a yellow indicator), Light, Dracula and
//! One Dark Pro.
//!
//! # Examples
//!
//! ```
//! use time_ruler::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dark = manager.get_theme("Dark").unwrap();
//! println!("Indicator color: {:?}", dark.colors.indicator);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Name of the theme used when nothing else was selected.
pub const DEFAULT_THEME: &str = "Dark";

/// Color palette for a theme
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Application chrome
    pub panel_background: Color32,
    pub extreme_background: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Ruler strip
    pub ruler_background: Color32,
    pub hour_tick: Color32,
    pub minute_tick: Color32,
    pub label: Color32,
    pub indicator: Color32,
}

/// A theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Registry of the available themes and the current selection
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeManager {
    /// Creates a ThemeManager with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        for theme in [dark_theme(), light_theme(), dracula_theme(), one_dark_pro_theme()] {
            themes.insert(theme.name.clone(), theme);
        }

        Self {
            themes,
            current_theme_name: DEFAULT_THEME.to_string(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Retrieves a theme by name, falling back to the default theme
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| self.themes.get(DEFAULT_THEME))
            .unwrap_or_else(|| unreachable!("default theme is always registered"))
    }

    /// Returns all theme names, sorted
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme
    pub fn current_theme(&self) -> &Theme {
        self.theme_or_default(&self.current_theme_name)
    }

    /// Sets the current theme by name
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's chrome colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.indicator;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;
    }
}

/// The classic ruler look: black strip, white ticks, yellow indicator
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Black ruler with white ticks".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(27, 27, 27),
            extreme_background: Color32::from_rgb(10, 10, 10),
            text: Color32::from_rgb(220, 220, 220),
            text_dim: Color32::from_rgb(140, 140, 140),
            selection: Color32::from_rgb(60, 60, 60),
            hover: Color32::from_rgb(45, 45, 45),
            border: Color32::from_rgb(70, 70, 70),

            ruler_background: Color32::BLACK,
            hour_tick: Color32::WHITE,
            minute_tick: Color32::WHITE,
            label: Color32::WHITE,
            indicator: Color32::YELLOW,
        },
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "White ruler with dark ticks".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(245, 245, 245),
            extreme_background: Color32::from_rgb(255, 255, 255),
            text: Color32::from_rgb(30, 30, 30),
            text_dim: Color32::from_rgb(120, 120, 120),
            selection: Color32::from_rgb(200, 220, 240),
            hover: Color32::from_rgb(230, 230, 230),
            border: Color32::from_rgb(190, 190, 190),

            ruler_background: Color32::WHITE,
            hour_tick: Color32::from_rgb(20, 20, 20),
            minute_tick: Color32::from_rgb(108, 108, 108),
            label: Color32::from_rgb(20, 20, 20),
            indicator: Color32::from_rgb(231, 76, 60),
        },
    }
}

/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Dracula color palette".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),

            ruler_background: hex_to_color32("#21222c"),
            hour_tick: hex_to_color32("#f8f8f2"),
            minute_tick: hex_to_color32("#6272a4"),
            label: hex_to_color32("#f8f8f2"),
            indicator: hex_to_color32("#f1fa8c"),
        },
    }
}

/// Official colors from: https://github.com/Binaryify/OneDark-Pro
fn one_dark_pro_theme() -> Theme {
    Theme {
        name: "One Dark Pro".to_string(),
        description: "VSCode One Dark Pro color palette".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#282c34"),
            extreme_background: hex_to_color32("#21252b"),
            text: hex_to_color32("#abb2bf"),
            text_dim: hex_to_color32("#5c6370"),
            selection: hex_to_color32("#4b5263"),
            hover: hex_to_color32("#4b5263"),
            border: hex_to_color32("#5c6370"),

            ruler_background: hex_to_color32("#21252b"),
            hour_tick: hex_to_color32("#abb2bf"),
            minute_tick: hex_to_color32("#5c6370"),
            label: hex_to_color32("#abb2bf"),
            indicator: hex_to_color32("#e5c07b"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes() {
        let manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light", "One Dark Pro"]);
        assert_eq!(manager.current_theme().name, DEFAULT_THEME);
    }

    #[test]
    fn test_dark_theme_matches_classic_ruler() {
        let manager = ThemeManager::new();
        let colors = &manager.theme_or_default("Dark").colors;
        assert_eq!(colors.ruler_background, Color32::BLACK);
        assert_eq!(colors.hour_tick, Color32::WHITE);
        assert_eq!(colors.indicator, Color32::YELLOW);
    }

    #[test]
    fn test_light_theme_minute_ticks() {
        let manager = ThemeManager::new();
        let colors = &manager.theme_or_default("Light").colors;
        assert_eq!(colors.minute_tick, Color32::from_rgb(108, 108, 108));
        assert_eq!(colors.ruler_background, Color32::WHITE);
    }

    #[test]
    fn test_unknown_theme() {
        let mut manager = ThemeManager::new();
        assert!(manager.set_current_theme("Solarized").is_err());
        assert_eq!(manager.theme_or_default("Solarized").name, "Dark");
        assert!(manager.set_current_theme("Dracula").is_ok());
        assert_eq!(manager.current_theme().name, "Dracula");
    }

    #[test]
    fn test_hex_to_color32() {
        assert_eq!(hex_to_color32("#ff8000"), Color32::from_rgb(255, 128, 0));
        assert_eq!(hex_to_color32("bogus"), Color32::from_rgb(0, 0, 0));
    }
}
