//! Preference persistence coordination.
//!
//! UI preferences (theme, zoom toggle) are stored in eframe's persistent
//! storage as JSON strings. Ruler offset and scale are never stored; every
//! launch starts at midnight with scale 1.

use serde::{Deserialize, Serialize};

/// Coordinates typed loading and saving of UI preferences.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Saves a preference to persistent storage.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this preference
    /// * `value` - The value to serialize and save
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => log::warn!("failed to serialize preference '{}': {}", key, e),
        }
    }

    /// Loads a preference with a custom default.
    ///
    /// Missing storage, a missing key or an unparsable value all yield `default`.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a preference, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("ignoring stored preference '{}': {}", key, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_bool() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_setting(&mut storage, "zoom_enabled", &false);

        let loaded: Option<bool> = SettingsCoordinator::try_load_setting(Some(&storage), "zoom_enabled");
        assert_eq!(loaded, Some(false));
    }

    #[test]
    fn test_load_or_default() {
        let storage = MockStorage::new();
        let theme = SettingsCoordinator::load_setting_or(Some(&storage), "theme_preference", "Dark".to_string());
        assert_eq!(theme, "Dark");

        let theme = SettingsCoordinator::load_setting_or(None, "theme_preference", "Light".to_string());
        assert_eq!(theme, "Light");
    }

    #[test]
    fn test_corrupt_value_is_ignored() {
        let mut storage = MockStorage::new();
        eframe::Storage::set_string(&mut storage, "zoom_enabled", "not json".to_string());

        let loaded: Option<bool> = SettingsCoordinator::try_load_setting(Some(&storage), "zoom_enabled");
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_theme_name_round_trip() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_setting(&mut storage, "theme_preference", &"One Dark Pro");

        let loaded = SettingsCoordinator::load_setting_or(Some(&storage), "theme_preference", String::new());
        assert_eq!(loaded, "One Dark Pro");
    }
}
