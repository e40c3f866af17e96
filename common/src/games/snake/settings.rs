use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::grid::FieldSize;

pub const ROWS_COUNT_RANGE: RangeInclusive<u32> = 10..=30;
pub const COLS_COUNT_RANGE: RangeInclusive<u32> = 10..=30;
pub const SPEED_RANGE: RangeInclusive<u32> = 1..=10;
pub const WIN_LENGTH_RANGE: RangeInclusive<u32> = 5..=50;
pub const WALLS_COUNT_RANGE: RangeInclusive<u32> = 0..=10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeSettings {
    pub rows_count: u32,
    pub cols_count: u32,
    /// Ticks per second.
    pub speed: u32,
    /// The game is won once the body is longer than this.
    pub win_length: u32,
    pub walls_count: u32,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            rows_count: 21,
            cols_count: 21,
            speed: 5,
            win_length: 50,
            walls_count: 5,
        }
    }
}

impl SnakeSettings {
    /// One message per out-of-range field, empty when the settings are usable.
    pub fn violations(&self) -> Vec<String> {
        let checks = [
            ("rows_count", self.rows_count, ROWS_COUNT_RANGE),
            ("cols_count", self.cols_count, COLS_COUNT_RANGE),
            ("speed", self.speed, SPEED_RANGE),
            ("win_length", self.win_length, WIN_LENGTH_RANGE),
            ("walls_count", self.walls_count, WALLS_COUNT_RANGE),
        ];

        checks
            .into_iter()
            .filter(|(_, value, range)| !range.contains(value))
            .map(|(name, value, range)| {
                format!(
                    "{} must be between {} and {}, got {}",
                    name,
                    range.start(),
                    range.end(),
                    value
                )
            })
            .collect()
    }

    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.cols_count as i32, self.rows_count as i32)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.speed.max(1)))
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigManager, ConfigSerializer, FileContentConfigProvider,
        YamlConfigSerializer,
    };

    fn get_temp_file_path() -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_settings_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(SnakeSettings::default().validate().is_ok());
    }

    #[test]
    fn test_rows_count_below_range_is_rejected() {
        let settings = SnakeSettings { rows_count: 5, ..SnakeSettings::default() };
        let violations = settings.violations();
        assert_eq!(violations, vec!["rows_count must be between 10 and 30, got 5".to_string()]);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_each_violation_is_reported() {
        let settings = SnakeSettings {
            rows_count: 31,
            cols_count: 9,
            speed: 0,
            win_length: 51,
            walls_count: 11,
        };
        let violations = settings.violations();
        assert_eq!(violations.len(), 5);
        assert!(violations[0].starts_with("rows_count"));
        assert!(violations[1].starts_with("cols_count"));
        assert!(violations[2].starts_with("speed"));
        assert!(violations[3].starts_with("win_length"));
        assert!(violations[4].starts_with("walls_count"));

        let error = settings.validate().unwrap_err();
        assert_eq!(error.matches("; ").count(), 4);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let low = SnakeSettings { rows_count: 10, cols_count: 10, speed: 1, win_length: 5, walls_count: 0 };
        let high = SnakeSettings { rows_count: 30, cols_count: 30, speed: 10, win_length: 50, walls_count: 10 };
        assert!(low.validate().is_ok());
        assert!(high.validate().is_ok());
    }

    #[test]
    fn test_tick_interval_from_speed() {
        let settings = SnakeSettings { speed: 5, ..SnakeSettings::default() };
        assert_eq!(settings.tick_interval(), Duration::from_millis(200));
        let settings = SnakeSettings { speed: 1, ..SnakeSettings::default() };
        assert_eq!(settings.tick_interval(), Duration::from_millis(1000));
    }

    #[test]
    fn test_field_size_maps_cols_to_width() {
        let settings = SnakeSettings { rows_count: 12, cols_count: 20, ..SnakeSettings::default() };
        assert_eq!(settings.field_size(), FieldSize::new(20, 12));
    }

    #[test]
    fn test_partial_yaml_takes_defaults() {
        let serializer = YamlConfigSerializer::new();
        let settings: SnakeSettings = serializer.deserialize("speed: 8\nwin_length: 10\n").unwrap();
        assert_eq!(
            settings,
            SnakeSettings { speed: 8, win_length: 10, ..SnakeSettings::default() }
        );
    }

    #[test]
    fn test_settings_saved_and_loaded_through_manager() {
        let settings = SnakeSettings { rows_count: 15, cols_count: 25, speed: 3, win_length: 20, walls_count: 2 };
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, SnakeSettings, _> = ConfigManager::new(
            FileContentConfigProvider::new(&file_path),
            YamlConfigSerializer::new(),
        );

        assert!(manager.set_config(&settings).is_ok());
        assert_eq!(manager.get_config().unwrap(), settings);

        let fresh_manager: ConfigManager<_, SnakeSettings, _> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(fresh_manager.get_config().unwrap(), settings);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_returns_default_settings() {
        let manager: ConfigManager<_, SnakeSettings, _> =
            ConfigManager::from_yaml_file("this_snake_config_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), SnakeSettings::default());
    }

    #[test]
    fn test_invalid_file_is_rejected_by_manager() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(&file_path);
        content_provider.set_config_content("rows_count: 5\nspeed: 12\n").unwrap();

        let manager: ConfigManager<_, SnakeSettings, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        let error = manager.get_config().unwrap_err();
        assert!(error.contains("rows_count"));
        assert!(error.contains("speed"));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_settings_are_not_saved() {
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, SnakeSettings, _> = ConfigManager::from_yaml_file(&file_path);
        let settings = SnakeSettings { win_length: 2, ..SnakeSettings::default() };
        assert!(manager.set_config(&settings).is_err());
        assert!(!file_path.exists());
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<SnakeSettings, String> = serializer.deserialize("rows_count: [1, 2");
        assert!(result.is_err());
    }
}
