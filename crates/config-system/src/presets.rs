//! Named tooltip presets

use crate::{ConfigError, ConfigValidator, Result};
use dashchart_shared::{TooltipSettings, TruncateSetting};
use std::collections::HashMap;

const HOUR_MS: i64 = 3_600_000;

/// Preset manager for tooltip settings
pub struct PresetManager {
    builtin_presets: HashMap<String, TooltipSettings>,
    user_presets: HashMap<String, TooltipSettings>,
}

impl Default for PresetManager {
    fn default() -> Self {
        let mut manager = Self {
            builtin_presets: HashMap::new(),
            user_presets: HashMap::new(),
        };
        manager.load_builtin_presets();
        manager
    }
}

impl PresetManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a preset by name
    pub fn get(&self, name: &str) -> Option<&TooltipSettings> {
        self.builtin_presets
            .get(name)
            .or_else(|| self.user_presets.get(name))
    }

    /// Add a user preset
    pub fn add_user_preset(&mut self, name: String, settings: TooltipSettings) -> Result<()> {
        if self.builtin_presets.contains_key(&name) {
            return Err(ConfigError::Validation(format!(
                "Cannot override built-in preset: {name}"
            )));
        }
        ConfigValidator::validate_tooltip(&settings)?;

        self.user_presets.insert(name, settings);
        Ok(())
    }

    /// Remove a user preset
    pub fn remove_user_preset(&mut self, name: &str) -> Result<()> {
        if self.builtin_presets.contains_key(name) {
            return Err(ConfigError::Validation(format!(
                "Cannot remove built-in preset: {name}"
            )));
        }

        self.user_presets
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| ConfigError::Validation(format!("Unknown preset: {name}")))
    }

    /// All preset names, sorted
    pub fn list_presets_by_name(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .builtin_presets
            .keys()
            .chain(self.user_presets.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names
    }

    fn load_builtin_presets(&mut self) {
        // Hourly buckets in the viewer's zone
        self.builtin_presets.insert(
            "timeseries".to_string(),
            TooltipSettings {
                is_grouped_by_date: true,
                show_time_in_tooltip: true,
                bucket_size: Some(HOUR_MS),
                truncate: TruncateSetting::Flag(true),
                ..Default::default()
            },
        );

        self.builtin_presets.insert(
            "timeseries-utc".to_string(),
            TooltipSettings {
                is_grouped_by_date: true,
                show_time_in_tooltip: true,
                utc: true,
                bucket_size: Some(HOUR_MS),
                truncate: TruncateSetting::Flag(true),
                ..Default::default()
            },
        );

        // Raw points on short ranges, no buckets
        self.builtin_presets.insert(
            "dense-seconds".to_string(),
            TooltipSettings {
                is_grouped_by_date: true,
                show_time_in_tooltip: true,
                add_seconds_to_time_format: true,
                ..Default::default()
            },
        );

        self.builtin_presets.insert(
            "category".to_string(),
            TooltipSettings {
                truncate: TruncateSetting::Flag(true),
                ..Default::default()
            },
        );
    }
}
