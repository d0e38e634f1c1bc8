//! Configuration validation utilities

use crate::{ConfigError, DashChartsConfig, Result, RoleSettings};
use dashchart_shared::{TooltipSettings, TruncateSetting};

/// Longest hide delay accepted, in milliseconds
const MAX_HIDE_DELAY_MS: u32 = 10_000;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &DashChartsConfig) -> Result<()> {
        Self::validate_tooltip(&config.tooltip)?;
        Self::validate_roles(&config.roles)?;
        Ok(())
    }

    /// Validate tooltip settings
    pub fn validate_tooltip(tooltip: &TooltipSettings) -> Result<()> {
        if let Some(delay) = tooltip.hide_delay {
            if delay > MAX_HIDE_DELAY_MS {
                return Err(ConfigError::Validation(format!(
                    "Invalid hideDelay: {delay}. Must be at most {MAX_HIDE_DELAY_MS}ms"
                )));
            }
        }

        if let Some(bucket) = tooltip.bucket_size {
            if bucket < 0 {
                return Err(ConfigError::Validation(format!(
                    "Invalid bucketSize: {bucket}. Must not be negative"
                )));
            }
            if !tooltip.is_grouped_by_date && bucket > 0 {
                log::warn!("bucketSize is set but isGroupedByDate is off; it will be ignored");
            }
        }

        if tooltip.truncate == TruncateSetting::Length(0) {
            return Err(ConfigError::Validation(
                "Invalid truncate: 0. Use false to disable truncation".to_string(),
            ));
        }

        if tooltip.indent_labels.iter().any(|label| label.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "indentLabels must not contain empty labels".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate the role ladder
    pub fn validate_roles(roles: &RoleSettings) -> Result<()> {
        if roles.ladder.is_empty() {
            return Err(ConfigError::Validation(
                "Role ladder must contain at least one role".to_string(),
            ));
        }

        if roles.ladder.iter().any(|role| role.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "Role ladder must not contain empty role ids".to_string(),
            ));
        }

        roles.ladder().map(|_| ())
    }
}
