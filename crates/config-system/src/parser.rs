//! Configuration file parser for multiple formats

use crate::{ConfigError, DashChartsConfig, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

static ENV_VAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
});

/// Configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

/// Configuration parser
pub struct ConfigParser;

impl ConfigParser {
    /// Parse configuration from a file, expanding `${VAR}` references first
    pub fn parse_file(path: impl AsRef<Path>) -> Result<DashChartsConfig> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let format = Self::detect_format(path)?;

        log::debug!("Loading {format:?} configuration from {}", path.display());
        Self::parse_string(&TemplateExpander::expand_env_vars(&content), format)
    }

    /// Parse configuration from a string
    pub fn parse_string(content: &str, format: ConfigFormat) -> Result<DashChartsConfig> {
        Self::parse_partial(content, format)
    }

    /// Detect configuration format from file extension
    pub fn detect_format(path: &Path) -> Result<ConfigFormat> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ConfigError::Parse("Cannot determine config format from file extension".to_string())
        })?;

        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            "toml" => Ok(ConfigFormat::Toml),
            _ => Err(ConfigError::Parse(format!(
                "Unsupported config format: {ext}"
            ))),
        }
    }

    /// Parse any deserializable section, e.g. just the tooltip settings
    pub fn parse_partial<T: DeserializeOwned>(content: &str, format: ConfigFormat) -> Result<T> {
        match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("YAML parse error: {e}"))),
            ConfigFormat::Json => serde_json::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("JSON parse error: {e}"))),
            ConfigFormat::Toml => toml::from_str(content)
                .map_err(|e| ConfigError::Parse(format!("TOML parse error: {e}"))),
        }
    }
}

/// Configuration serializer
pub struct ConfigSerializer;

impl ConfigSerializer {
    /// Serialize configuration to a file
    pub fn serialize_file(config: &DashChartsConfig, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = ConfigParser::detect_format(path)?;
        let content = Self::serialize_string(config, format)?;

        fs::write(path, content)?;
        Ok(())
    }

    /// Serialize configuration to a string
    pub fn serialize_string(config: &DashChartsConfig, format: ConfigFormat) -> Result<String> {
        match format {
            ConfigFormat::Yaml => serde_yaml::to_string(config)
                .map_err(|e| ConfigError::Serialize(format!("YAML serialize error: {e}"))),
            ConfigFormat::Json => serde_json::to_string_pretty(config)
                .map_err(|e| ConfigError::Serialize(format!("JSON serialize error: {e}"))),
            ConfigFormat::Toml => toml::to_string_pretty(config)
                .map_err(|e| ConfigError::Serialize(format!("TOML serialize error: {e}"))),
        }
    }
}

/// Template expander for configuration files
pub struct TemplateExpander;

impl TemplateExpander {
    /// Expand `${VAR}` references; unknown variables are left as written
    pub fn expand_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashchart_shared::TruncateSetting;

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
version: "1.0.0"
tooltip:
  isGroupedByDate: true
  showTimeInTooltip: true
  utc: true
  bucketSize: 3600000
  truncate: 40
  indentLabels: ["p50", "p75"]
roles:
  ladder: [member, admin, owner]
"#;

        let config = ConfigParser::parse_string(yaml, ConfigFormat::Yaml).unwrap();
        assert!(config.tooltip.is_grouped_by_date);
        assert_eq!(config.tooltip.bucket_size, Some(3_600_000));
        assert_eq!(config.tooltip.truncate, TruncateSetting::Length(40));
        assert_eq!(config.roles.ladder.len(), 3);
    }

    #[test]
    fn test_toml_parsing() {
        let content = r#"
[tooltip]
utc = true
hideDelay = 250
missingValue = "blank"
"#;

        let config = ConfigParser::parse_string(content, ConfigFormat::Toml).unwrap();
        assert!(config.tooltip.utc);
        assert_eq!(config.tooltip.effective_hide_delay(), 250);
        assert_eq!(config.version, "1.0.0");
    }

    #[test]
    fn test_partial_tooltip_section() {
        let settings: dashchart_shared::TooltipSettings =
            ConfigParser::parse_partial(r#"{"truncate": true}"#, ConfigFormat::Json).unwrap();
        assert_eq!(settings.truncate, TruncateSetting::Flag(true));
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ConfigParser::detect_format(Path::new("tooltip.yml")).unwrap(),
            ConfigFormat::Yaml
        );
        assert!(ConfigParser::detect_format(Path::new("tooltip.ini")).is_err());
        assert!(ConfigParser::detect_format(Path::new("tooltip")).is_err());
    }

    #[test]
    fn test_env_var_expansion() {
        std::env::set_var("DASHCHART_TEST_HIDE_DELAY", "300");
        let expanded = TemplateExpander::expand_env_vars(
            "hideDelay: ${DASHCHART_TEST_HIDE_DELAY}\nutc: ${DASHCHART_TEST_UNSET}",
        );
        assert_eq!(expanded, "hideDelay: 300\nutc: ${DASHCHART_TEST_UNSET}");
    }

    #[test]
    fn test_invalid_content() {
        let err = ConfigParser::parse_string("tooltip: [", ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
