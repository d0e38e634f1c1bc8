//! Configuration system for dashchart
//! Loads tooltip settings and the organization role ladder from config files,
//! validates them and provides named presets.

use dashchart_acl::RoleLadder;
use dashchart_shared::TooltipSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod parser;
pub mod presets;
pub mod validation;

pub use parser::{ConfigFormat, ConfigParser, ConfigSerializer, TemplateExpander};
pub use presets::PresetManager;
pub use validation::ConfigValidator;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialize error: {0}")]
    Serialize(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Complete dashchart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashChartsConfig {
    pub version: String,
    pub tooltip: TooltipSettings,
    pub roles: RoleSettings,
}

impl Default for DashChartsConfig {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            tooltip: TooltipSettings::default(),
            roles: RoleSettings::default(),
        }
    }
}

/// Role ladder used when the backend does not send `availableRoles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleSettings {
    /// Lowest privilege first
    pub ladder: Vec<String>,
}

impl Default for RoleSettings {
    fn default() -> Self {
        Self {
            ladder: ["member", "admin", "manager", "owner"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl RoleSettings {
    pub fn ladder(&self) -> Result<RoleLadder> {
        RoleLadder::new(self.ladder.iter().cloned())
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}
