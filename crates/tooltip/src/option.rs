//! Tooltip option record handed to the chart renderer

use dashchart_shared::TooltipSettings;
use serde::{Deserialize, Serialize};

/// Static part of the renderer's tooltip option. The formatter and position
/// callbacks are wired up by the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOption {
    pub show: bool,
    pub trigger: String,
    pub background_color: String,
    pub transition_duration: u32,
    pub padding: u32,
    pub hide_delay: u32,
}

impl TooltipOption {
    pub fn from_settings(settings: &TooltipSettings) -> Self {
        Self {
            show: true,
            trigger: "item".to_string(),
            background_color: "transparent".to_string(),
            transition_duration: 0,
            padding: 0,
            hide_delay: settings.effective_hide_delay(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_defaults() {
        let option = TooltipOption::from_settings(&TooltipSettings::default());
        assert_eq!(option.hide_delay, 100);
        assert_eq!(option.trigger, "item");

        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["backgroundColor"], "transparent");
        assert_eq!(json["transitionDuration"], 0);
    }

    #[test]
    fn test_option_hide_delay_override() {
        let settings = TooltipSettings {
            hide_delay: Some(250),
            ..Default::default()
        };
        assert_eq!(TooltipOption::from_settings(&settings).hide_delay, 250);
    }
}
