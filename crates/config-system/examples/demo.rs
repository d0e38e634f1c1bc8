//! Configuration system demonstration: load a config, render a tooltip
//! and run a role check with it.

use dashchart_acl::RoleGate;
use dashchart_config::{ConfigFormat, ConfigParser, ConfigValidator, PresetManager};
use dashchart_shared::{Actor, AxisGroup, AxisValue, SeriesPoint, SeriesValue, TooltipInput};
use dashchart_tooltip::{Formatters, TooltipFormatter, TooltipOption};

const CONFIG: &str = r#"
version: "1.0.0"
tooltip:
  isGroupedByDate: true
  showTimeInTooltip: true
  bucketSize: 3600000
  truncate: 24
roles:
  ladder: [member, admin, manager, owner]
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ConfigParser::parse_string(CONFIG, ConfigFormat::Yaml)?;
    ConfigValidator::validate(&config)?;

    println!("Presets: {:?}", PresetManager::new().list_presets_by_name());
    println!(
        "Tooltip option: {}",
        serde_json::to_string(&TooltipOption::from_settings(&config.tooltip))?
    );

    let timestamp = 1_625_097_600_000.0;
    let group = AxisGroup::new(vec![
        SeriesPoint::series(
            "transaction.duration.p95",
            SeriesValue::Number(timestamp),
            Some(SeriesValue::Number(1834.25)),
        )
        .with_axis_value(AxisValue::Number(timestamp)),
        SeriesPoint::series("errors", SeriesValue::Number(timestamp), None)
            .with_axis_value(AxisValue::Number(timestamp)),
    ]);

    let formatter = TooltipFormatter::new(config.tooltip.clone(), Formatters::new());
    println!("Tooltip: {}", formatter.format(&TooltipInput::Axis(group)));

    let gate = RoleGate::new(config.roles.ladder()?, "admin");
    for role in ["member", "manager"] {
        println!(
            "{role} can edit alerts: {}",
            gate.has_role(Some(&Actor::with_role(role)))
        );
    }

    Ok(())
}
