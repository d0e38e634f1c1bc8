//! Tooltip markup for mark points, single items and axis groups

use chrono::{DateTime, Utc};
use dashchart_shared::{AxisValue, SeriesPoint, SeriesValue, TooltipInput, TooltipSettings};

use crate::axis_label::{format_axis_label_at, AxisLabelOptions};
use crate::formatters::{default_value_formatter, escape_html, Formatters, Truncation};

const LABEL_CLASS: &str = "tooltip-label";
const INDENTED_LABEL_CLASS: &str = "tooltip-label tooltip-label-indent";

/// Builds tooltip HTML from chart callback payloads
#[derive(Debug, Clone)]
pub struct TooltipFormatter {
    settings: TooltipSettings,
    formatters: Formatters,
    truncation: Truncation,
    label_options: AxisLabelOptions,
}

impl TooltipFormatter {
    pub fn new(settings: TooltipSettings, formatters: Formatters) -> Self {
        let truncation = formatters
            .truncate
            .clone()
            .unwrap_or_else(|| Truncation::from(settings.truncate));
        let label_options = AxisLabelOptions::from(&settings);

        Self {
            settings,
            formatters,
            truncation,
            label_options,
        }
    }

    pub fn settings(&self) -> &TooltipSettings {
        &self.settings
    }

    pub fn format(&self, input: &TooltipInput) -> String {
        self.format_at(input, Utc::now())
    }

    /// Same as [`format`](Self::format) with an explicit clock for date labels
    pub fn format_at(&self, input: &TooltipInput, now: DateTime<Utc>) -> String {
        match input {
            TooltipInput::Item(point) if point.is_mark_point() => {
                self.mark_point_content(point, now)
            }
            TooltipInput::Item(point) => {
                // A lone item carries its timestamp as the first data entry
                let timestamp = point.value_at(0).map(AxisValue::from);
                self.series_content(std::slice::from_ref(point), timestamp.as_ref(), now)
            }
            TooltipInput::Axis(group) => self.series_content(&group.points, group.axis_value(), now),
        }
    }

    fn mark_point_content(&self, point: &SeriesPoint, now: DateTime<Utc>) -> String {
        let coord = point.coord().unwrap_or_default();
        let entry = |index: usize| coord.get(index).and_then(Option::as_ref);
        let timestamp = entry(0).map(AxisValue::from);
        let date = self.axis_label(timestamp.as_ref(), now);

        let name = point.name.as_deref().unwrap_or_default();
        let label = self.truncation.apply(point.label_for_value().unwrap_or_default());
        let value = self.format_value(entry(1), point.name.as_deref(), point);

        format!(
            concat!(
                "<div class=\"tooltip-container\">",
                "<div class=\"tooltip-series\">",
                "<div><span class=\"{class}\"><strong>{name}</strong></span> {label}: {value}</div>",
                "</div>",
                "<div class=\"tooltip-date\">{date}</div>",
                "</div>"
            ),
            class = self.label_class(name),
            name = escape_html(name),
            label = label,
            value = value,
            date = date,
        )
    }

    fn series_content(
        &self,
        points: &[SeriesPoint],
        timestamp: Option<&AxisValue>,
        now: DateTime<Utc>,
    ) -> String {
        let date = if points.is_empty() {
            String::new()
        } else {
            self.axis_label(timestamp, now)
        };

        let lines: String = points
            .iter()
            .filter(|point| self.keep(point))
            .map(|point| self.series_line(point))
            .collect();

        format!(
            concat!(
                "<div class=\"tooltip-container\">",
                "<div class=\"tooltip-series\">{lines}</div>",
                "<div class=\"tooltip-date\">{date}</div>",
                "<div class=\"tooltip-arrow\"></div>",
                "</div>"
            ),
            lines = lines,
            date = date,
        )
    }

    fn series_line(&self, point: &SeriesPoint) -> String {
        let series_name = point.series_name.as_deref();

        let truncated = self.truncation.apply(series_name.unwrap_or_default());
        let label = match &self.formatters.name {
            Some(name_formatter) => name_formatter(&truncated),
            None => truncated,
        };
        let value = self.format_value(point.value_at(1), series_name, point);
        let marker = point.marker.as_deref().unwrap_or_default();
        let marker = match &self.formatters.marker {
            Some(marker_formatter) => marker_formatter(marker, series_name),
            None => marker.to_string(),
        };

        format!(
            "<div><span class=\"{}\">{marker} <strong>{label}</strong></span> {value}</div>",
            self.label_class(&label)
        )
    }

    fn keep(&self, point: &SeriesPoint) -> bool {
        match &self.formatters.filter {
            Some(filter) => filter(point.value_at(0), point),
            None => true,
        }
    }

    fn format_value(
        &self,
        value: Option<&SeriesValue>,
        series_name: Option<&str>,
        point: &SeriesPoint,
    ) -> String {
        match &self.formatters.value {
            Some(value_formatter) => value_formatter(value, series_name, Some(point)),
            None => default_value_formatter(value, self.settings.missing_value),
        }
    }

    fn axis_label(&self, value: Option<&AxisValue>, now: DateTime<Utc>) -> String {
        let Some(value) = value else {
            log::debug!("Tooltip payload has no axis position, leaving date empty");
            return String::new();
        };

        match &self.formatters.axis_label {
            Some(axis_label) => axis_label(value, &self.label_options),
            None => format_axis_label_at(value, &self.label_options, now),
        }
    }

    fn label_class(&self, label: &str) -> &'static str {
        if self.settings.indent_labels.iter().any(|l| l == label) {
            INDENTED_LABEL_CLASS
        } else {
            LABEL_CLASS
        }
    }
}
