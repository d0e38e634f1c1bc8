//! Overridable formatting hooks and their default implementations

use std::fmt;
use std::rc::Rc;

use dashchart_shared::{AxisValue, MissingValuePolicy, SeriesPoint, SeriesValue, TruncateSetting};

use crate::axis_label::AxisLabelOptions;

/// `(value, series name, raw point) -> markup`
pub type ValueFormatterFn =
    Rc<dyn Fn(Option<&SeriesValue>, Option<&str>, Option<&SeriesPoint>) -> String>;
/// `(name) -> markup`
pub type NameFormatterFn = Rc<dyn Fn(&str) -> String>;
/// `(marker markup, series name) -> markup`
pub type MarkerFormatterFn = Rc<dyn Fn(&str, Option<&str>) -> String>;
/// `(value, raw point) -> keep?`
pub type FilterFn = Rc<dyn Fn(Option<&SeriesValue>, &SeriesPoint) -> bool>;
/// Replacement for the default date/bucket label
pub type AxisLabelFn = Rc<dyn Fn(&AxisValue, &AxisLabelOptions) -> String>;

/// How series names are shortened before the name formatter runs
#[derive(Clone, Default)]
pub enum Truncation {
    #[default]
    Disabled,
    Length(usize),
    Custom(NameFormatterFn),
}

impl Truncation {
    pub fn apply(&self, name: &str) -> String {
        match self {
            Truncation::Disabled => escape_html(name),
            Truncation::Length(limit) => truncate_name(name, *limit),
            Truncation::Custom(f) => f(name),
        }
    }
}

impl From<TruncateSetting> for Truncation {
    fn from(setting: TruncateSetting) -> Self {
        match setting.length() {
            Some(limit) => Truncation::Length(limit),
            None => Truncation::Disabled,
        }
    }
}

impl fmt::Debug for Truncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Truncation::Disabled => write!(f, "Disabled"),
            Truncation::Length(limit) => write!(f, "Length({limit})"),
            Truncation::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Function overrides for the tooltip pipeline. Unset hooks use the defaults:
/// grouped numbers for values, identity for names and markers, no filter.
#[derive(Clone, Default)]
pub struct Formatters {
    pub filter: Option<FilterFn>,
    /// Takes precedence over the `truncate` setting
    pub truncate: Option<Truncation>,
    pub value: Option<ValueFormatterFn>,
    pub name: Option<NameFormatterFn>,
    pub marker: Option<MarkerFormatterFn>,
    pub axis_label: Option<AxisLabelFn>,
}

impl Formatters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(
        mut self,
        filter: impl Fn(Option<&SeriesValue>, &SeriesPoint) -> bool + 'static,
    ) -> Self {
        self.filter = Some(Rc::new(filter));
        self
    }

    pub fn with_truncation(mut self, truncation: Truncation) -> Self {
        self.truncate = Some(truncation);
        self
    }

    pub fn with_value_formatter(
        mut self,
        formatter: impl Fn(Option<&SeriesValue>, Option<&str>, Option<&SeriesPoint>) -> String
            + 'static,
    ) -> Self {
        self.value = Some(Rc::new(formatter));
        self
    }

    pub fn with_name_formatter(mut self, formatter: impl Fn(&str) -> String + 'static) -> Self {
        self.name = Some(Rc::new(formatter));
        self
    }

    pub fn with_marker_formatter(
        mut self,
        formatter: impl Fn(&str, Option<&str>) -> String + 'static,
    ) -> Self {
        self.marker = Some(Rc::new(formatter));
        self
    }

    pub fn with_axis_label(
        mut self,
        formatter: impl Fn(&AxisValue, &AxisLabelOptions) -> String + 'static,
    ) -> Self {
        self.axis_label = Some(Rc::new(formatter));
        self
    }
}

impl fmt::Debug for Formatters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatters")
            .field("filter", &self.filter.is_some())
            .field("truncate", &self.truncate)
            .field("value", &self.value.is_some())
            .field("name", &self.name.is_some())
            .field("marker", &self.marker.is_some())
            .field("axis_label", &self.axis_label.is_some())
            .finish()
    }
}

/// Default value formatter: grouped numbers, strings verbatim, and the
/// policy's placeholder for missing values.
pub fn default_value_formatter(value: Option<&SeriesValue>, missing: MissingValuePolicy) -> String {
    match value {
        Some(SeriesValue::Number(n)) => format_grouped_number(*n),
        Some(SeriesValue::Text(s)) => s.clone(),
        None => missing.placeholder().to_string(),
    }
}

/// en-US style number: thousands separators, at most three fraction digits
pub fn format_grouped_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Cut `name` to `limit` characters with a trailing ellipsis, then escape it
pub fn truncate_name(name: &str, limit: usize) -> String {
    if name.chars().count() > limit {
        let cut: String = name.chars().take(limit).collect();
        escape_html(&format!("{cut}…"))
    } else {
        escape_html(name)
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
