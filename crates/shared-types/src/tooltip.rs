//! Tooltip payloads, settings and placement types shared by the tooltip
//! engine, the configuration system and the WASM bridge.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Name length used when truncation is switched on without an explicit length
pub const DEFAULT_TRUNCATE_LENGTH: usize = 80;

/// Hide delay applied when none (or zero) is configured
pub const DEFAULT_HIDE_DELAY_MS: u32 = 100;

/// Render a number the way JavaScript's `String(n)` would for the common cases
/// (integers without a trailing `.0`, shortest round-trip form otherwise).
pub fn format_js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e21 {
        return format!("{value:.0}");
    }
    format!("{value}")
}

/// A single series value: charts carry either numbers or preformatted strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesValue {
    Number(f64),
    Text(String),
}

impl SeriesValue {
    /// Read an arbitrary payload entry. Numbers and strings map directly,
    /// booleans keep their text form, anything else counts as missing.
    pub fn from_loose(value: Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(SeriesValue::Number),
            Value::String(s) => Some(SeriesValue::Text(s)),
            Value::Bool(b) => Some(SeriesValue::Text(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SeriesValue::Number(n) => Some(*n),
            SeriesValue::Text(_) => None,
        }
    }
}

impl fmt::Display for SeriesValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesValue::Number(n) => f.write_str(&format_js_number(*n)),
            SeriesValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for SeriesValue {
    fn from(value: f64) -> Self {
        SeriesValue::Number(value)
    }
}

impl From<&str> for SeriesValue {
    fn from(value: &str) -> Self {
        SeriesValue::Text(value.to_string())
    }
}

/// Position on the x axis: epoch milliseconds on time axes, a category otherwise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Number(f64),
    Category(String),
}

impl AxisValue {
    /// Epoch milliseconds, if this is a numeric axis position
    pub fn as_millis(&self) -> Option<i64> {
        match self {
            AxisValue::Number(n) if n.is_finite() => Some(*n as i64),
            _ => None,
        }
    }
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisValue::Number(n) => f.write_str(&format_js_number(*n)),
            AxisValue::Category(s) => f.write_str(s),
        }
    }
}

impl From<&SeriesValue> for AxisValue {
    fn from(value: &SeriesValue) -> Self {
        match value {
            SeriesValue::Number(n) => AxisValue::Number(*n),
            SeriesValue::Text(s) => AxisValue::Category(s.clone()),
        }
    }
}

/// Which chart component produced a payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentType {
    #[default]
    Series,
    MarkPoint,
    #[serde(other)]
    Other,
}

/// `value` field of an object-shaped data item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    List(Vec<Option<SeriesValue>>),
    Single(SeriesValue),
}

/// Object-shaped data item, used for per-item styling and for mark points
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointObject {
    #[serde(
        default,
        deserialize_with = "loose::data_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<DataValue>,
    /// `[timestamp, value]` of a mark point
    #[serde(
        default,
        deserialize_with = "loose::list",
        skip_serializing_if = "Option::is_none"
    )]
    pub coord: Option<Vec<Option<SeriesValue>>>,
    #[serde(
        default,
        deserialize_with = "loose::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub label_for_value: Option<String>,
}

/// Raw `data` of a payload: a `[label, value, ...]` tuple or an object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointData {
    #[serde(deserialize_with = "loose::values")]
    Tuple(Vec<Option<SeriesValue>>),
    Object(PointObject),
}

/// One payload handed to the tooltip callback by the chart renderer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    #[serde(default)]
    pub component_type: ComponentType,
    #[serde(
        default,
        deserialize_with = "loose::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub series_name: Option<String>,
    /// Item name; mark points put their display name here
    #[serde(
        default,
        deserialize_with = "loose::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// Colored glyph markup drawn before the label
    #[serde(
        default,
        deserialize_with = "loose::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub marker: Option<String>,
    #[serde(
        default,
        deserialize_with = "loose::axis_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub axis_value: Option<AxisValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PointData>,
}

impl SeriesPoint {
    /// Build a series payload from a `(label, value)` tuple
    pub fn series(series_name: &str, label: SeriesValue, value: Option<SeriesValue>) -> Self {
        Self {
            series_name: Some(series_name.to_string()),
            data: Some(PointData::Tuple(vec![Some(label), value])),
            ..Default::default()
        }
    }

    pub fn with_axis_value(mut self, axis_value: AxisValue) -> Self {
        self.axis_value = Some(axis_value);
        self
    }

    pub fn with_marker(mut self, marker: &str) -> Self {
        self.marker = Some(marker.to_string());
        self
    }

    /// Value at `offset` in the tuple (or in an object's `value` list).
    /// Points without data, such as marker-line-only series, yield `None`.
    pub fn value_at(&self, offset: usize) -> Option<&SeriesValue> {
        match self.data.as_ref()? {
            PointData::Tuple(items) => items.get(offset)?.as_ref(),
            PointData::Object(PointObject {
                value: Some(DataValue::List(items)),
                ..
            }) => items.get(offset)?.as_ref(),
            PointData::Object(_) => None,
        }
    }

    /// The `coord` pair of a mark point
    pub fn coord(&self) -> Option<&[Option<SeriesValue>]> {
        match self.data.as_ref()? {
            PointData::Object(obj) => obj.coord.as_deref(),
            PointData::Tuple(_) => None,
        }
    }

    pub fn label_for_value(&self) -> Option<&str> {
        match self.data.as_ref()? {
            PointData::Object(obj) => obj.label_for_value.as_deref(),
            PointData::Tuple(_) => None,
        }
    }

    pub fn is_mark_point(&self) -> bool {
        self.component_type == ComponentType::MarkPoint
    }
}

/// Renderer payloads are loosely typed; these readers turn entries of an
/// unexpected shape into missing values instead of rejecting the payload.
mod loose {
    use super::*;

    pub(super) fn values<'de, D>(deserializer: D) -> Result<Vec<Option<SeriesValue>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = Vec::<Value>::deserialize(deserializer)?;
        Ok(items.into_iter().map(SeriesValue::from_loose).collect())
    }

    pub(super) fn list<'de, D>(deserializer: D) -> Result<Option<Vec<Option<SeriesValue>>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Array(items)) => {
                Some(items.into_iter().map(SeriesValue::from_loose).collect())
            }
            _ => None,
        })
    }

    pub(super) fn data_value<'de, D>(deserializer: D) -> Result<Option<DataValue>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Array(items)) => Some(DataValue::List(
                items.into_iter().map(SeriesValue::from_loose).collect(),
            )),
            Some(other) => SeriesValue::from_loose(other).map(DataValue::Single),
            None => None,
        })
    }

    pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.and_then(SeriesValue::from_loose).map(|v| v.to_string()))
    }

    pub(super) fn axis_value<'de, D>(deserializer: D) -> Result<Option<AxisValue>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value
            .and_then(SeriesValue::from_loose)
            .map(|v| AxisValue::from(&v)))
    }
}

/// Series values sharing one x-axis position
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AxisGroup {
    pub points: Vec<SeriesPoint>,
}

impl AxisGroup {
    pub fn new(points: Vec<SeriesPoint>) -> Self {
        Self { points }
    }

    /// The shared axis position; the renderer stamps it on every member
    pub fn axis_value(&self) -> Option<&AxisValue> {
        self.points.first()?.axis_value.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// What the tooltip callback receives: one item or a whole axis group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TooltipInput {
    Axis(AxisGroup),
    Item(SeriesPoint),
}

/// `[start, end)` of an aggregation bucket, or a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRange {
    pub start: i64,
    pub end: Option<i64>,
}

impl BucketRange {
    /// A width of `None` or `0` collapses the range to an instant
    pub fn new(timestamp: i64, width: Option<i64>) -> Self {
        let end = match width {
            Some(w) if w != 0 => Some(timestamp.saturating_add(w)),
            _ => None,
        };
        Self {
            start: timestamp,
            end,
        }
    }

    pub fn is_instant(&self) -> bool {
        self.end.is_none()
    }
}

/// What to print when a series has no value at the hovered position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingValuePolicy {
    /// An em-dash
    #[default]
    Dash,
    Blank,
    Zero,
    /// The literal `undefined`, matching older dashboards
    Undefined,
}

impl MissingValuePolicy {
    pub fn placeholder(&self) -> &'static str {
        match self {
            MissingValuePolicy::Dash => "—",
            MissingValuePolicy::Blank => "",
            MissingValuePolicy::Zero => "0",
            MissingValuePolicy::Undefined => "undefined",
        }
    }
}

/// `truncate` option: a flag (default length) or an explicit length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TruncateSetting {
    Flag(bool),
    Length(usize),
}

impl Default for TruncateSetting {
    fn default() -> Self {
        TruncateSetting::Flag(false)
    }
}

impl TruncateSetting {
    /// Effective maximum length, `None` when truncation is off
    pub fn length(&self) -> Option<usize> {
        match *self {
            TruncateSetting::Flag(false) | TruncateSetting::Length(0) => None,
            TruncateSetting::Flag(true) => Some(DEFAULT_TRUNCATE_LENGTH),
            TruncateSetting::Length(n) => Some(n),
        }
    }
}

/// Serializable tooltip options. Every field is optional in config files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TooltipSettings {
    /// Shorten long series names (off by default)
    pub truncate: TruncateSetting,
    /// The x axis holds epoch milliseconds (default false: category axis)
    pub is_grouped_by_date: bool,
    /// Append the time of day to date labels (default false)
    pub show_time_in_tooltip: bool,
    /// Format dates in UTC instead of the local zone (default false)
    pub utc: bool,
    /// Width of aggregation buckets in milliseconds (default none)
    pub bucket_size: Option<i64>,
    /// Include seconds in the time of day (default false)
    pub add_seconds_to_time_format: bool,
    /// 24-hour clock instead of `h:mm A` (default false)
    #[serde(rename = "clock24Hours")]
    pub clock_24h: bool,
    /// Series labels rendered with the indented style
    pub indent_labels: Vec<String>,
    /// Milliseconds before the tooltip hides (default 100)
    pub hide_delay: Option<u32>,
    /// Placeholder for series without a value (default em-dash)
    pub missing_value: MissingValuePolicy,
}

impl TooltipSettings {
    pub fn effective_hide_delay(&self) -> u32 {
        match self.hide_delay {
            Some(ms) if ms > 0 => ms,
            _ => DEFAULT_HIDE_DELAY_MS,
        }
    }
}

/// Rendered size of the tooltip element
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

/// Everything the positioning step needs to know about the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipGeometry {
    /// Cursor x relative to the chart container
    pub cursor_x: f64,
    /// Cursor y relative to the chart container
    pub cursor_y: f64,
    pub box_size: BoxSize,
    /// Left offset of the chart container within the viewport
    pub container_left: f64,
    pub viewport_width: f64,
}

/// Horizontal position of the arrow indicator inside the tooltip
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "px", rename_all = "lowercase")]
pub enum ArrowOffset {
    #[default]
    Centered,
    Pixels(f64),
}

impl fmt::Display for ArrowOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrowOffset::Centered => f.write_str("50%"),
            ArrowOffset::Pixels(px) => write!(f, "{}px", format_js_number(*px)),
        }
    }
}

/// Computed placement of the tooltip, relative to the chart container
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
    pub arrow_offset: ArrowOffset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_number_formatting() {
        assert_eq!(format_js_number(210.0), "210");
        assert_eq!(format_js_number(-15.0), "-15");
        assert_eq!(format_js_number(0.5), "0.5");
        assert_eq!(format_js_number(-0.0), "0");
        assert_eq!(format_js_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_bucket_range_zero_width_is_instant() {
        assert!(BucketRange::new(1_000, Some(0)).is_instant());
        assert!(BucketRange::new(1_000, None).is_instant());

        let range = BucketRange::new(1_000, Some(500));
        assert_eq!(range.end, Some(1_500));
    }

    #[test]
    fn test_value_lookup_shapes() {
        let tuple: SeriesPoint = serde_json::from_str(
            r#"{"seriesName":"errors","data":[1625097600000, 42]}"#,
        )
        .unwrap();
        assert_eq!(tuple.value_at(1), Some(&SeriesValue::Number(42.0)));

        let object: SeriesPoint = serde_json::from_str(
            r#"{"seriesName":"errors","data":{"value":[1625097600000, "n/a"]}}"#,
        )
        .unwrap();
        assert_eq!(object.value_at(1), Some(&SeriesValue::Text("n/a".into())));

        let scalar: SeriesPoint =
            serde_json::from_str(r#"{"seriesName":"errors","data":{"value":7}}"#).unwrap();
        assert_eq!(scalar.value_at(0), None);

        let bare: SeriesPoint = serde_json::from_str(r#"{"seriesName":"release"}"#).unwrap();
        assert_eq!(bare.value_at(0), None);
    }

    #[test]
    fn test_mark_point_payload() {
        let point: SeriesPoint = serde_json::from_str(
            r#"{
                "componentType": "markPoint",
                "name": "Deploy",
                "data": {"coord": [1625097600000, 12], "labelForValue": "p95"}
            }"#,
        )
        .unwrap();

        assert!(point.is_mark_point());
        assert_eq!(point.label_for_value(), Some("p95"));
        assert_eq!(point.coord().map(|c| c.len()), Some(2));
    }

    #[test]
    fn test_unexpected_entries_become_missing() {
        let point: SeriesPoint = serde_json::from_str(
            r#"{"seriesName":"a","data":[1,2,{"x":1}]}"#,
        )
        .unwrap();
        assert_eq!(point.value_at(1), Some(&SeriesValue::Number(2.0)));
        assert_eq!(point.value_at(2), None);

        let group: TooltipInput = serde_json::from_str(
            r#"[{"seriesName":"a","axisValue":"Mon","data":["Mon", true]}]"#,
        )
        .unwrap();
        let TooltipInput::Axis(group) = group else {
            panic!("expected an axis group");
        };
        assert_eq!(group.points[0].value_at(1), Some(&SeriesValue::Text("true".into())));

        let object: SeriesPoint = serde_json::from_str(
            r#"{"seriesName":7,"data":{"value":{"nested":1},"coord":"bad","labelForValue":false}}"#,
        )
        .unwrap();
        assert_eq!(object.series_name.as_deref(), Some("7"));
        assert_eq!(object.value_at(0), None);
        assert_eq!(object.coord(), None);
        assert_eq!(object.label_for_value(), Some("false"));
    }

    #[test]
    fn test_tooltip_input_shapes() {
        let axis: TooltipInput = serde_json::from_str(r#"[{"seriesName":"a"}]"#).unwrap();
        assert!(matches!(axis, TooltipInput::Axis(ref g) if g.len() == 1));

        let item: TooltipInput = serde_json::from_str(r#"{"seriesName":"a"}"#).unwrap();
        assert!(matches!(item, TooltipInput::Item(_)));
    }

    #[test]
    fn test_settings_defaults_and_truncate() {
        let settings: TooltipSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.effective_hide_delay(), DEFAULT_HIDE_DELAY_MS);
        assert_eq!(settings.truncate.length(), None);

        let settings: TooltipSettings =
            serde_json::from_str(r#"{"truncate": true, "hideDelay": 0}"#).unwrap();
        assert_eq!(settings.truncate.length(), Some(DEFAULT_TRUNCATE_LENGTH));
        assert_eq!(settings.effective_hide_delay(), DEFAULT_HIDE_DELAY_MS);

        let settings: TooltipSettings =
            serde_json::from_str(r#"{"truncate": 12, "clock24Hours": true}"#).unwrap();
        assert_eq!(settings.truncate.length(), Some(12));
        assert!(settings.clock_24h);
    }

    #[test]
    fn test_arrow_offset_display() {
        assert_eq!(ArrowOffset::Centered.to_string(), "50%");
        assert_eq!(ArrowOffset::Pixels(210.0).to_string(), "210px");
        assert_eq!(ArrowOffset::Pixels(12.5).to_string(), "12.5px");
    }
}
