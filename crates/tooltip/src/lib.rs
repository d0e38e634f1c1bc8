//! Chart tooltip engine
//!
//! Turns chart callback payloads into tooltip markup and works out where the
//! tooltip box goes on screen:
//!
//! - [`axis_label`]: date and bucket-range labels
//! - [`formatters`]: overridable value/name/marker/filter hooks
//! - [`content`]: the HTML builder ([`TooltipFormatter`])
//! - [`position`]: viewport-aware placement and the arrow side effect
//! - [`option`]: the static tooltip option record for the renderer

pub mod axis_label;
pub mod content;
pub mod formatters;
pub mod option;
pub mod position;

pub use axis_label::{format_axis_label, format_axis_label_at, AxisLabelOptions};
pub use content::TooltipFormatter;
pub use formatters::{
    default_value_formatter, format_grouped_number, AxisLabelFn, FilterFn, Formatters,
    MarkerFormatterFn, NameFormatterFn, Truncation, ValueFormatterFn,
};
pub use option::TooltipOption;
pub use position::{apply_placement, compute_position, ArrowHandle, CURSOR_GAP, EDGE_MARGIN};
