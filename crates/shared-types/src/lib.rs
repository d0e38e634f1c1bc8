//! Shared types for the dashchart crates
//!
//! Chart tooltip payloads, tooltip settings and placement, organization
//! roles and the common error type. The tooltip engine, the access-control
//! crate, the configuration system and the WASM bridge all build on these.

pub mod errors;
pub mod roles;
pub mod tooltip;

pub use errors::{DashChartsError, DashChartsResult, ErrorResponse};
pub use roles::{Actor, OrgRole, RoleRenderProps};
pub use tooltip::{
    format_js_number, ArrowOffset, AxisGroup, AxisValue, BoxSize, BucketRange, ComponentType,
    DataValue, MissingValuePolicy, PointData, PointObject, SeriesPoint, SeriesValue,
    TooltipGeometry, TooltipInput, TooltipPlacement, TooltipSettings, TruncateSetting,
    DEFAULT_HIDE_DELAY_MS, DEFAULT_TRUNCATE_LENGTH,
};
