//! DOM access for tooltip placement: reading geometry and moving the arrow

use dashchart_shared::{BoxSize, TooltipGeometry};
use dashchart_tooltip::ArrowHandle;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

const ARROW_SELECTOR: &str = ".tooltip-arrow";

/// The tooltip's arrow indicator element
pub struct DomArrow(HtmlElement);

impl DomArrow {
    /// Look up the arrow inside the tooltip element
    pub fn find(tooltip: &Element) -> Option<Self> {
        tooltip
            .query_selector(ARROW_SELECTOR)
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()
            .map(DomArrow)
    }
}

impl ArrowHandle for DomArrow {
    fn set_left(&mut self, value: &str) {
        if let Err(err) = self.0.style().set_property("left", value) {
            log::warn!("Failed to move tooltip arrow: {err:?}");
        }
    }
}

/// Measure the tooltip box, its chart container and the viewport
pub fn read_geometry(cursor_x: f64, cursor_y: f64, tooltip: &HtmlElement) -> TooltipGeometry {
    let container_left = tooltip
        .parent_element()
        .map(|parent| parent.get_bounding_client_rect().left())
        .unwrap_or(0.0);

    let viewport_width = web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or_default();

    TooltipGeometry {
        cursor_x,
        cursor_y,
        box_size: BoxSize {
            width: f64::from(tooltip.client_width()),
            height: f64::from(tooltip.client_height()),
        },
        container_left,
        viewport_width,
    }
}
