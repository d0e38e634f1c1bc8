//! Horizontal clamping of the tooltip box and its arrow indicator.
//!
//! The tooltip sits centered above the cursor. Near the right edge of the
//! viewport the box slides left, near the left edge it is pinned, and in
//! both cases the arrow is moved so it keeps pointing at the cursor. There
//! is no vertical clamping; charts live in vertically scrolling pages.

use dashchart_shared::{ArrowOffset, TooltipGeometry, TooltipPlacement};

/// Minimum distance kept between the tooltip and either viewport edge
pub const EDGE_MARGIN: f64 = 20.0;

/// Gap between the bottom of the tooltip and the cursor
pub const CURSOR_GAP: f64 = 20.0;

/// Compute where the tooltip goes for the current cursor position.
///
/// Best effort: zero-width containers or off-screen cursors are not
/// validated and simply produce whatever the arithmetic gives.
pub fn compute_position(geometry: &TooltipGeometry) -> TooltipPlacement {
    let TooltipGeometry {
        cursor_x,
        cursor_y,
        box_size,
        container_left,
        viewport_width,
    } = *geometry;

    let mut left = cursor_x - box_size.width / 2.0;
    let mut arrow_offset = ArrowOffset::Centered;

    let right_edge = container_left + cursor_x + box_size.width / 2.0;
    if right_edge >= viewport_width - EDGE_MARGIN {
        left -= right_edge - viewport_width + EDGE_MARGIN;
        arrow_offset = ArrowOffset::Pixels(cursor_x - left);
        log::trace!("Tooltip overflows right edge ({right_edge} >= {viewport_width}), left={left}");
    }

    if left + container_left - EDGE_MARGIN <= 0.0 {
        left = -container_left + EDGE_MARGIN;
        arrow_offset = ArrowOffset::Pixels(cursor_x - left);
        log::trace!("Tooltip pinned to left edge, left={left}");
    }

    TooltipPlacement {
        left,
        top: cursor_y - box_size.height - CURSOR_GAP,
        arrow_offset,
    }
}

/// Something that can move the arrow indicator, usually a DOM element
pub trait ArrowHandle {
    fn set_left(&mut self, value: &str);
}

/// Write the placement's arrow offset to the indicator. Safe to repeat;
/// the last write wins.
pub fn apply_placement<A: ArrowHandle + ?Sized>(placement: &TooltipPlacement, arrow: &mut A) {
    arrow.set_left(&placement.arrow_offset.to_string());
}
