//! UI rendering helpers for TUI
//!
//! Common UI utilities and layout helpers.

use ratatui::layout::Rect;

/// A `width` x `height` box centered in `area`, shrunk to fit.
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// A `width` x `height` box at (`left`, `top`) clipped to `area`.
pub fn placed_box(left: u16, top: u16, width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + left.min(area.width.saturating_sub(1));
    let y = area.y + top.min(area.height.saturating_sub(1));
    let width = width.min(area.right().saturating_sub(x));
    let height = height.min(area.bottom().saturating_sub(y));
    Rect::new(x, y, width, height)
}
