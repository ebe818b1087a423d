//! DOM event and layout readings for the drawing pad.
//!
//! Converts mouse and touch events into client-space [`Point`]s for the
//! engine and measures the canvas container.

use canvas::geom::{Point, Size};
use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

pub fn mouse_point(ev: &MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// All active touches, in order, as client-space points.
pub fn touch_points(ev: &TouchEvent) -> Vec<Point> {
    let list = ev.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())))
        .collect()
}

/// Space available to the canvas's backing store inside its parent.
///
/// Measured from the parent's inner box, minus the canvas's own border and
/// padding, so that re-fitting an already fitted canvas leaves it unchanged.
/// A detached or hidden canvas measures as empty.
pub fn container_size(canvas: &HtmlCanvasElement) -> Size {
    let Some(parent) = canvas.parent_element() else {
        return Size::default();
    };
    let inner = Size::new(px(parent.client_width()), px(parent.client_height()));
    let chrome = Size::new(
        px(canvas.offset_width() - canvas.client_width()),
        px(canvas.offset_height() - canvas.client_height()),
    );
    inner.saturating_sub(chrome)
}

fn px(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
