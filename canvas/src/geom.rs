#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::consts::MIN_SURFACE_HEIGHT_PX;

/// A point in either client (viewport) or surface-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of a surface or its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Shrink by `chrome` (borders and padding) in each dimension, stopping at zero.
    #[must_use]
    pub fn saturating_sub(self, chrome: Size) -> Self {
        Self {
            width: self.width.saturating_sub(chrome.width),
            height: self.height.saturating_sub(chrome.height),
        }
    }

    /// Whether either dimension is zero.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Convert a client-space point to surface-local coordinates.
///
/// `origin` is the surface's top-left corner in client space, as reported by
/// its bounding rectangle at the time of the event.
#[must_use]
pub fn to_surface(client: Point, origin: Point) -> Point {
    Point { x: client.x - origin.x, y: client.y - origin.y }
}

/// Surface dimensions for a given container size.
///
/// Width follows the container; height follows it too but never drops below
/// [`MIN_SURFACE_HEIGHT_PX`]. `container` must be the space available to
/// the surface's backing store, without the surface's own border; otherwise
/// each re-fit grows the surface by that border.
#[must_use]
pub fn fit_to_container(container: Size) -> Size {
    Size {
        width: container.width,
        height: container.height.max(MIN_SURFACE_HEIGHT_PX),
    }
}
