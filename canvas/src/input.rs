//! Input model: compose mode, the gesture state machine, and touch normalization.
//!
//! `Mode` captures which editor the user is looking at. `InputState` is the
//! active gesture tracked between pointer-down and pointer-up; it carries the
//! previous surface-local point so each move can emit one segment.
//!
//! Mouse and touch input share a single path: the host reduces a touch list
//! to one client point with [`primary_touch`] and hands it to the same engine
//! entry points a mouse event uses.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;

/// Which editor is showing: the plain text area or the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Plain text input (default).
    #[default]
    Write,
    /// Freehand drawing surface.
    Draw,
}

impl Mode {
    /// Whether the drawing surface is visible in this mode.
    #[must_use]
    pub fn shows_surface(self) -> bool {
        matches!(self, Self::Draw)
    }
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A stroke is in progress.
    Drawing {
        /// Surface-local position of the previous pointer event.
        last: Point,
    },
}

impl InputState {
    /// Whether a stroke is in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}

/// Reduce a list of active touch points to the one that drives drawing.
///
/// Only the first touch counts; the rest are ignored. Returns `None` for an
/// empty list.
#[must_use]
pub fn primary_touch(touches: &[Point]) -> Option<Point> {
    touches.first().copied()
}
