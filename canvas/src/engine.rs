use crate::color::{ColorError, Rgba};
use crate::consts::{DEFAULT_STROKE_COLOR, STROKE_WIDTH_PX};
use crate::geom::{Point, Size, fit_to_container, to_surface};
use crate::input::{InputState, Mode, primary_touch};
use crate::surface::{Surface, SurfaceError};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// One stroke command: a straight line between two surface-local points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: Rgba,
    pub width: f64,
}

/// Surface mutations produced by the core for the engine to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Stroke(Segment),
    Clear,
    Resize(Size),
}

/// Core engine state: all logic that does not depend on a surface.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub input: InputState,
    pub mode: Mode,
    pub color: Rgba,
    pub stroke_width: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            input: InputState::default(),
            mode: Mode::default(),
            color: DEFAULT_STROKE_COLOR,
            stroke_width: STROKE_WIDTH_PX,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Gesture ---

    /// Start a stroke at a surface-local point.
    pub fn begin(&mut self, at: Point) {
        self.input = InputState::Drawing { last: at };
    }

    /// Continue the stroke to a surface-local point.
    ///
    /// Emits one segment from the previous point when a stroke is in
    /// progress; does nothing otherwise.
    pub fn extend(&mut self, to: Point) -> Vec<Action> {
        let InputState::Drawing { last } = self.input else {
            return Vec::new();
        };
        self.input = InputState::Drawing { last: to };
        vec![Action::Stroke(Segment { from: last, to, color: self.color, width: self.stroke_width })]
    }

    /// Finish the stroke.
    pub fn end(&mut self) {
        self.input = InputState::Idle;
    }

    // --- Surface ---

    /// Erase the surface. The selected color is kept.
    #[must_use]
    pub fn clear(&self) -> Vec<Action> {
        vec![Action::Clear]
    }

    /// Re-fit the surface to its container. The surface content is lost.
    #[must_use]
    pub fn resize(&self, container: Size) -> Vec<Action> {
        vec![Action::Resize(fit_to_container(container))]
    }

    /// React to the window changing size; only a visible surface is re-fit.
    #[must_use]
    pub fn viewport_changed(&self, container: Size) -> Vec<Action> {
        if self.mode.shows_surface() { self.resize(container) } else { Vec::new() }
    }

    /// Switch editors.
    ///
    /// Entering draw mode re-fits the surface because the container may have
    /// changed size while it was hidden. Leaving it drops any open stroke.
    pub fn set_mode(&mut self, mode: Mode, container: Size) -> Vec<Action> {
        self.mode = mode;
        match mode {
            Mode::Draw => self.resize(container),
            Mode::Write => {
                self.end();
                Vec::new()
            }
        }
    }

    // --- Style ---

    /// Select the stroke color from a `#rgb`/`#rrggbb` string.
    ///
    /// # Errors
    ///
    /// Returns the parse error and keeps the previous color when `raw` is
    /// not a hex color.
    pub fn set_color(&mut self, raw: &str) -> Result<Rgba, ColorError> {
        let color = raw.parse::<Rgba>()?;
        self.color = color;
        Ok(color)
    }

    // --- Queries ---

    /// Whether a stroke is in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.input.is_drawing()
    }
}

/// The full drawing engine. Wraps `EngineCore` and owns the surface.
pub struct Engine<S: Surface> {
    surface: S,
    pub core: EngineCore,
}

impl<S: Surface> Engine<S> {
    /// Create a new engine bound to the given surface.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self { surface, core: EngineCore::new() }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    // --- Input events ---

    /// Mouse/pointer down at a client-space point.
    pub fn pointer_down(&mut self, client: Point) {
        let at = to_surface(client, self.surface.origin());
        self.core.begin(at);
    }

    /// Mouse/pointer move to a client-space point.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the segment cannot be drawn.
    pub fn pointer_move(&mut self, client: Point) -> Result<(), SurfaceError> {
        let to = to_surface(client, self.surface.origin());
        let actions = self.core.extend(to);
        self.apply(actions)
    }

    /// Pointer released or left the surface.
    pub fn pointer_up(&mut self) {
        self.core.end();
    }

    /// Touch start with the current list of client-space touch points.
    pub fn touch_start(&mut self, touches: &[Point]) {
        if let Some(client) = primary_touch(touches) {
            self.pointer_down(client);
        }
    }

    /// Touch move with the current list of client-space touch points.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the segment cannot be drawn.
    pub fn touch_move(&mut self, touches: &[Point]) -> Result<(), SurfaceError> {
        match primary_touch(touches) {
            Some(client) => self.pointer_move(client),
            None => Ok(()),
        }
    }

    /// All fingers lifted.
    pub fn touch_end(&mut self) {
        self.core.end();
    }

    // --- Commands ---

    /// Erase the surface.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the surface cannot be cleared.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        let actions = self.core.clear();
        self.apply(actions)
    }

    /// Re-fit the surface to its container, erasing it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the surface cannot be resized.
    pub fn resize(&mut self, container: Size) -> Result<(), SurfaceError> {
        let actions = self.core.resize(container);
        self.apply(actions)
    }

    /// The window changed size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the surface cannot be resized.
    pub fn viewport_changed(&mut self, container: Size) -> Result<(), SurfaceError> {
        let actions = self.core.viewport_changed(container);
        self.apply(actions)
    }

    /// Switch between write and draw mode.
    ///
    /// # Errors
    ///
    /// Returns `Err` if entering draw mode fails to resize the surface.
    pub fn set_mode(&mut self, mode: Mode, container: Size) -> Result<(), SurfaceError> {
        let actions = self.core.set_mode(mode, container);
        self.apply(actions)
    }

    /// Select the stroke color.
    ///
    /// # Errors
    ///
    /// Returns the parse error when `raw` is not a hex color.
    pub fn set_color(&mut self, raw: &str) -> Result<Rgba, ColorError> {
        self.core.set_color(raw)
    }

    /// Serialize the surface as a PNG data URL.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the surface cannot be encoded.
    pub fn export(&self) -> Result<String, SurfaceError> {
        self.surface.export_data_url()
    }

    fn apply(&mut self, actions: Vec<Action>) -> Result<(), SurfaceError> {
        for action in actions {
            match action {
                Action::Stroke(segment) => self.surface.stroke_segment(&segment)?,
                Action::Clear => self.surface.clear()?,
                Action::Resize(size) => self.surface.resize(size)?,
            }
        }
        Ok(())
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.core.is_drawing()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.core.mode
    }
}
