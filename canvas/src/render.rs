//! Rendering into a browser `<canvas>` element.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. All fallible `Canvas2D` calls
//! propagate errors as [`SurfaceError`]; the host component decides what to
//! do with them.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::engine::Segment;
use crate::geom::{Point, Size};
use crate::surface::{Surface, SurfaceError};

/// Line cap used for every stroke so consecutive segments join smoothly.
const LINE_CAP: &str = "round";

/// A [`Surface`] backed by an `HtmlCanvasElement` and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Bind to a canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::ContextUnavailable`] if the element cannot
    /// provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(SurfaceError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::ContextUnavailable)?;
        Ok(Self { canvas, ctx })
    }

    /// The bound canvas element.
    #[must_use]
    pub fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn origin(&self) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        Point::new(rect.left(), rect.top())
    }

    fn size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, size: Size) -> Result<(), SurfaceError> {
        // Assigning either dimension resets the backing store and the context state.
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        self.ctx.set_line_cap(LINE_CAP);
        Ok(())
    }

    fn stroke_segment(&mut self, segment: &Segment) -> Result<(), SurfaceError> {
        self.ctx.set_stroke_style_str(&segment.color.to_hex());
        self.ctx.set_line_width(segment.width);
        self.ctx.set_line_cap(LINE_CAP);
        self.ctx.begin_path();
        self.ctx.move_to(segment.from.x, segment.from.y);
        self.ctx.line_to(segment.to.x, segment.to.y);
        self.ctx.stroke();
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, f64::from(size.width), f64::from(size.height));
        Ok(())
    }

    fn export_data_url(&self) -> Result<String, SurfaceError> {
        Ok(self.canvas.to_data_url()?)
    }
}
