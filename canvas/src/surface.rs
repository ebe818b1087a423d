//! The seam between the engine and whatever holds the pixels.
//!
//! [`crate::render::CanvasSurface`] draws into a browser `<canvas>`;
//! [`crate::raster::RasterSurface`] draws into memory. The engine only ever
//! talks to this trait.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::engine::Segment;
use crate::geom::{Point, Size};

/// Errors raised by surface operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The canvas element has no 2D rendering context.
    #[error("2d rendering context unavailable")]
    ContextUnavailable,
    /// A surface of this size cannot be allocated.
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    /// Encoding the raster to an image failed.
    #[error("image encoding failed: {0}")]
    Encode(String),
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// A persistent raster that strokes can be drawn onto.
pub trait Surface {
    /// Top-left corner of the surface in client coordinates.
    fn origin(&self) -> Point;

    /// Current pixel dimensions.
    fn size(&self) -> Size;

    /// Change the pixel dimensions. Existing content is erased.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the surface cannot take the new size.
    fn resize(&mut self, size: Size) -> Result<(), SurfaceError>;

    /// Draw one line segment.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying drawing call fails.
    fn stroke_segment(&mut self, segment: &Segment) -> Result<(), SurfaceError>;

    /// Erase the whole surface back to its transparent background.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying drawing call fails.
    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// Serialize the current content as a `data:image/png;base64,...` URL.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the content cannot be encoded.
    fn export_data_url(&self) -> Result<String, SurfaceError>;
}
