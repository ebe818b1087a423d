//! In-memory raster surface.
//!
//! Mirrors the browser surface's behavior (transparent background, round
//! caps, resize erases) on a `tiny-skia` pixmap so drawings can be produced
//! and inspected without a browser.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use base64::Engine as _;
use base64::prelude::BASE64_STANDARD;
use tiny_skia::{Color, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::color::Rgba;
use crate::consts::PNG_DATA_URL_PREFIX;
use crate::engine::Segment;
use crate::geom::{Point, Size};
use crate::surface::{Surface, SurfaceError};

/// A [`Surface`] that draws into a pixel buffer.
pub struct RasterSurface {
    pixmap: Pixmap,
    origin: Point,
}

impl RasterSurface {
    /// Allocate a blank surface at client origin `(0, 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::InvalidSize`] for a zero-sized surface.
    pub fn new(size: Size) -> Result<Self, SurfaceError> {
        Ok(Self { pixmap: allocate(size)?, origin: Point::new(0.0, 0.0) })
    }

    /// Place the surface at a client-space offset, as if laid out on a page.
    #[must_use]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// The color at a surface-local pixel, or `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let px = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba { r: px.red(), g: px.green(), b: px.blue(), a: px.alpha() })
    }

    /// Whether every pixel is still the transparent background.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.pixmap.pixels().iter().all(|px| px.alpha() == 0)
    }
}

impl Surface for RasterSurface {
    fn origin(&self) -> Point {
        self.origin
    }

    fn size(&self) -> Size {
        Size::new(self.pixmap.width(), self.pixmap.height())
    }

    fn resize(&mut self, size: Size) -> Result<(), SurfaceError> {
        self.pixmap = allocate(size)?;
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn stroke_segment(&mut self, segment: &Segment) -> Result<(), SurfaceError> {
        let mut builder = PathBuilder::new();
        builder.move_to(segment.from.x as f32, segment.from.y as f32);
        builder.line_to(segment.to.x as f32, segment.to.y as f32);
        let Some(path) = builder.finish() else {
            return Ok(());
        };

        let mut paint = Paint::default();
        let Rgba { r, g, b, a } = segment.color;
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        let stroke = Stroke { width: segment.width as f32, line_cap: LineCap::Round, ..Stroke::default() };
        self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        self.pixmap.fill(Color::TRANSPARENT);
        Ok(())
    }

    fn export_data_url(&self) -> Result<String, SurfaceError> {
        let png = self
            .pixmap
            .encode_png()
            .map_err(|e| SurfaceError::Encode(e.to_string()))?;
        Ok(format!("{PNG_DATA_URL_PREFIX}{}", BASE64_STANDARD.encode(png)))
    }
}

fn allocate(size: Size) -> Result<Pixmap, SurfaceError> {
    Pixmap::new(size.width, size.height).ok_or(SurfaceError::InvalidSize { width: size.width, height: size.height })
}
