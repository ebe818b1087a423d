//! Shared numeric constants for the canvas crate.

use crate::color::Rgba;

// ── Strokes ─────────────────────────────────────────────────────

/// Fixed stroke width in surface pixels.
pub const STROKE_WIDTH_PX: f64 = 3.0;

/// Stroke color before the user touches the color picker.
pub const DEFAULT_STROKE_COLOR: Rgba = Rgba { r: 0xe9, g: 0x1e, b: 0x63, a: 0xff };

// ── Surface sizing ──────────────────────────────────────────────

/// The surface never gets shorter than this, whatever its container reports.
pub const MIN_SURFACE_HEIGHT_PX: u32 = 400;

// ── Export ──────────────────────────────────────────────────────

/// Prefix of every exported data URL.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";
