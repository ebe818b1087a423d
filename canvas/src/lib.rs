//! Drawing surface engine for the keepsake page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! freehand drawing pipeline: normalizing mouse and touch input into
//! surface-local points, turning a gesture into line segments, and applying
//! those segments (plus clears and resizes) to a raster surface. The host
//! Leptos component is responsible only for wiring DOM events to the engine
//! and triggering the image download.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`geom`] | Points, sizes, and screen-to-surface conversion |
//! | [`input`] | Compose mode, gesture state, and touch normalization |
//! | [`color`] | Stroke color parsing |
//! | [`surface`] | The [`surface::Surface`] seam and its error type |
//! | [`render`] | Browser `Canvas2D` surface |
//! | [`raster`] | In-memory surface for headless rendering |
//! | [`consts`] | Shared numeric constants (stroke width, minimum height) |

pub mod color;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod input;
pub mod raster;
pub mod render;
pub mod surface;
