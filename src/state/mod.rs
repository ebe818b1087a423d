//! Per-component page state.
//!
//! DESIGN
//! ======
//! State is split by feature (`content`, `slideshow`, `audio`, `hearts`,
//! `ui`) so each component depends on one small model. The models are plain
//! structs with no browser dependencies; components wrap them in `RwSignal`s
//! provided through context.

pub mod audio;
pub mod content;
pub mod hearts;
pub mod slideshow;
pub mod ui;
