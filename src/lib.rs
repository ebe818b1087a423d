//! # lovenote
//!
//! Leptos + WASM keepsake page: a photo carousel, message cards, looping
//! background music, a write-or-draw message composer, and hearts floating
//! across the screen.
//!
//! This crate contains the page shell, components, per-component state, and
//! the content loader. Drawing is delegated to the `canvas` crate through the
//! `DrawingPad` component.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component and context providers |
//! | [`components`] | Carousel, messages, composer, music control, hearts |
//! | [`config`] | [`config::PageConfig`] and its defaults |
//! | [`net`] | Content records and the all-or-nothing loader |
//! | [`state`] | Browser-free state models behind the components |
//! | [`util`] | DOM helpers (csr build only) |

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
