//! Browser helpers shared by the components.
//!
//! Everything here touches the DOM, so the modules only exist in the `csr`
//! build.

#[cfg(feature = "csr")]
pub mod canvas_input;
#[cfg(feature = "csr")]
pub mod download;
