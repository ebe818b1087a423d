//! Networking modules for the page's two content files.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the record schema, `content` fetches both collections and
//! owns the all-or-nothing fallback to embedded defaults.

pub mod content;
pub mod types;
