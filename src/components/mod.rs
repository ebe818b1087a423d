//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Each component reads the state it renders from context and owns its
//! own DOM wiring. The page shell in `app` composes them.

pub mod carousel;
pub mod drawing_pad;
pub mod hearts;
pub mod messages;
pub mod music_control;
