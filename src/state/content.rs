#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::net::content::{Content, ContentOrigin};
use crate::net::types::{Message, Slide};

/// Loaded slides and messages.
///
/// Empty until the loader settles; `origin` stays `None` until then.
#[derive(Clone, Debug, Default)]
pub struct ContentState {
    pub slides: Vec<Slide>,
    pub messages: Vec<Message>,
    pub origin: Option<ContentOrigin>,
}

impl ContentState {
    /// Replace both collections wholesale with a loader result.
    pub fn apply(&mut self, content: Content) {
        self.slides = content.slides;
        self.messages = content.messages;
        self.origin = Some(content.origin);
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.origin.is_some()
    }
}
