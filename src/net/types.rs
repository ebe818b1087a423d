//! Records served by the two content files.
//!
//! `photos.json` holds an array of [`Slide`]s and `messages.json` an array of
//! [`Message`]s. Unknown fields are ignored; missing fields fail the parse.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One carousel entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Image URI.
    pub image: String,
    /// Heading shown over the image; doubles as its alt text.
    pub title: String,
    /// Longer text under the title.
    pub caption: String,
}

/// One message card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
}
