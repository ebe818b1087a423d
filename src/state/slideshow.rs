//! Carousel index.
//!
//! The index is kept in `[0, len)`. With no slides every transition is a
//! no-op and no slide is active.

#[cfg(test)]
#[path = "slideshow_test.rs"]
mod slideshow_test;

/// Which way to move through the slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlideshowState {
    pub current: usize,
    pub len: usize,
}

impl SlideshowState {
    /// Start over with `len` slides, showing the first one.
    pub fn load(&mut self, len: usize) {
        self.len = len;
        self.current = 0;
    }

    /// Move one slide in `direction`, wrapping at both ends.
    pub fn advance(&mut self, direction: Direction) {
        if self.len == 0 {
            return;
        }
        self.current = match direction {
            Direction::Next => (self.current + 1) % self.len,
            Direction::Prev => (self.current + self.len - 1) % self.len,
        };
    }

    /// Whether slide `index` carries the active marker.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && index == self.current
    }
}
