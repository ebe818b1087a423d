//! Floating hearts.
//!
//! Each spawner tick adds one [`Heart`] with a random horizontal position and
//! float duration; a one-shot timer removes it again by id. The live set is
//! bounded only by the interval/lifetime ratio of the two timers.

#[cfg(test)]
#[path = "hearts_test.rs"]
mod hearts_test;

use std::ops::Range;

use rand::Rng;

pub const HEART_GLYPH: &str = "\u{2764}\u{FE0F}";

/// Horizontal start position, in viewport-width units.
pub const LEFT_VW_RANGE: Range<f64> = 0.0..100.0;

/// Float animation duration, in seconds.
pub const DURATION_S_RANGE: Range<f64> = 4.0..7.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Heart {
    pub id: u64,
    pub left_vw: f64,
    pub duration_s: f64,
}

impl Heart {
    /// Inline style positioning the heart and pacing its animation.
    #[must_use]
    pub fn style(&self) -> String {
        format!("left: {}vw; animation-duration: {}s;", self.left_vw, self.duration_s)
    }
}

#[derive(Clone, Debug, Default)]
pub struct HeartsState {
    next_id: u64,
    pub live: Vec<Heart>,
}

impl HeartsState {
    /// Add a heart and return its id for the removal timer.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.live.push(Heart {
            id,
            left_vw: rng.random_range(LEFT_VW_RANGE),
            duration_s: rng.random_range(DURATION_S_RANGE),
        });
        id
    }

    /// Drop the heart with `id`. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.live.len();
        self.live.retain(|h| h.id != id);
        self.live.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
