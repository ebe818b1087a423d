//! Background music playback flag.
//!
//! The flag mirrors the `<audio>` element on a best-effort basis: it moves to
//! `Playing` only after a play request succeeds, and falls back to `Paused`
//! when the browser refuses one.

#[cfg(test)]
#[path = "audio_test.rs"]
mod audio_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Playback {
    Playing,
    #[default]
    Paused,
}

impl Playback {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused => Self::Playing,
        }
    }

    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Glyph shown on the music control.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Playing => "\u{1F3B6}",
            Self::Paused => "\u{1F3B5}",
        }
    }

    /// Tooltip describing what a click will do.
    #[must_use]
    pub fn tooltip(self) -> &'static str {
        match self {
            Self::Playing => "Click para pausar música",
            Self::Paused => "Click para reproducir música",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AudioState {
    pub playback: Playback,
    /// Set by the first user toggle; a late autoplay verdict is ignored after it.
    pub user_touched: bool,
}

impl AudioState {
    /// Flip the flag and return the state the element should move to.
    pub fn toggle(&mut self) -> Playback {
        self.user_touched = true;
        self.playback = self.playback.toggled();
        self.playback
    }

    /// Record the outcome of the start-up autoplay attempt.
    pub fn autoplay_settled(&mut self, started: bool) {
        if self.user_touched {
            return;
        }
        self.playback = if started { Playback::Playing } else { Playback::Paused };
    }

    /// A play request was refused by the browser.
    pub fn play_rejected(&mut self) {
        self.playback = Playback::Paused;
    }
}
