//! Page configuration.
//!
//! Everything tunable about the page lives in one typed struct with
//! compiled-in defaults. The root component provides it through context;
//! nothing is read from the environment or persisted.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SLIDES_URL: &str = "photos.json";
pub const DEFAULT_MESSAGES_URL: &str = "messages.json";
pub const DEFAULT_SLIDE_INTERVAL_MS: u32 = 8_000;
pub const DEFAULT_HEART_INTERVAL_MS: u32 = 2_000;
pub const DEFAULT_HEART_LIFETIME_MS: u32 = 6_000;
pub const DEFAULT_MUSIC_SRC: &str = "music/background.mp3";
pub const DEFAULT_EXPORT_FILENAME: &str = "mi_mensaje_para_ti.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Where the slide collection is fetched from, relative to the page.
    pub slides_url: String,
    /// Where the message collection is fetched from, relative to the page.
    pub messages_url: String,
    /// Period of the automatic carousel advance.
    pub slide_interval_ms: u32,
    /// Period of the heart spawner.
    pub heart_interval_ms: u32,
    /// Delay after which a spawned heart is removed.
    pub heart_lifetime_ms: u32,
    /// Source of the looping background track.
    pub music_src: String,
    /// File name offered for the drawing download.
    pub export_filename: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            slides_url: DEFAULT_SLIDES_URL.to_owned(),
            messages_url: DEFAULT_MESSAGES_URL.to_owned(),
            slide_interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
            heart_interval_ms: DEFAULT_HEART_INTERVAL_MS,
            heart_lifetime_ms: DEFAULT_HEART_LIFETIME_MS,
            music_src: DEFAULT_MUSIC_SRC.to_owned(),
            export_filename: DEFAULT_EXPORT_FILENAME.to_owned(),
        }
    }
}

impl PageConfig {
    /// Upper bound on simultaneously live hearts implied by the timers.
    #[must_use]
    pub fn max_live_hearts(&self) -> u32 {
        if self.heart_interval_ms == 0 {
            return 0;
        }
        self.heart_lifetime_ms.div_ceil(self.heart_interval_ms)
    }
}
