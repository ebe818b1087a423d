#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use canvas::consts::DEFAULT_STROKE_COLOR;
use canvas::input::Mode;

/// UI state for the message composer: which editor is showing and the
/// color picker's current value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub mode: Mode,
    pub color: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self { mode: Mode::default(), color: DEFAULT_STROKE_COLOR.to_hex() }
    }
}
