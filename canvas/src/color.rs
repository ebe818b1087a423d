//! Stroke color parsing.
//!
//! The color picker reports `#rrggbb`; `#rgb` is accepted too so that
//! defaults can be written either way.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Why a color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have 3 or 6 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in color: {0:?}")]
    BadDigit(String),
}

/// An opaque-or-translucent RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black; the color of a cleared surface.
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    #[must_use]
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Canonical lowercase `#rrggbb` form, ignoring alpha.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let Some(hex) = trimmed.strip_prefix('#') else {
            return Err(ColorError::MissingHash(raw.to_owned()));
        };
        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| ColorError::BadDigit(raw.to_owned()))
        };
        if !hex.is_ascii() {
            return Err(ColorError::BadDigit(raw.to_owned()));
        }
        match hex.len() {
            3 => Ok(Self::opaque(
                channel(&hex[0..1].repeat(2))?,
                channel(&hex[1..2].repeat(2))?,
                channel(&hex[2..3].repeat(2))?,
            )),
            6 => Ok(Self::opaque(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            _ => Err(ColorError::BadLength(raw.to_owned())),
        }
    }
}
