//! Normalized RGBA colors
//!
//! Channels are stored in [0, 1]. Colors serialize as `#RRGGBB` strings so
//! tuning files stay readable; alpha is a render-time concern and is not
//! carried through serialization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Parse a `#RRGGBB` string (hex digits in either case)
    pub fn hex(s: &str) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidHex(s.to_string());
        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(invalid)?;
        let channel =
            |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Format as `#rrggbb` (alpha dropped)
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    pub fn with_alpha(&self, a: f32) -> Self {
        Self { a, ..*self }
    }

    /// Fully desaturated copy (average of r, g, b), alpha kept
    pub fn grayscale(&self) -> Self {
        self.desaturate(1.0)
    }

    /// Blend each channel toward the r/g/b average by `t` (clamped to [0, 1]).
    /// `t = 0` is the color itself, `t = 1` is [`Color::grayscale`].
    pub fn desaturate(&self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let avg = (self.r + self.g + self.b) / 3.0;
        let lerp = |c: f32| c + (avg - c) * t;
        Self::new(lerp(self.r), lerp(self.g), lerp(self.b), self.a)
    }
}

/// CSS `rgba(...)` form, ready for a 2D canvas fill style
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.to_rgba8();
        write!(f, "rgba({r},{g},{b},{})", self.a)
    }
}

impl FromStr for Color {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = FormatError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::hex(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
