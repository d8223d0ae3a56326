//! RGB colors, linear blending and the lyric palette.
//!
//! Colors are stored as pre-computed byte triples so blending never has to
//! re-parse configuration strings on the hot path.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Neutral fallback used whenever a configured color can't be parsed.
pub const MID_GRAY: Rgb = Rgb::new(128, 128, 128);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0:?}")]
    Length(String),
    #[error("invalid hex digits in {0:?}")]
    Digits(String),
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB`.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorError::Length(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::Digits(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Parse a color, falling back to [`MID_GRAY`] on malformed input.
    pub fn parse_or_gray(s: &str) -> Self {
        Self::from_hex(s).unwrap_or(MID_GRAY)
    }

    /// Uppercase `#RRGGBB`, the form handed to styling sinks.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Linear per-channel blend of `c1` towards `c2`.
///
/// Each channel is `c1 * (1 - t) + c2 * t` truncated to a byte. `t` must
/// already be clamped to `[0, 1]` by the caller; this function does not clamp.
pub fn blend(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    debug_assert!(
        (0.0..=1.0).contains(&t),
        "blend ratio {t} must be clamped by the caller"
    );
    let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t) as u8;
    Rgb::new(mix(c1.r, c2.r), mix(c1.g, c2.g), mix(c1.b, c2.b))
}

/// Clamp a blend ratio into `[0, 1]`. NaN collapses to 0.
#[inline]
pub fn unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// The four lyric colors. Built once at startup and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Sung words and lines.
    pub active: Rgb,
    /// Intermediate accent used by pre-heat, wave and glow effects.
    pub transition: Rgb,
    /// Words and lines not yet sung.
    pub inactive: Rgb,
    /// Glow highlight.
    pub white: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            active: Rgb::new(0x7E, 0xC8, 0xE3),
            transition: Rgb::new(0xC9, 0xB1, 0xD4),
            inactive: Rgb::new(0x6B, 0x6B, 0x6B),
            white: Rgb::new(0xE8, 0xE8, 0xE8),
        }
    }
}

impl Palette {
    /// Build a palette from hex strings. Each malformed entry becomes mid-gray.
    pub fn from_hex(active: &str, transition: &str, inactive: &str, white: &str) -> Self {
        Self {
            active: Rgb::parse_or_gray(active),
            transition: Rgb::parse_or_gray(transition),
            inactive: Rgb::parse_or_gray(inactive),
            white: Rgb::parse_or_gray(white),
        }
    }
}
