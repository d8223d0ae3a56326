//! Lyric colorization.
//!
//! Word-level modes color each word of a timed line; line-level modes color a
//! whole LRC line at once. Every mode is a pure function of its inputs and
//! returns [`Segment`]s, which a [`StyleSink`] turns into displayable text.

pub mod line;
pub mod sink;
pub mod word;

use crate::color::{Palette, Rgb};
use crate::lyrics::types::Word;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use sink::{AnsiSink, MarkupSink, StyleSink, to_spans};

/// A piece of text and the foreground color it should be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub color: Rgb,
}

impl<'a> Segment<'a> {
    pub fn new(text: &'a str, color: Rgb) -> Self {
        Self { text, color }
    }
}

/// Playback signals for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Signals {
    /// Position estimate in `[0, 1]`; fallback for word modes, sole driver
    /// for line modes.
    pub progress: f64,
    /// Monotonic seconds, used only as the phase of periodic effects.
    pub animation_time: f64,
    /// Index of the playing word, -1 for none. Read by Glow only.
    pub current_word_index: isize,
}

impl Signals {
    pub fn new(progress: f64, animation_time: f64, current_word_index: isize) -> Self {
        Self {
            progress,
            animation_time,
            current_word_index,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown render mode {0:?} (expected simple, smooth, wave or glow)")]
pub struct UnknownRenderMode(pub String);

/// Word-level render style, selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    Simple,
    #[default]
    Smooth,
    Wave,
    Glow,
}

/// Line-level render style used for lyrics without word timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineMode {
    #[default]
    LineSmooth,
    LineWave,
    LineGlow,
}

impl RenderMode {
    pub const ALL: [RenderMode; 4] = [
        RenderMode::Simple,
        RenderMode::Smooth,
        RenderMode::Wave,
        RenderMode::Glow,
    ];

    /// Line-level counterpart used when only LRC timing is available.
    pub fn line_mode(self) -> LineMode {
        match self {
            RenderMode::Simple | RenderMode::Smooth => LineMode::LineSmooth,
            RenderMode::Wave => LineMode::LineWave,
            RenderMode::Glow => LineMode::LineGlow,
        }
    }

    /// The next mode in [`RenderMode::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Simple => "simple",
            RenderMode::Smooth => "smooth",
            RenderMode::Wave => "wave",
            RenderMode::Glow => "glow",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = UnknownRenderMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(RenderMode::Simple),
            "smooth" => Ok(RenderMode::Smooth),
            "wave" => Ok(RenderMode::Wave),
            "glow" => Ok(RenderMode::Glow),
            _ => Err(UnknownRenderMode(s.to_string())),
        }
    }
}

/// Color a word sequence with the given mode.
pub fn render_words<'a>(
    mode: RenderMode,
    palette: &Palette,
    words: &'a [Word],
    signals: Signals,
) -> Vec<Segment<'a>> {
    match mode {
        RenderMode::Simple => word::simple(palette, words),
        RenderMode::Smooth => word::smooth(palette, words, signals.progress),
        RenderMode::Wave => word::wave(palette, words, signals.progress, signals.animation_time),
        RenderMode::Glow => word::glow(
            palette,
            words,
            signals.current_word_index,
            signals.animation_time,
        ),
    }
}

/// Color a whole line with the given line mode.
pub fn render_line<'a>(
    mode: LineMode,
    palette: &Palette,
    line: &'a str,
    progress: f64,
    animation_time: f64,
) -> Segment<'a> {
    let color = match mode {
        LineMode::LineSmooth => line::smooth(palette, progress),
        LineMode::LineWave => line::wave(palette, progress, animation_time),
        LineMode::LineGlow => line::glow(palette, progress, animation_time),
    };
    Segment::new(line, color)
}
