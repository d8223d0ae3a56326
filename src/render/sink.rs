//! Styling sinks: turn colored segments into something a terminal can show.

use crate::color::Rgb;
use crate::render::Segment;
use crossterm::style::Stylize;
use ratatui::style::Style;
use ratatui::text::Span;

/// Applies a foreground color to a piece of text.
pub trait StyleSink {
    fn paint(&self, text: &str, color: Rgb) -> String;

    /// Paint every segment and concatenate the results in order.
    fn paint_segments(&self, segments: &[Segment<'_>]) -> String {
        segments
            .iter()
            .map(|s| self.paint(s.text, s.color))
            .collect()
    }
}

/// True-color ANSI output via crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiSink;

impl StyleSink for AnsiSink {
    fn paint(&self, text: &str, color: Rgb) -> String {
        text.with(crossterm::style::Color::from(color)).to_string()
    }
}

/// Plain `[#RRGGBB]text[/]` markup, for pipes that don't want escape codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupSink;

impl StyleSink for MarkupSink {
    fn paint(&self, text: &str, color: Rgb) -> String {
        format!("[{}]{}[/]", color.to_hex(), text)
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(c: Rgb) -> Self {
        crossterm::style::Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

impl From<Rgb> for ratatui::style::Color {
    fn from(c: Rgb) -> Self {
        ratatui::style::Color::Rgb(c.r, c.g, c.b)
    }
}

/// Convert segments into ratatui spans borrowing the segment text.
pub fn to_spans<'a>(segments: &[Segment<'a>]) -> Vec<Span<'a>> {
    segments
        .iter()
        .map(|s| Span::styled(s.text, Style::default().fg(ratatui::style::Color::from(s.color))))
        .collect()
}
