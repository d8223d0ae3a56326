//! Long-lived lyric renderer.
//!
//! Holds the immutable palette and the configured mode, and turns timed or
//! LRC lines plus a playback time into finished display strings. The window
//! helpers lay out the 3 or 5 rows shown around the current line.

use crate::color::Palette;
use crate::lyrics::timing::{self, WordFrame};
use crate::lyrics::types::{LrcLine, TimedLine};
use crate::render::{self, RenderMode, Segment, Signals, StyleSink};

#[derive(Debug, Clone, PartialEq)]
pub struct LyricRenderer {
    palette: Palette,
    mode: RenderMode,
    /// Added to the playback time when classifying words.
    frame_compensation_ms: i64,
    show_translation: bool,
}

impl LyricRenderer {
    pub fn new(palette: Palette, mode: RenderMode) -> Self {
        Self {
            palette,
            mode,
            frame_compensation_ms: 0,
            show_translation: true,
        }
    }

    /// Compensate for half of a frame of `frame_ms` so highlights land on
    /// the frame closest to the audio.
    pub fn with_frame_duration_ms(mut self, frame_ms: u64) -> Self {
        self.frame_compensation_ms = i64::try_from(frame_ms / 2).unwrap_or(i64::MAX);
        self
    }

    pub fn with_translation(mut self, show: bool) -> Self {
        self.show_translation = show;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }

    pub fn show_translation(&self) -> bool {
        self.show_translation
    }

    pub fn set_show_translation(&mut self, show: bool) {
        self.show_translation = show;
    }

    /// Word states and signals for `line` at `time_ms`.
    pub fn frame(&self, line: &TimedLine, time_ms: i64) -> WordFrame {
        timing::derive_words(&line.words, time_ms, self.frame_compensation_ms)
    }

    /// Segments for the current timed line. Glow falls back to the last
    /// finished word while playback sits between two words.
    pub fn current_timed_segments<'a>(&self, frame: &'a WordFrame) -> Vec<Segment<'a>> {
        let current = match self.mode {
            RenderMode::Glow => frame.glow_index(),
            _ => frame.current_index,
        };
        let signals = Signals::new(frame.progress, frame.animation_time, current);
        render::render_words(self.mode, &self.palette, &frame.words, signals)
    }

    /// The current timed line with animated colors.
    pub fn render_current_timed(&self, line: &TimedLine, time_ms: i64, sink: &dyn StyleSink) -> String {
        let frame = self.frame(line, time_ms);
        let mut out = sink.paint_segments(&self.current_timed_segments(&frame));
        self.push_translation(&mut out, line.translation.as_deref(), sink);
        out
    }

    /// A timed line that is not current: every word inactive.
    pub fn render_idle_timed(&self, line: &TimedLine, sink: &dyn StyleSink) -> String {
        let mut out: String = line
            .words
            .iter()
            .map(|w| sink.paint(&w.text, self.palette.inactive))
            .collect();
        self.push_translation(&mut out, line.translation.as_deref(), sink);
        out
    }

    /// A plain line that is not current.
    pub fn render_idle_text(&self, text: &str, translation: Option<&str>, sink: &dyn StyleSink) -> String {
        let mut out = sink.paint(text, self.palette.inactive);
        self.push_translation(&mut out, translation, sink);
        out
    }

    /// Segment for the current LRC line, using the mode's line-level style.
    pub fn current_lrc_segment<'a>(&self, lines: &'a [LrcLine], index: usize, time_ms: i64) -> Option<Segment<'a>> {
        let line = lines.get(index)?;
        let progress = timing::lrc_progress_at(lines, index, time_ms);
        Some(render::render_line(
            self.mode.line_mode(),
            &self.palette,
            &line.text,
            progress,
            time_ms as f64 * 0.001,
        ))
    }

    /// The current LRC line; empty when `index` is out of range.
    pub fn render_current_lrc(&self, lines: &[LrcLine], index: usize, time_ms: i64, sink: &dyn StyleSink) -> String {
        let Some(segment) = self.current_lrc_segment(lines, index, time_ms) else {
            return String::new();
        };
        let mut out = sink.paint(segment.text, segment.color);
        self.push_translation(&mut out, lines[index].translation.as_deref(), sink);
        out
    }

    /// `rows` display rows (3 or 5) centered on the line sounding at
    /// `time_ms`. Before the first line starts, all rows are empty.
    pub fn window_timed(&self, lines: &[TimedLine], time_ms: i64, rows: usize, sink: &dyn StyleSink) -> Vec<String> {
        let current = timing::line_index_at(lines, time_ms, |l| l.start_ms);
        window(rows, current, lines.len(), |idx| {
            if Some(idx) == current {
                self.render_current_timed(&lines[idx], time_ms, sink)
            } else {
                self.render_idle_timed(&lines[idx], sink)
            }
        })
    }

    /// Like [`window_timed`](Self::window_timed), for LRC lines.
    pub fn window_lrc(&self, lines: &[LrcLine], time_ms: i64, rows: usize, sink: &dyn StyleSink) -> Vec<String> {
        let current = timing::line_index_at(lines, time_ms, |l| l.start_ms);
        window(rows, current, lines.len(), |idx| {
            if Some(idx) == current {
                self.render_current_lrc(lines, idx, time_ms, sink)
            } else {
                self.render_idle_text(&lines[idx].text, lines[idx].translation.as_deref(), sink)
            }
        })
    }

    fn push_translation(&self, out: &mut String, translation: Option<&str>, sink: &dyn StyleSink) {
        if !self.show_translation {
            return;
        }
        if let Some(t) = translation.filter(|t| !t.is_empty()) {
            out.push(' ');
            out.push_str(&sink.paint(&format!("[{t}]"), self.palette.inactive));
        }
    }
}

/// Normalize a requested row count to the supported 3 or 5.
pub fn window_rows(rows: usize) -> usize {
    if rows >= 5 { 5 } else { 3 }
}

/// Fill `rows` slots centered on `current`, rendering each line in range.
/// Slots without a line keep `T::default()`.
pub fn window<T: Default + Clone>(
    rows: usize,
    current: Option<usize>,
    len: usize,
    mut render: impl FnMut(usize) -> T,
) -> Vec<T> {
    let rows = window_rows(rows);
    let center = (rows - 1) / 2;
    let mut out = vec![T::default(); rows];
    let Some(current) = current else {
        return out;
    };
    for (slot, row) in out.iter_mut().enumerate() {
        let Some(idx) = (current + slot).checked_sub(center) else {
            continue;
        };
        if idx < len {
            *row = render(idx);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::blend;
    use crate::lyrics::types::WordTiming;
    use crate::render::MarkupSink;

    fn timed(start_ms: i64, words: &[&str], translation: Option<&str>) -> TimedLine {
        let words: Vec<WordTiming> = words
            .iter()
            .enumerate()
            .map(|(i, text)| WordTiming {
                text: (*text).to_string(),
                start_ms: start_ms + i as i64 * 100,
                end_ms: start_ms + (i as i64 + 1) * 100,
            })
            .collect();
        TimedLine {
            start_ms,
            end_ms: words.last().map(|w| w.end_ms).unwrap_or(start_ms),
            words,
            translation: translation.map(str::to_string),
        }
    }

    fn lrc(start_ms: i64, text: &str) -> LrcLine {
        LrcLine {
            start_ms,
            text: text.into(),
            translation: None,
        }
    }

    #[test]
    fn simple_current_line_in_markup() {
        let r = LyricRenderer::new(Palette::default(), RenderMode::Simple);
        let line = timed(0, &["a ", "b ", "c"], None);
        let out = r.render_current_timed(&line, 150, &MarkupSink);
        let p = Palette::default();
        let mid = blend(p.inactive, p.active, 0.5);
        assert_eq!(
            out,
            format!(
                "[{}]a [/][{}]b [/][{}]c[/]",
                p.active.to_hex(),
                mid.to_hex(),
                p.inactive.to_hex()
            )
        );
    }

    #[test]
    fn frame_compensation_moves_the_playhead() {
        let r = LyricRenderer::new(Palette::default(), RenderMode::Simple).with_frame_duration_ms(40);
        let line = timed(0, &["a ", "b"], None);
        let frame = r.frame(&line, 90);
        assert_eq!(frame.current_index, 1);
        assert!((frame.words[1].interpolation - 0.1).abs() < 1e-12);
    }

    #[test]
    fn glow_between_words_uses_last_played_word() {
        let p = Palette::default();
        let r = LyricRenderer::new(p, RenderMode::Glow);
        let mut line = timed(0, &["a ", "b"], None);
        line.words[1].start_ms = 300;
        line.words[1].end_ms = 400;
        let frame = r.frame(&line, 200);
        assert_eq!(frame.current_index, -1);
        let segments = r.current_timed_segments(&frame);
        // the finished word is treated as current, fully progressed
        assert_ne!(segments[0].color, p.inactive);
        // the next word is fully pre-heated
        assert_eq!(segments[1].color, blend(p.inactive, p.transition, 0.4));
    }

    #[test]
    fn translation_is_appended_when_enabled() {
        let p = Palette::default();
        let line = timed(0, &["hi"], Some("salut"));
        let r = LyricRenderer::new(p, RenderMode::Smooth);
        let out = r.render_idle_timed(&line, &MarkupSink);
        assert_eq!(
            out,
            format!("[{0}]hi[/] [{0}][salut][/]", p.inactive.to_hex())
        );
        let r = r.with_translation(false);
        assert_eq!(r.render_idle_timed(&line, &MarkupSink), format!("[{}]hi[/]", p.inactive.to_hex()));
        let empty = timed(0, &["hi"], Some(""));
        assert_eq!(
            LyricRenderer::new(p, RenderMode::Smooth).render_idle_timed(&empty, &MarkupSink),
            format!("[{}]hi[/]", p.inactive.to_hex())
        );
    }

    #[test]
    fn current_lrc_line_uses_line_mode() {
        let p = Palette::default();
        let lines = vec![lrc(0, "first"), lrc(1000, "second")];
        let r = LyricRenderer::new(p, RenderMode::Smooth);
        let seg = r.current_lrc_segment(&lines, 0, 0).unwrap();
        assert_eq!(seg.text, "first");
        assert_eq!(seg.color, crate::render::line::smooth(&p, 0.4));
        assert!(r.current_lrc_segment(&lines, 9, 0).is_none());
        assert_eq!(r.render_current_lrc(&lines, 9, 0, &MarkupSink), "");
    }

    #[test]
    fn timed_window_centers_current_line() {
        let p = Palette::default();
        let r = LyricRenderer::new(p, RenderMode::Smooth);
        let lines = vec![
            timed(0, &["one"], None),
            timed(1000, &["two"], None),
            timed(2000, &["three"], None),
        ];
        let rows = r.window_timed(&lines, 1050, 3, &MarkupSink);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], format!("[{}]one[/]", p.inactive.to_hex()));
        assert!(rows[1].contains("two"));
        assert_eq!(rows[2], format!("[{}]three[/]", p.inactive.to_hex()));

        let rows = r.window_timed(&lines, 0, 5, &MarkupSink);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], "");
        assert_eq!(rows[1], "");
        assert!(rows[2].contains("one"));
        assert!(rows[4].contains("three"));
    }

    #[test]
    fn window_is_empty_before_first_line() {
        let r = LyricRenderer::new(Palette::default(), RenderMode::Wave);
        let lines = vec![lrc(1000, "later")];
        assert_eq!(r.window_lrc(&lines, 0, 3, &MarkupSink), vec!["", "", ""]);
        assert_eq!(r.window_lrc(&[], 0, 4, &MarkupSink).len(), 3);
    }

    #[test]
    fn lrc_window_renders_neighbours_idle() {
        let p = Palette::default();
        let r = LyricRenderer::new(p, RenderMode::Glow);
        let lines = vec![lrc(0, "a"), lrc(1000, "b"), lrc(2000, "c")];
        let rows = r.window_lrc(&lines, 2100, 3, &MarkupSink);
        assert_eq!(rows[0], format!("[{}]b[/]", p.inactive.to_hex()));
        assert!(rows[1].contains("]c[/]"));
        assert_eq!(rows[2], "");
    }

    #[test]
    fn window_rows_normalized() {
        assert_eq!(window_rows(0), 3);
        assert_eq!(window_rows(3), 3);
        assert_eq!(window_rows(4), 3);
        assert_eq!(window_rows(5), 5);
        assert_eq!(window_rows(9), 5);
    }
}
