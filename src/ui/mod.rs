//! Preview front-ends: a line-per-change stdout pipe and a full-screen view.

pub mod modern;
pub mod pipe;

use crate::config::Config;
use crate::demo;
use crate::lyrics::timing::{LAST_LINE_DURATION_MS, line_index_at};
use crate::lyrics::types::{LrcLine, TimedLine};
use crate::renderer::LyricRenderer;
use crate::render::StyleSink;

/// The lyrics being previewed.
#[derive(Debug, Clone, PartialEq)]
pub enum Track {
    Timed(Vec<TimedLine>),
    Lrc(Vec<LrcLine>),
}

impl Track {
    pub fn from_config(cfg: &Config) -> Self {
        let lines: Vec<String> = if cfg.lines.is_empty() {
            demo::DEFAULT_LINES.iter().map(|l| l.to_string()).collect()
        } else {
            cfg.lines.clone()
        };
        if cfg.lrc {
            Track::Lrc(demo::lrc_track(&lines, &cfg.translations, cfg.word_ms))
        } else {
            Track::Timed(demo::timed_track(&lines, &cfg.translations, cfg.word_ms))
        }
    }

    /// Time after which nothing changes any more.
    pub fn end_ms(&self) -> i64 {
        match self {
            Track::Timed(lines) => demo::track_end_ms(lines),
            Track::Lrc(lines) => lines
                .last()
                .map(|l| l.start_ms + LAST_LINE_DURATION_MS)
                .unwrap_or(0),
        }
    }

    pub fn current_index(&self, time_ms: i64) -> Option<usize> {
        match self {
            Track::Timed(lines) => line_index_at(lines, time_ms, |l| l.start_ms),
            Track::Lrc(lines) => line_index_at(lines, time_ms, |l| l.start_ms),
        }
    }

    /// The current line only, or `None` before the first line.
    pub fn current_line(&self, renderer: &LyricRenderer, time_ms: i64, sink: &dyn StyleSink) -> Option<String> {
        let idx = self.current_index(time_ms)?;
        Some(match self {
            Track::Timed(lines) => renderer.render_current_timed(&lines[idx], time_ms, sink),
            Track::Lrc(lines) => renderer.render_current_lrc(lines, idx, time_ms, sink),
        })
    }

    pub fn window(&self, renderer: &LyricRenderer, time_ms: i64, rows: usize, sink: &dyn StyleSink) -> Vec<String> {
        match self {
            Track::Timed(lines) => renderer.window_timed(lines, time_ms, rows, sink),
            Track::Lrc(lines) => renderer.window_lrc(lines, time_ms, rows, sink),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_kind_follows_config() {
        let cfg = Config {
            lines: vec!["a b".into()],
            word_ms: 100,
            ..Config::default()
        };
        let timed = Track::from_config(&cfg);
        assert!(matches!(timed, Track::Timed(_)));
        assert_eq!(timed.end_ms(), 200);

        let lrc = Track::from_config(&Config { lrc: true, ..cfg });
        assert!(matches!(lrc, Track::Lrc(_)));
        assert_eq!(lrc.end_ms(), LAST_LINE_DURATION_MS);
    }

    #[test]
    fn window_centers_current_line() {
        use crate::color::Palette;
        use crate::render::{MarkupSink, RenderMode};

        let track = Track::from_config(&Config {
            lines: vec!["a".into(), "b".into(), "c".into()],
            word_ms: 100,
            lrc: true,
            ..Config::default()
        });
        let renderer = LyricRenderer::new(Palette::default(), RenderMode::Smooth);
        // line "b" starts at 200
        assert_eq!(track.current_index(250), Some(1));
        let rows = track.window(&renderer, 250, 3, &MarkupSink);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("]a[/]"));
        assert!(rows[1].contains("]b[/]"));
        assert!(rows[2].contains("]c[/]"));
        assert_eq!(track.current_index(-1), None);
    }

    #[test]
    fn empty_config_uses_demo_lines() {
        let track = Track::from_config(&Config::default());
        match track {
            Track::Timed(lines) => assert_eq!(lines.len(), demo::DEFAULT_LINES.len()),
            Track::Lrc(_) => panic!("expected timed track"),
        }
    }
}
