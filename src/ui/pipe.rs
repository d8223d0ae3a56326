use crate::renderer::LyricRenderer;
use crate::render::StyleSink;
use crate::timer::PlaybackTimer;
use crate::ui::Track;
use std::io::Write;
use std::time::Duration;

/// Remembers the last printed frame so unchanged frames are skipped.
#[derive(Debug, Default)]
pub struct FrameDedup {
    last: Option<String>,
}

impl FrameDedup {
    /// Returns the frame if it differs from the previous one.
    pub fn accept(&mut self, frame: String) -> Option<&str> {
        if self.last.as_deref() == Some(frame.as_str()) {
            return None;
        }
        self.last = Some(frame);
        self.last.as_deref()
    }
}

/// Play the track once, writing the current line to `out` whenever its
/// rendering changes.
pub async fn display_lyrics_pipe<W: Write>(
    track: &Track,
    renderer: &LyricRenderer,
    sink: &dyn StyleSink,
    frame: Duration,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let clock = PlaybackTimer::started_at(0.0);
    let end_ms = track.end_ms();
    let mut ticker = tokio::time::interval(frame);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut dedup = FrameDedup::default();

    tracing::debug!(mode = %renderer.mode(), end_ms, "Starting pipe preview");
    loop {
        ticker.tick().await;
        let now = clock.now_ms();
        if let Some(line) = track.current_line(renderer, now, sink)
            && let Some(line) = dedup.accept(line)
        {
            writeln!(out, "{line}")?;
            out.flush()?;
        }
        if now >= end_ms {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Palette;
    use crate::config::Config;
    use crate::render::{MarkupSink, RenderMode};

    #[test]
    fn dedup_skips_repeated_frames() {
        let mut d = FrameDedup::default();
        assert_eq!(d.accept("a".into()), Some("a"));
        assert_eq!(d.accept("a".into()), None);
        assert_eq!(d.accept("b".into()), Some("b"));
        assert_eq!(d.accept("a".into()), Some("a"));
    }

    #[tokio::test]
    async fn pipe_plays_the_whole_track() {
        let cfg = Config {
            lines: vec!["one two".into(), "three".into()],
            word_ms: 5,
            ..Config::default()
        };
        let track = Track::from_config(&cfg);
        let renderer = LyricRenderer::new(Palette::default(), RenderMode::Simple);
        let mut out = Vec::new();
        display_lyrics_pipe(&track, &renderer, &MarkupSink, Duration::from_millis(1), &mut out)
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let last = text.lines().last().unwrap();
        // the final frame shows the last line fully sung
        assert_eq!(last, format!("[{}]three[/]", Palette::default().active.to_hex()));
        let unique: std::collections::HashSet<_> = text.lines().collect();
        assert_eq!(unique.len(), text.lines().count());
    }
}
