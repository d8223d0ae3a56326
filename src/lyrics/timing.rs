//! Derivation of per-tick word state from word timings and a playback time.
//!
//! This is the upstream half of the renderer contract: it turns static
//! millisecond timings into [`Word`]s plus the animation signals the render
//! modes consume.

use crate::lyrics::types::{LrcLine, Word, WordState, WordTiming};

/// Assumed duration of the last LRC line, which has no successor to end it.
pub const LAST_LINE_DURATION_MS: i64 = 5000;

/// Progress shown for an LRC line as soon as it becomes current.
const LRC_BASE_PROGRESS: f64 = 0.4;

/// Everything the word-level render modes need for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct WordFrame {
    pub words: Vec<Word>,
    /// Index of the playing word, or -1 when no word is playing.
    pub current_index: isize,
    /// Words that are played or playing.
    pub played: usize,
    /// `played / len`, 0 for an empty line.
    pub progress: f64,
    /// Phase source for periodic effects, in seconds.
    pub animation_time: f64,
}

impl WordFrame {
    /// Index used by Glow: the playing word, or the last finished word
    /// while the line sits between two words.
    pub fn glow_index(&self) -> isize {
        if self.current_index >= 0 {
            self.current_index
        } else {
            self.played as isize - 1
        }
    }
}

/// Derive word states for `time_ms`.
///
/// `compensation_ms` is added to the playback time before classifying words
/// (typically half a frame) so highlights don't visibly lag the audio. The
/// animation phase uses the uncompensated time.
pub fn derive_words(timings: &[WordTiming], time_ms: i64, compensation_ms: i64) -> WordFrame {
    let adjusted = time_ms.saturating_add(compensation_ms);
    let mut current_index = -1isize;
    let mut played = 0usize;

    let words = timings
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let (state, interpolation) = if adjusted < t.start_ms {
                (WordState::NotPlayed, 0.0)
            } else if adjusted >= t.end_ms {
                played += 1;
                (WordState::Played, 1.0)
            } else {
                played += 1;
                current_index = i as isize;
                let duration = t.end_ms - t.start_ms;
                let interpolation = if duration > 0 {
                    ((adjusted - t.start_ms) as f64 / duration as f64).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                (WordState::Playing, interpolation)
            };
            Word::new(t.text.clone(), state, interpolation)
        })
        .collect::<Vec<_>>();

    let progress = if words.is_empty() {
        0.0
    } else {
        played as f64 / words.len() as f64
    };

    WordFrame {
        words,
        current_index,
        played,
        progress,
        animation_time: time_ms as f64 * 0.001,
    }
}

/// Progress through an LRC line running from `start_ms` to `end_ms`.
///
/// A current line starts at 0.4 and reaches 1.0 once 60% of its duration has
/// elapsed.
pub fn lrc_line_progress(start_ms: i64, end_ms: i64, time_ms: i64) -> f64 {
    if time_ms <= start_ms {
        return LRC_BASE_PROGRESS;
    }
    if time_ms >= end_ms {
        return 1.0;
    }
    let duration = (end_ms - start_ms) as f64;
    let elapsed = (time_ms - start_ms) as f64;
    LRC_BASE_PROGRESS + (elapsed / duration).min(1.0 - LRC_BASE_PROGRESS)
}

/// Progress of `lines[index]`, ending at the next line's start.
pub fn lrc_progress_at(lines: &[LrcLine], index: usize, time_ms: i64) -> f64 {
    let Some(line) = lines.get(index) else {
        return 0.0;
    };
    let end = lines
        .get(index + 1)
        .map(|next| next.start_ms)
        .unwrap_or(line.start_ms + LAST_LINE_DURATION_MS);
    lrc_line_progress(line.start_ms, end, time_ms)
}

/// Index of the line sounding at `time_ms`, by start time.
///
/// Returns `None` before the first line starts.
pub fn line_index_at<T>(lines: &[T], time_ms: i64, start_of: impl Fn(&T) -> i64) -> Option<usize> {
    match lines.binary_search_by(|line| start_of(line).cmp(&time_ms)) {
        Ok(idx) => Some(idx),
        Err(0) => None,
        Err(idx) => Some(idx - 1),
    }
}
