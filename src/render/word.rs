//! Word-level render modes: Simple, Smooth, Wave and Glow.

use crate::color::{Palette, blend, unit};
use crate::lyrics::types::{Word, WordState};
use crate::render::Segment;

/// Width, in words, of the Smooth gradient behind the playhead.
const FADE_WIDTH: f64 = 2.0;

/// How far the word after the playing one lights up before it starts.
const PREHEAT_MAX: f64 = 0.4;

/// Per-word color from its own state only.
pub fn simple<'a>(palette: &Palette, words: &'a [Word]) -> Vec<Segment<'a>> {
    words
        .iter()
        .map(|w| {
            let color = match w.state {
                WordState::Played => palette.active,
                WordState::Playing => blend(palette.inactive, palette.active, unit(w.interpolation)),
                WordState::NotPlayed => palette.inactive,
            };
            Segment::new(&w.text, color)
        })
        .collect()
}

/// Continuous position of the playhead in word units.
///
/// The first playing word gives `index + interpolation`; without one the
/// line-level `progress` is spread over all words.
fn precise_position(words: &[Word], progress: f64) -> f64 {
    match words
        .iter()
        .enumerate()
        .find(|(_, w)| w.state == WordState::Playing)
    {
        Some((i, w)) => i as f64 + unit(w.interpolation),
        None => words.len() as f64 * progress,
    }
}

/// Keep the playing word at least as bright as its own progress and force
/// played words to full activation.
fn apply_overrides(word: &Word, activation: f64) -> f64 {
    match word.state {
        WordState::Played => 1.0,
        WordState::Playing => activation.max(unit(word.interpolation)),
        WordState::NotPlayed => activation,
    }
}

/// Smooth gradient trailing the playhead over [`FADE_WIDTH`] words.
pub fn smooth<'a>(palette: &Palette, words: &'a [Word], progress: f64) -> Vec<Segment<'a>> {
    let pos = precise_position(words, progress);
    words
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let activation = apply_overrides(w, smooth_activation(i as f64, pos));
            Segment::new(&w.text, blend(palette.inactive, palette.active, activation))
        })
        .collect()
}

pub(crate) fn smooth_activation(i: f64, pos: f64) -> f64 {
    if i < pos - FADE_WIDTH {
        1.0
    } else if i > pos {
        0.0
    } else {
        unit((pos - i) / FADE_WIDTH)
    }
}

/// Narrow ±1 word window; fully sung words shimmer between the transition
/// and active colors with a wave traveling along the line.
pub fn wave<'a>(
    palette: &Palette,
    words: &'a [Word],
    progress: f64,
    animation_time: f64,
) -> Vec<Segment<'a>> {
    let pos = precise_position(words, progress);
    words
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let activation = apply_overrides(w, wave_activation(i as f64, pos));
            let color = if activation >= 1.0 {
                let phase = (animation_time * 3.0 - i as f64 * 0.5).sin();
                blend(palette.transition, palette.active, unit((phase + 1.0) / 2.0))
            } else if activation > 0.0 {
                blend(palette.inactive, palette.active, activation)
            } else {
                palette.inactive
            };
            Segment::new(&w.text, color)
        })
        .collect()
}

pub(crate) fn wave_activation(i: f64, pos: f64) -> f64 {
    if i < pos - 1.0 {
        1.0
    } else if i > pos + 1.0 {
        0.0
    } else {
        unit((pos - i + 1.0) / 2.0)
    }
}

/// A highlight traveling word by word.
///
/// Relative to `current` (the playing word, -1 for none): earlier words are
/// active, the word just finished fades out its glow, the playing word glows
/// with a pulse, and the next word pre-heats towards the transition color.
/// Everything else is inactive, so `current == -1` renders the whole line
/// inactive.
pub fn glow<'a>(
    palette: &Palette,
    words: &'a [Word],
    current: isize,
    animation_time: f64,
) -> Vec<Segment<'a>> {
    let current_interp = usize::try_from(current)
        .ok()
        .and_then(|c| words.get(c))
        .map(|w| unit(w.interpolation))
        .unwrap_or(0.0);
    let pulse = unit(((animation_time * 2.0).sin() + 1.0) / 2.0);
    let preheat_end = blend(palette.inactive, palette.transition, PREHEAT_MAX);

    words
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let i = i as isize;
            let color = if i + 1 < current {
                palette.active
            } else if i + 1 == current {
                let strength = (1.0 - current_interp) * (0.3 + pulse * 0.15);
                blend(palette.active, palette.white, unit(strength))
            } else if i == current {
                let interp = unit(w.interpolation);
                let base = blend(preheat_end, palette.active, interp);
                let strength = (0.15 + interp * 0.5 + pulse * 0.15).clamp(0.0, 0.8);
                blend(base, palette.white, strength)
            } else if i - 1 == current {
                blend(palette.inactive, palette.transition, current_interp * PREHEAT_MAX)
            } else {
                palette.inactive
            };
            Segment::new(&w.text, color)
        })
        .collect()
}
