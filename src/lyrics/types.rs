/// Playback status of one word within the current line.
///
/// Within a well-formed line every `Played` word precedes the single
/// `Playing` word, which precedes every `NotPlayed` word. Renderers trust
/// this ordering but never rely on it for memory safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordState {
    #[default]
    NotPlayed,
    Playing,
    Played,
}

/// One word as seen by the renderers on a single tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub state: WordState,
    /// Fractional progress (0..=1) through this word's own duration.
    /// Only meaningful while `state == Playing`.
    pub interpolation: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, state: WordState, interpolation: f64) -> Self {
        Self {
            text: text.into(),
            state,
            interpolation,
        }
    }

    pub fn played(text: impl Into<String>) -> Self {
        Self::new(text, WordState::Played, 1.0)
    }

    pub fn playing(text: impl Into<String>, interpolation: f64) -> Self {
        Self::new(text, WordState::Playing, interpolation)
    }

    pub fn not_played(text: impl Into<String>) -> Self {
        Self::new(text, WordState::NotPlayed, 0.0)
    }
}

/// Check the Played* Playing? NotPlayed* ordering of a word sequence.
pub fn is_well_ordered(words: &[Word]) -> bool {
    let rank = |s: WordState| match s {
        WordState::Played => 0,
        WordState::Playing => 1,
        WordState::NotPlayed => 2,
    };
    let playing = words
        .iter()
        .filter(|w| w.state == WordState::Playing)
        .count();
    playing <= 1 && words.windows(2).all(|p| rank(p[0].state) <= rank(p[1].state))
}

/// Word-level timing of a single word, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTiming {
    pub text: String,
    pub start_ms: i64,
    pub end_ms: i64,
}

/// A lyric line with per-word timings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimedLine {
    pub start_ms: i64,
    pub end_ms: i64,
    pub words: Vec<WordTiming>,
    /// Optional translated text for the whole line.
    pub translation: Option<String>,
}

impl TimedLine {
    /// The line's text as the concatenation of its words.
    pub fn text(&self) -> String {
        self.words.iter().map(|w| w.text.as_str()).collect()
    }
}

/// A plain LRC line: one timestamp, no word breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LrcLine {
    pub start_ms: i64,
    pub text: String,
    pub translation: Option<String>,
}
