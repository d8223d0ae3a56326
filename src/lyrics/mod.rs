// lyrics/mod.rs - lyric data contract and per-tick timing derivation
pub mod timing;
pub mod types;

pub use timing::{WordFrame, derive_words, lrc_progress_at};
pub use types::{LrcLine, TimedLine, Word, WordState, WordTiming};
