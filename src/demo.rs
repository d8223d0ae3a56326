//! Synthetic lyric tracks for the preview: evenly timed words built from
//! plain text lines.

use crate::lyrics::types::{LrcLine, TimedLine, WordTiming};
use unicode_segmentation::UnicodeSegmentation;

pub const DEFAULT_LINES: [&str; 4] = [
    "Lights are low and the city hums",
    "Every word arrives in time",
    "Colors follow where the voice has been",
    "And fade ahead to what will come",
];

/// Split a line into words, keeping trailing whitespace attached to the
/// word before it so the concatenated words reproduce the line exactly.
pub fn split_words(line: &str) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for token in line.split_word_bounds() {
        let is_space = token.chars().all(char::is_whitespace);
        match words.last_mut() {
            Some(last) if is_space || last.chars().all(char::is_whitespace) => last.push_str(token),
            _ => words.push(token.to_string()),
        }
    }
    words
}

/// Word-timed lines, each word lasting `word_ms`, with one word's worth of
/// silence between lines.
pub fn timed_track(lines: &[String], translations: &[String], word_ms: u64) -> Vec<TimedLine> {
    let word_ms = i64::try_from(word_ms).unwrap_or(i64::MAX / 1024).max(1);
    let mut cursor = 0i64;
    lines
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let start_ms = cursor;
            let words: Vec<WordTiming> = split_words(text)
                .into_iter()
                .map(|text| {
                    let start = cursor;
                    cursor = cursor.saturating_add(word_ms);
                    WordTiming { text, start_ms: start, end_ms: cursor }
                })
                .collect();
            let end_ms = cursor;
            cursor = cursor.saturating_add(word_ms);
            TimedLine {
                start_ms,
                end_ms,
                words,
                translation: translations.get(idx).cloned(),
            }
        })
        .collect()
}

/// The same track as plain LRC lines.
pub fn lrc_track(lines: &[String], translations: &[String], word_ms: u64) -> Vec<LrcLine> {
    timed_track(lines, translations, word_ms)
        .into_iter()
        .zip(lines)
        .map(|(timed, text)| LrcLine {
            start_ms: timed.start_ms,
            text: text.clone(),
            translation: timed.translation,
        })
        .collect()
}

/// End of the last line, used to loop the preview.
pub fn track_end_ms(track: &[TimedLine]) -> i64 {
    track.last().map(|l| l.end_ms).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_spacing_and_punctuation() {
        assert_eq!(split_words("hello  world"), vec!["hello  ", "world"]);
        assert_eq!(split_words(" lead"), vec![" lead"]);
        assert_eq!(split_words(""), Vec::<String>::new());
        let line = "Don't stop, believin'!";
        assert_eq!(split_words(line).concat(), line);
    }

    #[test]
    fn words_are_evenly_timed() {
        let lines = vec!["a b".to_string(), "c".to_string()];
        let track = timed_track(&lines, &["tr".to_string()], 100);
        assert_eq!(track.len(), 2);
        assert_eq!(track[0].start_ms, 0);
        assert_eq!(track[0].words[0].end_ms, 100);
        assert_eq!(track[0].words[1].start_ms, 100);
        assert_eq!(track[0].end_ms, 200);
        assert_eq!(track[1].start_ms, 300);
        assert_eq!(track[1].end_ms, 400);
        assert_eq!(track[0].translation.as_deref(), Some("tr"));
        assert_eq!(track[1].translation, None);
        assert_eq!(track_end_ms(&track), 400);
        assert_eq!(track[0].text(), "a b");
    }

    #[test]
    fn lrc_track_shares_start_times() {
        let lines = vec!["a b".to_string(), "c".to_string()];
        let lrc = lrc_track(&lines, &[], 100);
        assert_eq!(lrc[0].start_ms, 0);
        assert_eq!(lrc[1].start_ms, 300);
        assert_eq!(lrc[1].text, "c");
    }
}
