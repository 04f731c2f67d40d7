use once_cell::sync::Lazy;
use regex::Regex;

use super::timeline::{LyricLine, WordFragment};

// @module: Word-level (karaoke) track parser

// @const: Line header `[startMs,durationMs]` followed by the word stream
static LINE_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(?P<time>[0-9]+),(?P<duration>[0-9]+)\](?P<rest>.*)").unwrap()
});

// @const: Word header `(startMs,durationMs,flag)` followed by the word text,
// which runs until the next opening paren
static WORD_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\((?P<time>[0-9]+),(?P<duration>[0-9]+),(?P<flag>[0-9]+)\)(?P<word>[^(]*)")
        .unwrap()
});

/// One parsed line of a word-level track.
///
/// `original_text` is the concatenation of all fragment texts in order.
/// `dynamic_time` aliases `time` at this stage; it is kept separately
/// because the merge step may later reinterpret `time` while the word
/// highlight track still needs the authored start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicLine {
    /// Line start time in ms
    pub time: u64,

    /// Line duration in ms
    pub duration: u64,

    /// Display text, reassembled from the fragments
    pub original_text: String,

    /// Ordered word fragments
    pub fragments: Vec<WordFragment>,

    /// Authored word-track start time
    pub dynamic_time: u64,
}

impl From<DynamicLine> for LyricLine {
    fn from(line: DynamicLine) -> Self {
        LyricLine {
            time: line.time,
            duration: line.duration,
            original_text: line.original_text,
            translated_text: None,
            romanized_text: None,
            dynamic_time: Some(line.dynamic_time),
            fragments: Some(line.fragments),
        }
    }
}

/// Parses a word-timed blob into per-line records, in file order.
///
/// Each input line must start with a line header; lines that do not match
/// are skipped entirely. Within a line, word headers are consumed until the
/// stream stops matching. No sorting happens here — the merge engine sorts
/// later as needed.
pub fn parse_dynamic_track(blob: &str) -> Vec<DynamicLine> {
    let mut result = Vec::new();

    for raw_line in blob.trim().lines() {
        let line = raw_line.trim();
        let Some(caps) = LINE_HEADER_REGEX.captures(line) else {
            continue;
        };

        let time: u64 = caps["time"].parse().unwrap_or(0);
        let duration: u64 = caps["duration"].parse().unwrap_or(0);
        let mut rest = caps.name("rest").map_or("", |m| m.as_str());

        let mut fragments: Vec<WordFragment> = Vec::new();
        while !rest.is_empty() {
            let Some(word_caps) = WORD_HEADER_REGEX.captures(rest) else {
                break;
            };

            let word_time: u64 = word_caps["time"].parse().unwrap_or(0);
            let word_duration: u64 = word_caps["duration"].parse().unwrap_or(0);
            let flag: u32 = word_caps["flag"].parse().unwrap_or(0);
            let word = word_caps.name("word").map_or("", |m| m.as_str());

            split_word(word, word_time, word_duration, flag, &mut fragments);

            rest = &rest[word_caps.get(0).unwrap().end()..];
        }

        let original_text: String = fragments.iter().map(|f| f.text.as_str()).collect();

        result.push(DynamicLine {
            time,
            duration,
            original_text,
            fragments,
            dynamic_time: time,
        });
    }

    result
}

/// Splits one captured word into whitespace-delimited sub-tokens, sharing
/// the word's duration proportionally among them.
///
/// Some tracks ship whole phrases inside a single word slot, so a capture
/// may split into several fragments. Each of the k sub-tokens gets duration
/// `word_duration / k` and a start offset of `index * (word_duration / k)`.
/// Single-space adjacency from the original capture is preserved on the
/// first/last sub-token, and every non-final sub-token carries one trailing
/// space, so concatenating the fragment texts reproduces the display text.
fn split_word(word: &str, word_time: u64, word_duration: u64, flag: u32, out: &mut Vec<WordFragment>) {
    let sub_tokens: Vec<&str> = word.split_whitespace().collect();
    if sub_tokens.is_empty() {
        return;
    }

    let split_duration = word_duration as f64 / sub_tokens.len() as f64;
    let last = sub_tokens.len() - 1;

    for (i, sub_token) in sub_tokens.iter().enumerate() {
        let mut text = String::new();
        if i == 0 && word.starts_with(' ') {
            text.push(' ');
        }
        text.push_str(sub_token);
        if i < last || word.ends_with(' ') {
            text.push(' ');
        }

        out.push(WordFragment {
            time: word_time + (i as f64 * split_duration) as u64,
            duration: split_duration as u64,
            flag,
            text,
        });
    }
}
