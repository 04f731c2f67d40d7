use serde::{Deserialize, Serialize};

// @module: Shared timeline data model

/// A single word-level timing fragment inside a display line.
///
/// Fragments are owned by their parent line and immutable once produced.
/// The `flag` value is a stress/emphasis marker carried through verbatim;
/// this crate assigns it no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordFragment {
    // @field: Start time in ms
    pub time: u64,

    // @field: Highlight duration in ms
    pub duration: u64,

    // @field: Opaque stress/emphasis marker
    pub flag: u32,

    // @field: Fragment text, spacing included
    pub text: String,
}

/// One display line of the merged timeline.
///
/// A full song's lyric is an ordered sequence of these, sorted by `time`
/// ascending. Overlay fields that were never attached are omitted from the
/// serialized JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricLine {
    /// Start time in milliseconds
    pub time: u64,

    /// On-screen duration in milliseconds
    pub duration: u64,

    /// Original lyric text (empty for synthesized silence lines)
    pub original_text: String,

    /// Translation overlay, when one matched this line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,

    /// Romanization overlay, when one matched this line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub romanized_text: Option<String>,

    /// Word-track line start time. Kept separately from `time` because the
    /// merge step may reinterpret `time` while this stays authoritative for
    /// the word highlight track.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_time: Option<u64>,

    /// Word-level timing fragments, present on dynamic-track lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragments: Option<Vec<WordFragment>>,
}

impl LyricLine {
    /// Creates a plain line with no duration assigned yet.
    pub fn plain(time: u64, text: String) -> Self {
        LyricLine {
            time,
            original_text: text,
            ..Default::default()
        }
    }

    /// Creates a synthesized blank line covering a silent span.
    pub fn blank(time: u64, duration: u64) -> Self {
        LyricLine {
            time,
            duration,
            ..Default::default()
        }
    }

    /// Whether the line carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.original_text.trim().is_empty()
    }

    /// End of the line's sung span. The word-track start time takes
    /// precedence over `time` when present.
    pub fn end_time(&self) -> u64 {
        self.dynamic_time.unwrap_or(self.time) + self.duration
    }
}
