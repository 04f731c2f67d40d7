use log::debug;

use super::dynamic::parse_dynamic_track;
use super::plain::parse_plain_track;
use super::postprocess::post_process;
use super::timeline::LyricLine;

// @module: Alignment and merge engine

// @const: Minimum silent span, in ms, worth representing as its own line
const GAP_INSERT_THRESHOLD_MS: u64 = 5_000;

/// Merges up to four lyric track blobs into one finished timeline.
///
/// The original track forms the base timeline; translation and romanization
/// attach to base lines as overlays; the word-level `dynamic` track, when
/// present and non-blank, replaces the original track as the base and
/// carries per-word timing through to the output. Absent tracks are passed
/// as empty strings. An empty result means "no lyric available", never an
/// error.
pub fn parse_lyric(original: &str, translated: &str, roman: &str, dynamic: &str) -> Vec<LyricLine> {
    if dynamic.trim().is_empty() {
        debug!("merging in plain mode");
        merge_plain(original, translated, roman)
    } else {
        debug!("merging in dynamic mode");
        merge_dynamic(dynamic, translated, roman)
    }
}

/// Plain mode: base timeline from the original track, overlays on exact
/// timestamp equality only, durations derived from line spacing.
fn merge_plain(original: &str, translated: &str, roman: &str) -> Vec<LyricLine> {
    let mut lines: Vec<LyricLine> = parse_plain_track(original)
        .into_iter()
        .map(|p| LyricLine::plain(p.time, p.text))
        .collect();

    for overlay in parse_plain_track(translated) {
        if let Some(target) = lines.iter_mut().find(|l| l.time == overlay.time) {
            target.translated_text = Some(overlay.text);
        }
    }

    for overlay in parse_plain_track(roman) {
        if let Some(target) = lines.iter_mut().find(|l| l.time == overlay.time) {
            target.romanized_text = Some(overlay.text);
        }
    }

    lines.sort_by_key(|l| l.time);

    // Durations are measured between surviving lines, so filler has to be
    // collapsed first; the closing pass then only re-derives the lead-in.
    let mut processed = post_process(lines);
    for i in 0..processed.len().saturating_sub(1) {
        let next_time = processed[i + 1].time;
        processed[i].duration = next_time - processed[i].time;
    }
    post_process(processed)
}

/// Dynamic mode: base timeline from the word-level track, overlays by
/// exact-or-nearest timestamp, silence gaps made explicit.
fn merge_dynamic(dynamic: &str, translated: &str, roman: &str) -> Vec<LyricLine> {
    let mut lines: Vec<LyricLine> = parse_dynamic_track(dynamic)
        .into_iter()
        .map(LyricLine::from)
        .collect();

    for overlay in parse_plain_track(translated) {
        let target = lines
            .iter()
            .position(|l| l.time == overlay.time)
            .or_else(|| nearest_line_index(&lines, overlay.time));
        if let Some(idx) = target {
            append_overlay(&mut lines[idx].translated_text, &overlay.text);
        }
    }

    // The romanization overlay deliberately has no exact-match shortcut: an
    // exact hit is just the nearest candidate with distance zero.
    for overlay in parse_plain_track(roman) {
        if let Some(idx) = nearest_line_index(&lines, overlay.time) {
            append_overlay(&mut lines[idx].romanized_text, &overlay.text);
        }
    }

    let lines = insert_silence_gaps(lines);
    post_process(lines)
}

/// Index of the line whose `time` is nearest to `time`. Ties keep the
/// earliest candidate: a later line only wins on a strictly smaller
/// distance.
fn nearest_line_index(lines: &[LyricLine], time: u64) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, line) in lines.iter().enumerate() {
        match best {
            None => best = Some(idx),
            Some(b) => {
                if line.time.abs_diff(time) < lines[b].time.abs_diff(time) {
                    best = Some(idx);
                }
            }
        }
    }
    best
}

/// Appends overlay text to a slot, space-joined. Several overlay lines
/// mapping to the same base line accumulate in arrival order.
fn append_overlay(slot: &mut Option<String>, text: &str) {
    match slot {
        Some(existing) => {
            if !existing.is_empty() {
                existing.push(' ');
            }
            existing.push_str(text);
        }
        None => *slot = Some(text.to_string()),
    }
}

/// Walks adjacent line pairs and emits a blank line between any two sung
/// lines separated by a long silence, so the gap is visible in the
/// timeline instead of being folded into the earlier line's tail.
fn insert_silence_gaps(lines: Vec<LyricLine>) -> Vec<LyricLine> {
    let mut result: Vec<LyricLine> = Vec::with_capacity(lines.len());
    let mut iter = lines.into_iter().peekable();

    while let Some(line) = iter.next() {
        let gap = iter.peek().and_then(|next| silence_gap(&line, next));
        result.push(line);
        if let Some(blank) = gap {
            result.push(blank);
        }
    }

    result
}

/// The blank line covering the silence between `this_line` and `next`, if
/// both are sung lines and the silence is long enough.
fn silence_gap(this_line: &LyricLine, next: &LyricLine) -> Option<LyricLine> {
    if this_line.is_blank() || next.is_blank() || this_line.duration == 0 {
        return None;
    }

    let this_end = this_line.end_time();
    let next_start = next.time.min(next.dynamic_time.unwrap_or(u64::MAX));

    if next_start.saturating_sub(this_end) >= GAP_INSERT_THRESHOLD_MS {
        debug!(
            "inserting {}ms silence line at {}ms",
            next_start - this_end,
            this_end
        );
        Some(LyricLine::blank(this_end, next_start - this_end))
    } else {
        None
    }
}
