use super::timeline::LyricLine;

// @module: Finishing pass over a merged timeline

/// Sentinel start time (99 minutes) that track authors put on a trailing
/// zero-duration line to mean "no lyric, purely instrumental".
pub const INSTRUMENTAL_SENTINEL_MS: u64 = 5_940_000;

/// Stable placeholder text emitted for purely instrumental tracks.
pub const INSTRUMENTAL_PLACEHOLDER: &str = "<instrumental>";

/// Minimum silent span, in ms, for a blank line to be worth keeping.
const MIN_KEPT_GAP_MS: u64 = 5_000;

/// First-line start time beyond which a lead-in line is synthesized.
const LEAD_IN_THRESHOLD_MS: u64 = 5_000;

/// Start time assigned to a synthesized lead-in line.
const LEAD_IN_START_MS: u64 = 500;

/// The canonical single-line timeline for a purely instrumental track.
pub fn instrumental_timeline() -> Vec<LyricLine> {
    vec![LyricLine {
        time: 0,
        duration: INSTRUMENTAL_SENTINEL_MS,
        original_text: INSTRUMENTAL_PLACEHOLDER.to_string(),
        ..Default::default()
    }]
}

/// Finishing pass shared by the plain and dynamic merge paths.
///
/// In order:
/// 1. Pure-instrumental short-circuit: a trailing line at the sentinel time
///    with zero duration replaces the whole timeline with the canonical
///    placeholder line.
/// 2. Filler collapse: a blank line survives only if a following line
///    exists, the gap to it exceeds the keep threshold, and the previously
///    emitted line was not itself a kept blank.
/// 3. Any remaining leading blank lines are dropped.
/// 4. Lead-in pad: when the first line starts late, a blank line covering
///    the intro is prepended.
///
/// The pass is idempotent: running it on its own output changes nothing.
pub fn post_process(lines: Vec<LyricLine>) -> Vec<LyricLine> {
    if let Some(last) = lines.last() {
        if last.time == INSTRUMENTAL_SENTINEL_MS && last.duration == 0 {
            return instrumental_timeline();
        }
    }

    let mut result: Vec<LyricLine> = Vec::with_capacity(lines.len());
    let mut just_kept_blank = false;
    for (i, line) in lines.iter().enumerate() {
        if line.is_blank() {
            if let Some(next) = lines.get(i + 1) {
                if next.time.saturating_sub(line.time) > MIN_KEPT_GAP_MS && !just_kept_blank {
                    result.push(line.clone());
                    just_kept_blank = true;
                }
            }
        } else {
            just_kept_blank = false;
            result.push(line.clone());
        }
    }

    while result.first().is_some_and(|line| line.original_text.is_empty()) {
        result.remove(0);
    }

    if let Some(first) = result.first() {
        if first.time > LEAD_IN_THRESHOLD_MS {
            let pad = LyricLine::blank(LEAD_IN_START_MS, first.time - LEAD_IN_START_MS);
            result.insert(0, pad);
        }
    }

    result
}
