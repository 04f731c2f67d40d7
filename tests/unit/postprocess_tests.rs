/*!
 * Tests for the timeline post-processor
 */

use lyrsync::lyric::{post_process, LyricLine, INSTRUMENTAL_PLACEHOLDER};

fn line(time: u64, duration: u64, text: &str) -> LyricLine {
    LyricLine {
        time,
        duration,
        original_text: text.to_string(),
        ..Default::default()
    }
}

/// Test the pure-instrumental short-circuit
#[test]
fn test_postProcess_withTrailingSentinelLine_shouldCollapseToPlaceholder() {
    let lines = vec![
        line(0, 1000, "Ignored"),
        line(5_940_000, 0, "纯音乐，请欣赏"),
    ];

    let result = post_process(lines);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].time, 0);
    assert_eq!(result[0].duration, 5_940_000);
    assert_eq!(result[0].original_text, INSTRUMENTAL_PLACEHOLDER);
}

/// Test that the sentinel needs both the time and the zero duration
#[test]
fn test_postProcess_withSentinelTimeButNonzeroDuration_shouldNotCollapse() {
    let lines = vec![line(0, 1000, "Kept"), line(5_940_000, 100, "Also kept")];

    let result = post_process(lines);

    assert_eq!(result.len(), 2);
}

/// Test that short silence filler is collapsed away
#[test]
fn test_postProcess_withShortGapBlank_shouldDropIt() {
    let lines = vec![line(0, 0, "A"), line(1000, 0, ""), line(2000, 0, "B")];

    let result = post_process(lines);

    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|l| !l.original_text.is_empty()));
}

/// Test that a blank covering a long silence is kept
#[test]
fn test_postProcess_withLongGapBlank_shouldKeepIt() {
    let lines = vec![line(0, 0, "A"), line(1000, 0, ""), line(7000, 0, "B")];

    let result = post_process(lines);

    assert_eq!(result.len(), 3);
    assert_eq!(result[1].original_text, "");
}

/// Test that consecutive kept blanks are suppressed
#[test]
fn test_postProcess_withConsecutiveBlanks_shouldKeepOnlyFirst() {
    // Both blanks individually cover a long enough gap; only the first may
    // survive
    let lines = vec![
        line(0, 0, "A"),
        line(1000, 0, ""),
        line(7000, 0, ""),
        line(14000, 0, "B"),
    ];

    let result = post_process(lines);

    let blank_count = result.iter().filter(|l| l.original_text.is_empty()).count();
    assert_eq!(blank_count, 1);
    assert_eq!(result[1].time, 1000);
}

/// Test that a trailing blank with no successor is dropped
#[test]
fn test_postProcess_withTrailingBlank_shouldDropIt() {
    let lines = vec![line(0, 0, "A"), line(9000, 0, "")];

    let result = post_process(lines);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].original_text, "A");
}

/// Test that leading blanks are stripped even when their gap is long
#[test]
fn test_postProcess_withLeadingBlank_shouldStripAndRepad() {
    let lines = vec![line(0, 0, ""), line(6000, 0, "A")];

    let result = post_process(lines);

    assert_eq!(result.len(), 2);
    // The original leading blank is gone; a synthesized lead-in replaced it
    assert_eq!(result[0].time, 500);
    assert_eq!(result[0].duration, 5500);
    assert_eq!(result[0].original_text, "");
    assert_eq!(result[1].time, 6000);
}

/// Test the lead-in pad for a late first line
#[test]
fn test_postProcess_withLateFirstLine_shouldPrependLeadIn() {
    let lines = vec![line(9000, 0, "Hello")];

    let result = post_process(lines);

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].time, 500);
    assert_eq!(result[0].duration, 8500);
    assert_eq!(result[0].original_text, "");
}

/// Test that an on-time first line gets no pad
#[test]
fn test_postProcess_withFirstLineAtThreshold_shouldNotPad() {
    let lines = vec![line(5000, 0, "Hello")];

    let result = post_process(lines);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].time, 5000);
}

/// Test idempotence: a second pass over the output changes nothing
#[test]
fn test_postProcess_appliedTwice_shouldBeIdempotent() {
    let lines = vec![
        line(0, 0, ""),
        line(6000, 1000, "A"),
        line(7000, 0, ""),
        line(15000, 1000, "B"),
        line(16000, 0, ""),
    ];

    let once = post_process(lines);
    let twice = post_process(once.clone());

    assert_eq!(once, twice);
}

/// Test empty input
#[test]
fn test_postProcess_withEmptyTimeline_shouldReturnEmpty() {
    assert!(post_process(Vec::new()).is_empty());
}
