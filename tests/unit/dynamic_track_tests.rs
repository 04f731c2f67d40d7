/*!
 * Tests for the word-level track parser
 */

use lyrsync::lyric::parse_dynamic_track;

/// Test basic line and word parsing
#[test]
fn test_parseDynamicTrack_withSimpleLine_shouldParseWords() {
    let blob = "[1000,3000](1000,600,0)Hello (1600,800,0)world";

    let lines = parse_dynamic_track(blob);

    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert_eq!(line.time, 1000);
    assert_eq!(line.duration, 3000);
    assert_eq!(line.dynamic_time, 1000);
    assert_eq!(line.fragments.len(), 2);
    assert_eq!(line.fragments[0].time, 1000);
    assert_eq!(line.fragments[0].duration, 600);
    assert_eq!(line.fragments[0].text, "Hello ");
    assert_eq!(line.fragments[1].time, 1600);
    assert_eq!(line.fragments[1].duration, 800);
    assert_eq!(line.fragments[1].text, "world");
}

/// Test the fragment round-trip property: concatenating fragment texts in
/// order reproduces the line's display text
#[test]
fn test_parseDynamicTrack_withAnyLine_shouldRoundTripText() {
    let blob = "[0,2000](0,500,0)Never (500,500,0)gonna (1000,1000,0)give";

    let lines = parse_dynamic_track(blob);

    let joined: String = lines[0].fragments.iter().map(|f| f.text.as_str()).collect();
    assert_eq!(joined, lines[0].original_text);
    assert_eq!(lines[0].original_text, "Never gonna give");
}

/// Test that a phrase inside one word slot splits into timed sub-tokens
#[test]
fn test_parseDynamicTrack_withPhraseInWordSlot_shouldSplitProportionally() {
    let blob = "[0,1000](0,900,0)foo bar baz";

    let lines = parse_dynamic_track(blob);

    let fragments = &lines[0].fragments;
    assert_eq!(fragments.len(), 3);
    assert_eq!(fragments[0].time, 0);
    assert_eq!(fragments[1].time, 300);
    assert_eq!(fragments[2].time, 600);
    assert!(fragments.iter().all(|f| f.duration == 300));
    assert_eq!(lines[0].original_text, "foo bar baz");
}

/// Test proportional splitting floors uneven divisions
#[test]
fn test_parseDynamicTrack_withUnevenSplit_shouldFloorDurations() {
    let blob = "[0,1000](0,1000,0)a b c";

    let lines = parse_dynamic_track(blob);

    let fragments = &lines[0].fragments;
    assert_eq!(fragments[0].time, 0);
    assert_eq!(fragments[1].time, 333);
    assert_eq!(fragments[2].time, 666);
    assert!(fragments.iter().all(|f| f.duration == 333));
}

/// Test that trailing space adjacency survives the split
#[test]
fn test_parseDynamicTrack_withTrailingSpace_shouldPreserveAdjacency() {
    let blob = "[0,1000](0,800,0)ab cd (800,200,0)x";

    let lines = parse_dynamic_track(blob);

    let fragments = &lines[0].fragments;
    assert_eq!(fragments[0].text, "ab ");
    assert_eq!(fragments[1].text, "cd ");
    assert_eq!(fragments[2].text, "x");
    assert_eq!(lines[0].original_text, "ab cd x");
}

/// Test that the stress/emphasis flag is carried through untouched
#[test]
fn test_parseDynamicTrack_withFlaggedWord_shouldKeepFlag() {
    let blob = "[0,500](0,500,7)Yeah";

    let lines = parse_dynamic_track(blob);

    assert_eq!(lines[0].fragments[0].flag, 7);
}

/// Test that lines without a valid header are skipped entirely
#[test]
fn test_parseDynamicTrack_withMalformedLines_shouldSkipThem() {
    let blob = "[ti:metadata]\nplain noise\n[500,500](500,500,0)Kept";

    let lines = parse_dynamic_track(blob);

    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].original_text, "Kept");
}

/// Test that file order is preserved without re-sorting
#[test]
fn test_parseDynamicTrack_withUnorderedLines_shouldKeepFileOrder() {
    let blob = "[5000,500](5000,500,0)Later\n[0,500](0,500,0)Earlier";

    let lines = parse_dynamic_track(blob);

    assert_eq!(lines[0].time, 5000);
    assert_eq!(lines[1].time, 0);
}

/// Test empty input
#[test]
fn test_parseDynamicTrack_withEmptyBlob_shouldReturnEmpty() {
    assert!(parse_dynamic_track("").is_empty());
}
