use super::timestamp::strip_leading_timestamps;

// @module: Plain (per-line timestamped) track parser

// @struct: Single timestamped text pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PureLine {
    // @field: Start time in ms
    pub time: u64,

    // @field: Line text
    pub text: String,
}

/// Parses a plain track blob into a flat, time-sorted list of
/// (timestamp, text) pairs.
///
/// A line carrying several leading timestamps expands into one `PureLine`
/// per timestamp, all sharing the same text (the repeated-chorus
/// convention). Lines without any timestamp are dropped. The result is
/// sorted by `time` ascending; the sort is stable, so pairs with equal
/// times keep their input order. An empty blob yields an empty list.
pub fn parse_plain_track(blob: &str) -> Vec<PureLine> {
    let mut result = Vec::new();

    for line in blob.lines() {
        let (timestamps, text) = strip_leading_timestamps(line);
        for time in timestamps {
            result.push(PureLine {
                time,
                text: text.clone(),
            });
        }
    }

    result.sort_by_key(|line| line.time);

    result
}
