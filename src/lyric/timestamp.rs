use once_cell::sync::Lazy;
use regex::Regex;

// @module: Leading timestamp tag tokenizer

// @const: Leading `[mm:ss.xx]` / `[ss]` tag regex. The minutes part is
// optional and the sub-second separator may be `.` or `:`.
static TIME_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(?:(?P<min>[0-9]+):)?(?P<sec>[0-9]+(?:[.:][0-9]+)?)\]").unwrap()
});

/// Repeatedly strips a leading bracketed timestamp from `line`, collecting
/// one millisecond value per tag, until no further tag matches.
///
/// Returns the collected timestamps (possibly empty) and the remaining text,
/// trimmed. A line without any tag is not an error; the caller decides what
/// to do with an empty timestamp list. Numeric components that fail to parse
/// fall back to 0, matching the best-effort philosophy of the source format.
pub fn strip_leading_timestamps(line: &str) -> (Vec<u64>, String) {
    let mut rest = line.trim();
    let mut timestamps = Vec::new();

    while let Some(caps) = TIME_TAG_REGEX.captures(rest) {
        let minutes: u64 = caps
            .name("min")
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));
        // The first `:` inside the seconds group doubles as a decimal
        // separator in some sources.
        let seconds: f64 = caps
            .name("sec")
            .map_or(0.0, |m| m.as_str().replacen(':', ".", 1).parse().unwrap_or(0.0));

        timestamps.push((((minutes * 60) as f64 + seconds) * 1000.0).floor() as u64);

        rest = rest[caps.get(0).unwrap().end()..].trim();
    }

    (timestamps, rest.to_string())
}
