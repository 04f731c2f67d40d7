/*!
 * Diagnostic checks for reconstructed lyric timelines.
 *
 * Validation never rejects a timeline: lyric sources are best-effort by
 * nature, so every finding here is a warning for the log, not an error.
 *
 * - `timeline`: Ordering, overlap and word-fragment consistency checks
 */

pub mod timeline;

pub use timeline::{
    LineCheckResult, TimelineIssue, TimelineValidationResult, TimelineValidator,
    TimelineValidatorConfig,
};
