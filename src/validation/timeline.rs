/*!
 * Timeline sanity checks.
 *
 * This module validates that a merged timeline is:
 * - Ordered by start time
 * - Free of overlapping display spans
 * - Internally consistent on word-fragment timing and text
 */

use log::debug;

use crate::lyric::LyricLine;

/// Result of validating a single timeline line
#[derive(Debug, Clone)]
pub struct LineCheckResult {
    /// Index of the line in the timeline
    pub index: usize,
    /// Whether the line passed validation
    pub passed: bool,
    /// Issues found
    pub issues: Vec<TimelineIssue>,
}

impl LineCheckResult {
    /// Create a passing result
    pub fn passed(index: usize) -> Self {
        Self {
            index,
            passed: true,
            issues: vec![],
        }
    }

    /// Create a failing result
    pub fn failed(index: usize, issues: Vec<TimelineIssue>) -> Self {
        Self {
            index,
            passed: false,
            issues,
        }
    }
}

/// Types of timeline issues
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineIssue {
    /// Line starts earlier than its predecessor
    OutOfOrder {
        prev_time_ms: u64,
        time_ms: u64,
    },
    /// Line's display span runs past the next line's start
    OverlapsNext {
        end_ms: u64,
        next_start_ms: u64,
    },
    /// A word fragment's timing falls outside the line span
    FragmentOutOfSpan {
        fragment_index: usize,
        fragment_time_ms: u64,
    },
    /// Concatenated fragment texts disagree with the line text
    FragmentTextMismatch {
        expected: String,
        actual: String,
    },
}

impl std::fmt::Display for TimelineIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimelineIssue::OutOfOrder { prev_time_ms, time_ms } => {
                write!(
                    f,
                    "Out of order: starts at {}ms after a line at {}ms",
                    time_ms, prev_time_ms
                )
            }
            TimelineIssue::OverlapsNext { end_ms, next_start_ms } => {
                write!(
                    f,
                    "Overlapped by previous line: it ends at {}ms, this line starts at {}ms",
                    end_ms, next_start_ms
                )
            }
            TimelineIssue::FragmentOutOfSpan { fragment_index, fragment_time_ms } => {
                write!(
                    f,
                    "Fragment {} at {}ms falls outside the line span",
                    fragment_index, fragment_time_ms
                )
            }
            TimelineIssue::FragmentTextMismatch { expected, actual } => {
                write!(
                    f,
                    "Fragment text mismatch: line says {:?}, fragments say {:?}",
                    expected, actual
                )
            }
        }
    }
}

/// Result of validating a whole timeline
#[derive(Debug, Clone)]
pub struct TimelineValidationResult {
    /// Overall pass/fail status
    pub passed: bool,
    /// Results for each line
    pub line_results: Vec<LineCheckResult>,
    /// Total number of issues
    pub total_issues: usize,
}

impl TimelineValidationResult {
    /// Get all failed lines
    pub fn failed_lines(&self) -> Vec<&LineCheckResult> {
        self.line_results.iter().filter(|r| !r.passed).collect()
    }
}

/// Configuration for timeline validation
#[derive(Debug, Clone)]
pub struct TimelineValidatorConfig {
    /// Whether to check for overlapping display spans
    pub check_overlaps: bool,
    /// Whether to check word-fragment timing and text
    pub check_fragments: bool,
}

impl Default for TimelineValidatorConfig {
    fn default() -> Self {
        Self {
            check_overlaps: true,
            check_fragments: true,
        }
    }
}

/// Validator for merged lyric timelines
pub struct TimelineValidator {
    config: TimelineValidatorConfig,
}

impl TimelineValidator {
    /// Create a new validator with default configuration
    pub fn new() -> Self {
        Self {
            config: TimelineValidatorConfig::default(),
        }
    }

    /// Create a new validator with custom configuration
    pub fn with_config(config: TimelineValidatorConfig) -> Self {
        Self { config }
    }

    /// Validate a single line's internal consistency
    pub fn validate_line(&self, index: usize, line: &LyricLine) -> LineCheckResult {
        let mut issues = Vec::new();

        if self.config.check_fragments {
            if let Some(fragments) = &line.fragments {
                let span_start = line.dynamic_time.unwrap_or(line.time);
                let span_end = span_start + line.duration;

                for (i, fragment) in fragments.iter().enumerate() {
                    if fragment.time < span_start || fragment.time > span_end {
                        issues.push(TimelineIssue::FragmentOutOfSpan {
                            fragment_index: i,
                            fragment_time_ms: fragment.time,
                        });
                    }
                }

                let joined: String = fragments.iter().map(|f| f.text.as_str()).collect();
                if joined != line.original_text {
                    issues.push(TimelineIssue::FragmentTextMismatch {
                        expected: line.original_text.clone(),
                        actual: joined,
                    });
                }
            }
        }

        if issues.is_empty() {
            LineCheckResult::passed(index)
        } else {
            LineCheckResult::failed(index, issues)
        }
    }

    /// Validate a whole timeline
    pub fn validate(&self, lines: &[LyricLine]) -> TimelineValidationResult {
        if lines.is_empty() {
            return TimelineValidationResult {
                passed: true,
                line_results: vec![],
                total_issues: 0,
            };
        }

        let mut line_results: Vec<LineCheckResult> = lines
            .iter()
            .enumerate()
            .map(|(i, line)| self.validate_line(i, line))
            .collect();

        for i in 1..lines.len() {
            let prev = &lines[i - 1];
            let line = &lines[i];

            if line.time < prev.time {
                let result = &mut line_results[i];
                result.issues.push(TimelineIssue::OutOfOrder {
                    prev_time_ms: prev.time,
                    time_ms: line.time,
                });
                result.passed = false;
            }

            if self.config.check_overlaps && prev.end_time() > line.time {
                let result = &mut line_results[i];
                result.issues.push(TimelineIssue::OverlapsNext {
                    end_ms: prev.end_time(),
                    next_start_ms: line.time,
                });
                result.passed = false;
            }
        }

        let total_issues: usize = line_results.iter().map(|r| r.issues.len()).sum();
        let passed = line_results.iter().all(|r| r.passed);

        debug!(
            "Timeline validation: {} lines, {} issues",
            lines.len(),
            total_issues
        );

        TimelineValidationResult {
            passed,
            line_results,
            total_issues,
        }
    }
}

impl Default for TimelineValidator {
    fn default() -> Self {
        Self::new()
    }
}
