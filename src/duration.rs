//! Legacy duration parsing.
//!
//! Earlier deployments stored exam durations as free text ("2 hours",
//! "1.5 hours"). Durations now live as minutes at the data boundary
//! ([`Exam::duration_minutes`](crate::models::Exam)); this parser survives
//! only as the migration shim for ingesting legacy values.
//!
//! # Policy
//!
//! Canonical substrings are matched in a fixed order (1.5 → 90, 2.5 → 150,
//! 3 → 180, 2 → 120, 1 → 60). Unmatched text falls back to whatever digits
//! it contains, then to the 120-minute default. The match order makes
//! "3.5 hours" parse as 180, not 210; a test below pins this until the
//! legacy column is gone.

/// Fallback duration when no value can be extracted (minutes).
pub const DEFAULT_DURATION_MINUTES: i64 = 120;

/// Parses a legacy free-text duration into minutes.
///
/// # Example
///
/// ```
/// use examsched::duration::parse_minutes;
///
/// assert_eq!(parse_minutes("2 hours"), 120);
/// assert_eq!(parse_minutes("1.5 hours"), 90);
/// assert_eq!(parse_minutes("45 minutes"), 45);
/// assert_eq!(parse_minutes("soon"), 120);
/// ```
pub fn parse_minutes(text: &str) -> i64 {
    let d = text.to_lowercase();
    if d.contains("1.5") {
        return 90;
    }
    if d.contains("2.5") {
        return 150;
    }
    if d.contains('3') {
        return 180;
    }
    if d.contains('2') {
        return 120;
    }
    if d.contains('1') {
        return 60;
    }

    // No canonical form matched; keep whatever digits remain.
    let digits: String = d.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(DEFAULT_DURATION_MINUTES)
}
