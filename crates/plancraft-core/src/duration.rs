//! Free-text duration estimates.
//!
//! Task durations are written by people, not machines: "2-4 days", "1 week",
//! "about 3 weeks". This module turns them into a whole number of days using
//! the midpoint of the range, rounding up so that a partial day still takes a
//! full slot in the schedule.
//!
//! Text that does not look like `<N>[-<M>] day(s)|week(s)` falls back to
//! [`DEFAULT_DURATION_DAYS`] instead of failing, so a sloppy estimate never
//! blocks plan generation. Only whole, non-negative numbers count: "1.5
//! weeks", "-3 days" and "2 to 4 days" all fall back.
//!
//! ```rust
//! use plancraft_core::duration::parse_duration;
//!
//! assert_eq!(parse_duration("2-4 days"), 3);
//! assert_eq!(parse_duration("1 week"), 7);
//! assert_eq!(parse_duration("3-5 weeks"), 28);
//! assert_eq!(parse_duration("whenever"), 2);
//! ```

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

/// Days assumed for an estimate that cannot be parsed.
pub const DEFAULT_DURATION_DAYS: u32 = 2;

const DAYS_PER_WEEK: u64 = 7;

// A number must not continue a word, a decimal or a sign.
static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^\w.\-–])([0-9]+)\s*(?:[-–]\s*([0-9]+))?\s*(day|week)s?\b")
        .expect("duration pattern is a valid regex")
});

/// Outcome of reading a duration estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationEstimate {
    /// The text matched and produced this many days (always at least 1)
    Parsed(u32),
    /// The text did not match; [`DEFAULT_DURATION_DAYS`] applies
    Fallback,
}

impl DurationEstimate {
    /// Number of schedule days this estimate occupies.
    pub fn days(self) -> u32 {
        match self {
            DurationEstimate::Parsed(days) => days,
            DurationEstimate::Fallback => DEFAULT_DURATION_DAYS,
        }
    }

    /// Whether the default was used.
    pub fn is_fallback(self) -> bool {
        self == DurationEstimate::Fallback
    }
}

/// Reads a duration estimate, reporting whether the fallback was used.
pub fn estimate_duration(text: &str) -> DurationEstimate {
    match read_days(text) {
        Some(days) => DurationEstimate::Parsed(days),
        None => {
            debug!("Unrecognized duration '{text}', using {DEFAULT_DURATION_DAYS} days");
            DurationEstimate::Fallback
        }
    }
}

/// Converts a duration estimate into whole days (at least 1).
pub fn parse_duration(text: &str) -> u32 {
    estimate_duration(text).days()
}

fn read_days(text: &str) -> Option<u32> {
    let caps = DURATION_PATTERN.captures(text)?;
    let first = caps.get(1)?;

    // "2 to 4 days" names two numbers but is not a range
    if text[..first.start()].contains(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let min: u64 = first.as_str().parse().ok()?;
    let max: u64 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => min,
    };
    let (min, max) = if max < min { (max, min) } else { (min, max) };

    let factor = if caps.get(3)?.as_str().eq_ignore_ascii_case("week") {
        DAYS_PER_WEEK
    } else {
        1
    };

    // ceil((min + max) * factor / 2) without leaving integer arithmetic
    let doubled = min.checked_add(max)?.checked_mul(factor)?;
    let days = doubled.div_ceil(2).max(1);

    u32::try_from(days).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_ranges_use_rounded_up_midpoint() {
        assert_eq!(parse_duration("2-4 days"), 3);
        assert_eq!(parse_duration("1-2 days"), 2);
        assert_eq!(parse_duration("3-4 days"), 4);
    }

    #[test]
    fn test_single_values() {
        assert_eq!(parse_duration("1 day"), 1);
        assert_eq!(parse_duration("5 days"), 5);
        assert_eq!(parse_duration("1 week"), 7);
        assert_eq!(parse_duration("2 weeks"), 14);
    }

    #[test]
    fn test_week_ranges() {
        assert_eq!(parse_duration("3-5 weeks"), 28);
        assert_eq!(parse_duration("1-2 weeks"), 11);
    }

    #[test]
    fn test_case_and_spacing_are_tolerated() {
        assert_eq!(parse_duration("2-4 DAYS"), 3);
        assert_eq!(parse_duration("  1 Week "), 7);
        assert_eq!(parse_duration("2 - 4 days"), 3);
        assert_eq!(parse_duration("2–4 days"), 3);
        assert_eq!(parse_duration("about 2-3 days"), 3);
    }

    #[test]
    fn test_reversed_range_is_normalized() {
        assert_eq!(parse_duration("4-2 days"), 3);
    }

    #[test]
    fn test_unrecognized_text_falls_back() {
        assert_eq!(parse_duration("garbage"), DEFAULT_DURATION_DAYS);
        assert_eq!(parse_duration(""), DEFAULT_DURATION_DAYS);
        assert_eq!(parse_duration("3 months"), DEFAULT_DURATION_DAYS);
        assert_eq!(parse_duration("days"), DEFAULT_DURATION_DAYS);
        assert!(estimate_duration("garbage").is_fallback());
        assert!(!estimate_duration("1 day").is_fallback());
    }

    #[test]
    fn test_partial_numbers_fall_back() {
        let inputs = [
            "1.5 weeks",
            "2.5-3 days",
            "2-3.5 days",
            "-3 days",
            "2 to 4 days",
            "v2 days",
        ];
        for text in inputs {
            assert_eq!(estimate_duration(text), DurationEstimate::Fallback, "{text}");
        }
    }

    #[test]
    fn test_leading_punctuation_is_allowed() {
        assert_eq!(parse_duration("(2-4 days)"), 3);
        assert_eq!(parse_duration("est: 1 week"), 7);
        assert_eq!(parse_duration("~3 days"), 3);
    }

    #[test]
    fn test_zero_is_clamped_to_one_day() {
        assert_eq!(parse_duration("0 days"), 1);
        assert_eq!(parse_duration("0 weeks"), 1);
        assert_eq!(estimate_duration("0-0 days"), DurationEstimate::Parsed(1));
    }

    #[test]
    fn test_oversized_numbers_fall_back() {
        assert!(estimate_duration("99999999999999999999999 days").is_fallback());
        assert!(estimate_duration("4294967295 weeks").is_fallback());
    }
}
