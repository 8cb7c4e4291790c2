// src/extract/url_date.rs
// =============================================================================
// Finds a publication date embedded in an article URL.
//
// Patterns, tried in this order:
//   1. /2023/05/15/     path segments (slash required after the day)
//   2. /2023-05-15      hyphenated, year first
//   3. /15-05-2023      hyphenated, day first
//   4. /20230515        compact 8 digits
//
// Each pattern is matched independently against the whole URL. Only its
// first match is considered, and it must be a real calendar date
// (no month 13, no Feb 30). The first pattern that yields a valid date wins.
// =============================================================================

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

// How a pattern's three capture groups map onto a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// Groups are (year, month, day)
    YearMonthDay,
    /// Groups are (day, month, year)
    DayMonthYear,
}

// Which URL shape a pattern recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    SlashSegments,
    HyphenatedIso,
    HyphenatedReverse,
    Compact,
}

// One rule of the date-from-URL policy.
#[derive(Debug, Clone, Copy)]
pub struct DatePattern {
    pub layout: DateLayout,
    pub regex: &'static str,
    pub order: DateOrder,
}

// The date-from-URL policy, highest priority first.
//
// Digit classes are spelled `[0-9]` because `\d` in the regex crate also
// matches non-ASCII digits.
pub const DATE_PATTERNS: &[DatePattern] = &[
    DatePattern {
        layout: DateLayout::SlashSegments,
        regex: r"/([0-9]{4})/([0-9]{2})/([0-9]{2})/",
        order: DateOrder::YearMonthDay,
    },
    DatePattern {
        layout: DateLayout::HyphenatedIso,
        regex: r"/([0-9]{4})-([0-9]{2})-([0-9]{2})",
        order: DateOrder::YearMonthDay,
    },
    DatePattern {
        layout: DateLayout::HyphenatedReverse,
        regex: r"/([0-9]{2})-([0-9]{2})-([0-9]{4})",
        order: DateOrder::DayMonthYear,
    },
    // No trailing delimiter: any 8+ digit run after a slash is a candidate
    DatePattern {
        layout: DateLayout::Compact,
        regex: r"/([0-9]{4})([0-9]{2})([0-9]{2})",
        order: DateOrder::YearMonthDay,
    },
];

// Compiled once, in DATE_PATTERNS order
static COMPILED: LazyLock<Vec<(DatePattern, Regex)>> = LazyLock::new(|| {
    DATE_PATTERNS
        .iter()
        .filter_map(|pattern| Regex::new(pattern.regex).ok().map(|re| (*pattern, re)))
        .collect()
});

// Finds a publication date in a URL
//
// Parameters:
//   url: the article URL, exactly as requested
//
// Returns: the first valid date as "YYYY-MM-DD", or "" when there is none
//
// Example:
//   "https://x.com/article/15-05-2023" -> "2023-05-15"
pub fn extract_date_from_url(url: &str) -> String {
    COMPILED
        .iter()
        .find_map(|(pattern, regex)| match_pattern(pattern, regex, url))
        .unwrap_or_default()
}

// Applies a single pattern: first match only, then calendar validation
fn match_pattern(pattern: &DatePattern, regex: &Regex, url: &str) -> Option<String> {
    let caps = regex.captures(url)?;
    let (a, b, c) = (caps.get(1)?.as_str(), caps.get(2)?.as_str(), caps.get(3)?.as_str());

    let (year, month, day) = match pattern.order {
        DateOrder::YearMonthDay => (a, b, c),
        DateOrder::DayMonthYear => (c, b, a),
    };

    let candidate = format!("{}-{}-{}", year, month, day);
    if is_calendar_date(&candidate) {
        tracing::debug!(layout = ?pattern.layout, date = %candidate, "date found in URL");
        Some(candidate)
    } else {
        None
    }
}

// True if the string is a real YYYY-MM-DD date
fn is_calendar_date(candidate: &str) -> bool {
    NaiveDate::parse_from_str(candidate, "%Y-%m-%d").is_ok()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is LazyLock?
//    - A static that is built the first time it is used, then reused
//    - Compiling a regex is expensive; matching with a compiled one is cheap
//
// 2. Why does match_pattern return Option?
//    - None means "this pattern gave us nothing usable"
//    - find_map() stops at the first Some, which gives us priority order
// -----------------------------------------------------------------------------
