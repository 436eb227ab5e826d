// SPDX-FileCopyrightText: 2026 Blufio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Date extraction from free-form email text.
//!
//! Scans for date-like substrings using an ordered list of pattern/format
//! pairs and returns the first calendar date that both matches a pattern
//! and parses under that pattern's format. "No date" is a normal outcome,
//! not an error.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Ordered recognition patterns paired with their chrono parse format.
///
/// Order matters: "15 Mar 2025" style first, then day-first "31/12/2024",
/// then "December 25, 2025". A match that fails to parse falls through to
/// the next pattern, not to the next match of the same pattern.
static DATE_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(
                r"(?i)\b\d{1,2}\s(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s\d{4}",
            )
            .unwrap(),
            "%d %b %Y",
        ),
        (Regex::new(r"\b\d{1,2}/\d{1,2}/\d{4}").unwrap(), "%d/%m/%Y"),
        (
            Regex::new(
                r"(?i)(January|February|March|April|May|June|July|August|September|October|November|December)\s\d{1,2},\s\d{4}",
            )
            .unwrap(),
            "%B %d, %Y",
        ),
    ]
});

/// Returns the first calendar date found in `text`, or `None`.
///
/// Only the first match per pattern is considered; no attempt is made to
/// collect or reconcile multiple candidate dates. Matching is
/// case-insensitive, and chrono accepts full month names for `%b`, so
/// "15 March 2025" parses through the first pattern.
pub fn extract_date(text: &str) -> Option<NaiveDate> {
    for (pattern, format) in DATE_PATTERNS.iter() {
        if let Some(m) = pattern.find(text)
            && let Ok(date) = NaiveDate::parse_from_str(m.as_str(), format)
        {
            return Some(date);
        }
    }
    None
}
