//! Commercial-affiliation heuristic.
//!
//! The detail body is scanned line by line. A line qualifies when it contains
//! one of [`keywords::COMMERCIAL`] (case-insensitive substring), and the first
//! `<Author>...</Author>` on that line supplies the name.
//!
//! This is not an XML parser. The tag and its content must sit on a single
//! line, and the keyword must share that line. Tags spanning lines never match.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::keywords;

/// Single-line author tag. `.` does not match `\n`, so captures never cross lines.
static AUTHOR_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<Author>(.*?)</Author>").expect("valid author tag regex"));

/// Returns true if `line` contains a commercial keyword, ignoring case.
#[must_use]
pub fn contains_commercial_keyword(line: &str) -> bool {
    let lower = line.to_lowercase();
    keywords::COMMERCIAL.iter().any(|kw| lower.contains(kw))
}

/// Extract candidate non-academic author names from raw detail text.
///
/// Names come back in line order, unvalidated; empty or duplicate names are kept.
#[must_use]
pub fn extract_non_academic_authors(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| contains_commercial_keyword(line))
        .filter_map(|line| AUTHOR_TAG_RE.captures(line))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
