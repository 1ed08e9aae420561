//! String coercions used by the admin forms.
//!
//! Form inputs arrive as free text; these helpers turn them into the
//! typed shapes the drafts carry.

/// Splits a comma-separated list into trimmed, non-empty items.
///
/// `"React, Node.js"` becomes `["React", "Node.js"]`; stray commas and
/// surrounding whitespace are dropped.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Parses a display-order field; unparseable input falls back to 0.
pub fn parse_order(input: &str) -> i32 {
    input.trim().parse().unwrap_or(0)
}

/// Default proficiency when a skill doesn't specify one.
pub const DEFAULT_PROFICIENCY: i32 = 3;

/// Parses a proficiency level, clamping into the 1–5 scale.
/// Unparseable input falls back to the default of 3.
pub fn parse_proficiency(input: &str) -> i32 {
    input
        .trim()
        .parse::<i32>()
        .map(|level| level.clamp(1, 5))
        .unwrap_or(DEFAULT_PROFICIENCY)
}
