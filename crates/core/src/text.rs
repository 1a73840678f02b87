use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));
static SPACED_PIPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ?\| ?").expect("static regex"));
static SPACED_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ?: ?").expect("static regex"));

/// Canonicalizes whitespace in a free-text answer before it is matched.
///
/// - every whitespace run becomes a single space
/// - spaces around `|` are removed
/// - a colon is followed by exactly one space and preceded by none
/// - the result never starts or ends with whitespace
///
/// Answer patterns can therefore be written without caring about spacing.
/// A missing input stays missing.
#[must_use]
pub fn normalize_space(input: Option<&str>) -> Option<String> {
    let input = input?;
    let collapsed = WHITESPACE_RUN.replace_all(input.trim(), " ");
    let piped = SPACED_PIPE.replace_all(&collapsed, "|");
    let coloned = SPACED_COLON.replace_all(&piped, ": ");
    Some(coloned.trim().to_string())
}
