//! Lyric text cleanup.
//!
//! Strips the notation's `[...]` timing-group brackets (keeping their
//! content) and collapses whitespace runs, producing display text.

// Allow unwrap for compile-time constant regex patterns in LazyLock blocks
#![allow(clippy::unwrap_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Bracketed span, non-greedy and non-nested (pairs do not nest in this
/// format); the capture is the inner content.
static RE_BRACKETS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]").unwrap());

/// Any run of whitespace, including tabs and newlines.
static RE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Clean raw lyric text (already unquoted and unescaped) into display
/// text.
///
/// Bracket wrappers are removed with their inner content kept verbatim,
/// whitespace runs collapse to single spaces, and the ends are trimmed.
/// Empty input yields empty output; callers drop empty lines.
#[must_use]
pub fn normalize(text: &str) -> String {
    let text = RE_BRACKETS.replace_all(text, "$1");
    let text = RE_SPACES.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn brackets_are_stripped_keeping_content() {
        assert_eq!(normalize("[hello] world"), "hello world");
        assert_eq!(normalize("[I'll ]be there"), "I'll be there");
    }

    #[test]
    fn empty_brackets_vanish() {
        assert_eq!(normalize("[]"), "");
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(normalize("a   b\n\tc"), "a b c");
    }

    #[test]
    fn ends_are_trimmed() {
        assert_eq!(normalize("  spaced out  "), "spaced out");
    }

    #[test]
    fn multiple_bracket_groups_in_one_line() {
        assert_eq!(normalize("[one ][two ][three]"), "one two three");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
    }
}
