//! Statement extraction from raw karaoke-script text.
//!
//! Scans the decoded document for `karaoke.songname` / `karaoke.singer`
//! declarations and every `karaoke.add(...)` statement body. This stage
//! only finds statement boundaries; field splitting happens in
//! [`super::params`].

// Allow unwrap for compile-time constant regex patterns in LazyLock blocks
#![allow(clippy::unwrap_used)]

use std::sync::LazyLock;

use regex::Regex;

/// `karaoke.songname := '...'` / `karaoke.songname := "..."`, non-greedy.
static RE_SONGNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"karaoke\.songname\s*:=\s*['"](.*?)['"]"#).unwrap());

/// Same shape keyed on `karaoke.singer`.
static RE_SINGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"karaoke\.singer\s*:=\s*['"](.*?)['"]"#).unwrap());

/// `karaoke.add( ... );` — the shortest run up to the next `);`, spanning
/// newlines. A lyric payload containing a literal `);` truncates its
/// statement here; the notation has no escape for it.
static RE_ADD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)karaoke\.add\s*\((.*?)\);").unwrap());

/// Everything the extractor finds in one document, borrowed from the input.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Extracted<'a> {
    /// Content of the first songname declaration, quotes stripped.
    pub songname: Option<&'a str>,
    /// Content of the first singer declaration, quotes stripped.
    pub singer: Option<&'a str>,
    /// Raw parameter text of every `karaoke.add` call, in source order.
    pub statements: Vec<&'a str>,
}

/// Scan `text` for metadata declarations and `karaoke.add` statement
/// bodies.
///
/// Pure function of the input; absence of matches yields empty results,
/// never an error. Only the first songname/singer declaration counts;
/// later redeclarations are ignored.
#[must_use]
pub fn extract(text: &str) -> Extracted<'_> {
    let songname = RE_SONGNAME
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str());
    let singer = RE_SINGER
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str());

    let statements: Vec<&str> = RE_ADD
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect();

    Extracted { songname, singer, statements }
}
