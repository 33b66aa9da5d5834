//! Karaoke-script parsing.
//!
//! The notation has no formal grammar: statements look like
//! `karaoke.add(start, end, '[text]', id);` with metadata declarations
//! `karaoke.songname := '...'` and `karaoke.singer := '...'`. Parsing is
//! staged as statement extraction, quote-aware field splitting, and lyric
//! normalization; [`parse`] runs all three and assembles a
//! [`ScriptDocument`].

pub mod extract;
pub mod normalize;
pub mod params;

use crate::types::ScriptDocument;

/// Parse one decoded karaoke-script document.
///
/// Total over its input: malformed statements contribute no line and the
/// rest of the document still parses. A document with no recognizable
/// statements yields an empty [`ScriptDocument`], not an error.
#[must_use]
pub fn parse(text: &str) -> ScriptDocument {
    let found = extract::extract(text);

    let lines: Vec<String> = found
        .statements
        .iter()
        .filter_map(|raw| params::lyric_field(raw))
        .map(|lyric| normalize::normalize(&lyric))
        .filter(|line| !line.is_empty())
        .collect();

    if !found.statements.is_empty() && lines.len() < found.statements.len() {
        tracing::debug!(
            dropped = found.statements.len() - lines.len(),
            total = found.statements.len(),
            "some statements yielded no lyric text"
        );
    }

    ScriptDocument {
        songname: found.songname.map(str::to_string),
        singer: found.singer.map(str::to_string),
        lines,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn parses_full_document() {
        let text = "karaoke.songname := 'Title';\n\
                    karaoke.singer := 'Artist';\n\
                    karaoke.add('00:00.000', '00:02.000', '[Hello] world', '1');\n\
                    karaoke.add('00:02.000', '00:04.000', 'it''s fine', '2');\n";
        let doc = parse(text);
        assert_eq!(doc.songname.as_deref(), Some("Title"));
        assert_eq!(doc.singer.as_deref(), Some("Artist"));
        assert_eq!(doc.lines, vec!["Hello world", "it's fine"]);
    }

    #[test]
    fn preserves_statement_order() {
        let text = "karaoke.add('0', '1', 'first', '1');\n\
                    karaoke.add('1', '2', 'second', '2');\n\
                    karaoke.add('2', '3', 'third', '3');\n";
        assert_eq!(parse(text).lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_document_parses_to_empty_result() {
        let doc = parse("");
        assert!(doc.is_empty());
        assert_eq!(doc.lines, Vec::<String>::new());
    }

    #[test]
    fn unrelated_text_yields_nothing() {
        let doc = parse("just some prose with no statements at all");
        assert!(doc.is_empty());
    }

    #[test]
    fn statement_normalizing_to_empty_is_dropped() {
        let text = "karaoke.add('0', '1', '[]', '1');\n\
                    karaoke.add('1', '2', 'kept', '2');\n";
        assert_eq!(parse(text).lines, vec!["kept"]);
    }

    #[test]
    fn malformed_statement_does_not_stop_later_ones() {
        let text = "karaoke.add('0', '1');\n\
                    karaoke.add('1', '2', 'still here', '2');\n";
        assert_eq!(parse(text).lines, vec!["still here"]);
    }
}
