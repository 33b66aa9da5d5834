//! Quote-aware parameter splitting for `karaoke.add` statement bodies.
//!
//! A statement body is conceptually `<time1>, <time2>, <quoted lyric>,
//! <id>`, but the lyric payload may contain commas, the other quote
//! character unescaped, or its own quote character doubled as an escape.
//! Naive comma splitting is therefore wrong; two independent strategies
//! are used instead:
//!
//! - a quoted-literal scan (primary) that collects every complete quoted
//!   literal in the body and takes the third;
//! - a character state machine (fallback) that splits on commas outside
//!   quoted regions when the quote structure is too irregular for the
//!   primary scan to find three literals.
//!
//! Both agree on well-formed input. Neither can fail: an unresolvable
//! body yields `None`, which callers treat as "no lyric for this
//! statement".

/// Extract the lyric (third) field from one raw statement body, with its
/// enclosing quotes removed and doubled-quote escapes resolved.
///
/// Returns `None` when no third field can be isolated by either strategy.
#[must_use]
pub fn lyric_field(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    quoted_literal_scan(raw).or_else(|| state_machine_scan(raw))
}

/// Primary strategy: collect complete quoted literals left to right.
///
/// A literal starts at `'` or `"` and ends at the next occurrence of the
/// same character that is not doubled; a doubled quote inside is consumed
/// as escaped content, and the other quote character is plain content.
/// With at least three literals, the third is the lyric field.
fn quoted_literal_scan(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut literals: Vec<(u8, &str)> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let quote = bytes[i];
        if quote != b'\'' && quote != b'"' {
            i += 1;
            continue;
        }
        // Find the non-doubled closing quote.
        let start = i + 1;
        let mut j = start;
        let mut end = None;
        while j < bytes.len() {
            if bytes[j] == quote {
                if bytes.get(j + 1) == Some(&quote) {
                    j += 2;
                    continue;
                }
                end = Some(j);
                break;
            }
            j += 1;
        }
        match end {
            Some(close) => {
                // Quote bytes are ASCII, so these offsets sit on char
                // boundaries.
                literals.push((quote, &raw[start..close]));
                i = close + 1;
            }
            // Unterminated literal: the rest of the body has no usable
            // structure for this strategy.
            None => break,
        }
    }

    let (quote, third) = *literals.get(2)?;
    Some(undouble(third, quote))
}

/// Fallback strategy: a single left-to-right scan with an in-quotes flag.
///
/// Commas are field separators only outside quoted regions. Doubled
/// identical quote characters inside a quoted region are escaped literals
/// and are appended verbatim; the selected field is stripped and
/// un-escaped at the end, the same as the primary strategy.
fn state_machine_scan(raw: &str) -> Option<String> {
    let mut fields: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match quote {
            None => match c {
                '\'' | '"' => {
                    quote = Some(c);
                    current.push(c);
                }
                ',' => {
                    fields.push(std::mem::take(&mut current));
                    // trim happens on selection
                }
                _ => current.push(c),
            },
            Some(q) if c == q => {
                if chars.peek() == Some(&q) {
                    // Escaped quote: keep both characters, stay in quotes.
                    current.push(c);
                    current.push(c);
                    chars.next();
                } else {
                    current.push(c);
                    quote = None;
                }
            }
            Some(_) => current.push(c),
        }
    }
    if !current.trim().is_empty() {
        fields.push(current);
    }

    let third = fields.get(2)?.trim();
    if third.is_empty() {
        return None;
    }
    let bytes = third.as_bytes();
    let first = bytes[0];
    if (first == b'\'' || first == b'"') && third.len() >= 2 && bytes[third.len() - 1] == first {
        Some(undouble(&third[1..third.len() - 1], first))
    } else {
        // Best effort: an unquoted or asymmetric field is returned as-is.
        Some(third.to_string())
    }
}

/// Resolve doubled occurrences of `quote` to single characters.
fn undouble(text: &str, quote: u8) -> String {
    let q = char::from(quote);
    text.replace(&format!("{q}{q}"), &q.to_string())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    const WELL_FORMED: &[(&str, &str)] = &[
        ("'00:00.000', '00:01.000', 'text, with comma', '1'", "text, with comma"),
        ("'03:35.708', '03:37.420', '[I''ll ]', '616'", "[I'll ]"),
        ("\"0\", \"1\", \"say \"\"hi\"\"\", \"2\"", "say \"hi\""),
        ("'0', '1', 'plain', '9'", "plain"),
    ];

    #[test]
    fn strategies_agree_on_well_formed_input() {
        for (raw, expected) in WELL_FORMED {
            let a = quoted_literal_scan(raw);
            let c = state_machine_scan(raw);
            assert_eq!(a.as_deref(), Some(*expected), "primary strategy on {raw:?}");
            assert_eq!(a, c, "strategy disagreement on {raw:?}");
        }
    }

    #[test]
    fn doubled_quotes_unescape_to_single() {
        let raw = "'00:00.000', '00:01.000', 'it''s here', '1'";
        assert_eq!(lyric_field(raw).unwrap(), "it's here");
    }

    #[test]
    fn doubled_double_quotes_unescape_too() {
        let raw = r#""0", "1", "say ""hi"" now", "2""#;
        assert_eq!(lyric_field(raw).unwrap(), r#"say "hi" now"#);
    }

    #[test]
    fn comma_inside_lyric_is_preserved() {
        let raw = "'00:00.000', '00:01.000', 'text, with comma', '1'";
        assert_eq!(lyric_field(raw).unwrap(), "text, with comma");
    }

    #[test]
    fn other_quote_kind_is_plain_content() {
        let raw = r#"'0', '1', "it's fine", '2'"#;
        assert_eq!(lyric_field(raw).unwrap(), "it's fine");
    }

    #[test]
    fn truncated_quote_yields_best_effort_text() {
        // The stray quote before the id re-pairs with the lyric's opener;
        // extraction degrades to whatever the shifted pairing delimits.
        let raw = "'0', '1', 'broken, '2'";
        assert_eq!(lyric_field(raw).unwrap(), "broken, ");
    }

    #[test]
    fn unterminated_third_literal_falls_back() {
        // Only two complete literals exist, so the primary scan gives up
        // and the state machine isolates a best-effort field.
        let raw = "'0', '1', 'never closes";
        assert_eq!(lyric_field(raw).unwrap(), "'never closes");
    }

    #[test]
    fn fewer_than_three_fields_yields_none() {
        assert_eq!(lyric_field("'0', '1'"), None);
        assert_eq!(lyric_field(""), None);
        assert_eq!(lyric_field("   "), None);
    }

    #[test]
    fn unquoted_third_field_is_best_effort() {
        assert_eq!(state_machine_scan("0, 1, bare text, 2").unwrap(), "bare text");
    }

    #[test]
    fn empty_lyric_literal_is_found_empty() {
        assert_eq!(lyric_field("'0', '1', '', '2'").unwrap(), "");
    }
}
