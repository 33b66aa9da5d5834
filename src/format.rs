//! Plain-text output formatting for parsed documents.

use crate::types::{FormatOptions, ScriptDocument};

/// Render a parsed document as plain text.
///
/// Emits the `# <songname> - <singer>` header when requested and any
/// metadata is present, then the lyric lines either one per line or
/// joined into a single space-separated line. Lines are joined with `\n`
/// and no trailing newline is appended.
#[must_use]
pub fn to_text(doc: &ScriptDocument, options: FormatOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    if options.include_header {
        if let Some(header) = doc.header() {
            lines.push(header);
        }
    }

    if options.single_line {
        lines.push(doc.lines.join(" "));
    } else {
        lines.extend(doc.lines.iter().cloned());
    }

    lines.join("\n")
}
