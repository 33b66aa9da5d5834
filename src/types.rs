//! Core type definitions for karaoke-script conversion.
//!
//! A [`ScriptDocument`] is the immutable result of one parse; it is built
//! fresh per call and never mutated afterwards. [`FormatOptions`] carries
//! the two output toggles the formatter understands.

/// The parsed result of one karaoke-script document.
///
/// `lines` preserves the source order of `karaoke.add` statements.
/// Statements whose lyric text could not be extracted, or normalized to
/// an empty string, contribute no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptDocument {
    /// Song title from the first `karaoke.songname := '...'` declaration.
    pub songname: Option<String>,
    /// Artist from the first `karaoke.singer := '...'` declaration.
    pub singer: Option<String>,
    /// Cleaned lyric lines in source order.
    pub lines: Vec<String>,
}

impl ScriptDocument {
    /// Whether the parse produced neither metadata nor lyric lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.songname.is_none() && self.singer.is_none() && self.lines.is_empty()
    }

    /// The header line (`# <songname> - <singer>`) if any metadata is
    /// present, using only the present fields.
    #[must_use]
    pub fn header(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .songname
            .as_deref()
            .into_iter()
            .chain(self.singer.as_deref())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(format!("# {}", parts.join(" - ")))
        }
    }
}

/// Output formatting toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Emit the `# <songname> - <singer>` header when metadata is present.
    pub include_header: bool,
    /// Join all lyric lines with spaces into one line.
    pub single_line: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { include_header: true, single_line: false }
    }
}
