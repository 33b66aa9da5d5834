//! `karatext` - karaoke-script to plain lyric text converter.
//!
//! Parses the line-based `karaoke.add(start, end, '[text]', id);`
//! notation (plus `karaoke.songname` / `karaoke.singer` declarations)
//! into clean lyric text, with multi-encoding file reads and a parallel
//! batch driver.

// Re-export public modules for use in integration tests and as a library
pub mod batch;
pub mod error;
pub mod format;
pub mod io;
pub mod script;
pub mod types;

pub use batch::{run_batch, BatchReport, ConvertOptions, Progress};
pub use error::{Error, Result};
pub use format::to_text;
pub use script::parse;
pub use types::{FormatOptions, ScriptDocument};
