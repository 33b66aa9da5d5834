//! Batch conversion driver.
//!
//! Collects eligible script files under an input path (a single file or a
//! directory walked recursively), converts each one independently, and
//! writes the results under an output directory with a normalized `.txt`
//! extension. Files are processed in parallel; no per-file failure aborts
//! the batch. Completion is reported as `(completed, total)` events over
//! an optional channel, and the driver never blocks on the receiver.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crossbeam_channel::Sender;
use encoding_rs::{Encoding, UTF_8};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::types::FormatOptions;
use crate::{format, io, script};

/// Extension given to every converted file.
const OUTPUT_EXTENSION: &str = "txt";

/// Source extensions accepted when walking a directory.
const DEFAULT_EXTENSIONS: &[&str] = &["txt", "karaoke"];

/// Settings for a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Output formatting toggles.
    pub format: FormatOptions,
    /// Encoding tried first when reading, before the fallback cascade.
    pub input_encoding: Option<&'static Encoding>,
    /// Encoding used for written output.
    pub output_encoding: &'static Encoding,
    /// Accepted source extensions (lowercase, no dot) for directory walks.
    pub extensions: Vec<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            format: FormatOptions::default(),
            input_encoding: None,
            output_encoding: UTF_8,
            extensions: DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// One `(completed, total)` progress event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Files finished so far, successful or not.
    pub completed: usize,
    /// Total files in this batch.
    pub total: usize,
}

/// A file that could not be converted, with the reason.
#[derive(Debug)]
pub struct FailedFile {
    /// Source path of the failed file.
    pub path: PathBuf,
    /// What went wrong.
    pub error: Error,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files converted and written successfully.
    pub succeeded: usize,
    /// Files attempted.
    pub total: usize,
    /// Per-file failures, in no particular order.
    pub failures: Vec<FailedFile>,
}

/// Convert a single script file and write the result.
pub fn convert_file(input: &Path, output: &Path, options: &ConvertOptions) -> Result<()> {
    let text = io::read_script(input, options.input_encoding)?;
    let doc = script::parse(&text);
    if doc.is_empty() {
        tracing::debug!(path = %input.display(), "no extractable content");
    }
    let rendered = format::to_text(&doc, options.format);
    io::write_output(output, &rendered, options.output_encoding)
}

/// Collect the files a batch over `input` would process.
///
/// A file input is taken as-is; a directory is walked recursively and
/// filtered by the accepted extensions (compared case-insensitively).
#[must_use]
pub fn collect_inputs(input: &Path, extensions: &[String]) -> Vec<PathBuf> {
    if input.is_file() {
        return vec![input.to_path_buf()];
    }
    if !input.is_dir() {
        return Vec::new();
    }

    WalkDir::new(input)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    extensions.iter().any(|accepted| accepted.eq_ignore_ascii_case(ext))
                })
        })
        .map(|e| e.into_path())
        .collect()
}

/// The destination path for one source file.
fn output_path(input_file: &Path, output_dir: &Path) -> PathBuf {
    let stem = input_file
        .file_stem()
        .map_or_else(|| input_file.as_os_str().to_os_string(), std::ffi::OsStr::to_os_string);
    output_dir.join(stem).with_extension(OUTPUT_EXTENSION)
}

/// Run a batch conversion of `input` into `output_dir`.
///
/// Returns a zeroed report when no eligible files are found. Per-file
/// errors are collected in the report and never abort the run. Progress
/// events are sent after each file completes; a dropped receiver is
/// ignored.
pub fn run_batch(
    input: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
    progress: Option<&Sender<Progress>>,
) -> BatchReport {
    let files = collect_inputs(input, &options.extensions);
    if files.is_empty() {
        return BatchReport::default();
    }

    let total = files.len();
    let completed = AtomicUsize::new(0);
    let failures: Mutex<Vec<FailedFile>> = Mutex::new(Vec::new());

    let succeeded = files
        .par_iter()
        .map(|file| {
            let destination = output_path(file, output_dir);
            let result = convert_file(file, &destination, options);

            let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some(sender) = progress {
                let _ = sender.try_send(Progress { completed: done, total });
            }

            match result {
                Ok(()) => 1,
                Err(error) => {
                    tracing::warn!(path = %file.display(), %error, "conversion failed");
                    if let Ok(mut list) = failures.lock() {
                        list.push(FailedFile { path: file.clone(), error });
                    }
                    0
                }
            }
        })
        .sum();

    BatchReport {
        succeeded,
        total,
        failures: failures.into_inner().unwrap_or_default(),
    }
}
