//! `karatext` - command-line front end for karaoke-script conversion.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use karatext::batch::{collect_inputs, run_batch, ConvertOptions, Progress};
use karatext::io::resolve_encoding;
use karatext::types::FormatOptions;

#[derive(Parser)]
#[command(name = "karatext")]
#[command(about = "Convert karaoke-script files to plain lyric text")]
#[command(version)]
struct Args {
    /// Input script file, or a directory walked recursively
    input: PathBuf,

    /// Output directory for the converted .txt files
    output: PathBuf,

    /// Omit the "# songname - singer" header line
    #[arg(long)]
    no_header: bool,

    /// Join all lyric lines into a single space-separated line
    #[arg(long)]
    single_line: bool,

    /// Input encoding label tried before the fallback cascade
    #[arg(long)]
    encoding: Option<String>,

    /// Encoding label for written output
    #[arg(long, default_value = "utf-8")]
    output_encoding: String,

    /// Accepted source extensions for directory walks (comma-separated)
    #[arg(long, value_delimiter = ',', default_values_t = ["txt".to_string(), "karaoke".to_string()])]
    ext: Vec<String>,

    /// Hide the progress bar
    #[arg(long)]
    quiet: bool,
}

/// Progress bar styled for per-file batch output.
fn create_progress_bar(len: u64, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}, ETA: {eta})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> "),
    );
    pb
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if !args.input.exists() {
        return Err(karatext::Error::input(
            format!("input path {} does not exist", args.input.display()),
            "pass a script file or a directory of scripts",
        )
        .into());
    }

    let options = ConvertOptions {
        format: FormatOptions {
            include_header: !args.no_header,
            single_line: args.single_line,
        },
        input_encoding: args
            .encoding
            .as_deref()
            .map(resolve_encoding)
            .transpose()
            .context("unsupported --encoding")?,
        output_encoding: resolve_encoding(&args.output_encoding)
            .context("unsupported --output-encoding")?,
        extensions: args.ext,
    };

    let files = collect_inputs(&args.input, &options.extensions);
    if files.is_empty() {
        eprintln!("No eligible files found under {}", args.input.display());
        return Ok(ExitCode::FAILURE);
    }

    let pb = create_progress_bar(files.len() as u64, args.quiet);
    let (tx, rx) = crossbeam_channel::unbounded::<Progress>();

    let report = std::thread::scope(|scope| {
        let bar = &pb;
        scope.spawn(move || {
            for event in rx {
                bar.set_position(event.completed as u64);
            }
        });
        let report = run_batch(&args.input, &args.output, &options, Some(&tx));
        drop(tx);
        report
    });
    pb.finish_and_clear();

    println!(
        "Converted {}/{} files into {}",
        report.succeeded,
        report.total,
        args.output.display()
    );
    for failure in &report.failures {
        eprintln!("  failed: {}: {}", failure.path.display(), failure.error);
    }

    if report.succeeded == report.total {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
