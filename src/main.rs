//! pdftk-merge - Merge PDF files into a single document using pdftk.

mod cli;

use anyhow::Context;
use clap::Parser;
use std::io::IsTerminal;
use std::process;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::cli::Cli;
use pdftk_merge::error::PdfMergeError;
use pdftk_merge::io::format_file_size;
use pdftk_merge::merge::Merger;
use pdftk_merge::output::{MergeOutput, OutputFormatter, Verbosity};
use pdftk_merge::validation::InputFiles;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let verbose = cli.verbose;
    let formatter = OutputFormatter::new(Verbosity::from_flags(cli.quiet, cli.verbose));

    if let Err(err) = run(cli, &formatter).await {
        formatter.error(&format!("Error: {err:#}"));

        let merge_err = err.downcast_ref::<PdfMergeError>();
        if !verbose && merge_err.is_some_and(PdfMergeError::is_process_error) {
            formatter.warning("Re-run with --verbose to see how pdftk was invoked");
        }
        process::exit(merge_err.map_or(1, PdfMergeError::exit_code));
    }
}

fn init_tracing(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(verbose, rust_log.as_deref()))
        .try_init();
}

/// RUST_LOG directives win when set; --verbose then only adds DEBUG for this
/// crate. Without RUST_LOG the level is WARN, or DEBUG with --verbose.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    match rust_log.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) if verbose => {
            EnvFilter::new(format!("{directives},{}=debug", env!("CARGO_CRATE_NAME")))
        }
        Some(directives) => EnvFilter::new(directives),
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("warn"),
    }
}

async fn run(cli: Cli, formatter: &OutputFormatter) -> anyhow::Result<()> {
    let config = cli.to_config().context("Failed to build configuration")?;
    let inputs = cli.resolve_inputs()?;
    let files = InputFiles::new(&inputs)?;

    formatter.info(&format!("Merging {} PDF file(s)...", files.len()));
    for (idx, path) in files.paths().iter().enumerate() {
        formatter.detail(&format!("Input {}", idx + 1), &path.display().to_string());
    }
    formatter.detail("Binary", &config.lib_path);
    formatter.detail("Output", &config.output.to_string());

    if config.output.path().is_none() && std::io::stdout().is_terminal() {
        formatter.warning("Writing binary PDF data to a terminal; use -o <FILE> to save it");
    }

    let merged = Merger::new().merge(&files, &config).await?;

    let mut stdout = tokio::io::stdout();
    match merged {
        MergeOutput::Buffer(bytes) => {
            stdout.write_all(&bytes).await?;
            stdout.flush().await?;
            formatter.success(&format!("Merged {}", format_file_size(bytes.len() as u64)));
        }
        MergeOutput::Stream(mut stream) => {
            let copied = tokio::io::copy(&mut stream, &mut stdout).await?;
            stdout.flush().await?;
            formatter.success(&format!("Streamed {}", format_file_size(copied)));
        }
        MergeOutput::File { path, bytes } => {
            formatter.success(&format!(
                "Successfully created {} ({})",
                path.display(),
                format_file_size(bytes.len() as u64)
            ));
        }
    }

    Ok(())
}
