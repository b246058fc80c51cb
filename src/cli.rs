//! CLI argument parsing for pdftk-merge.

use clap::Parser;
use std::path::PathBuf;

use pdftk_merge::config::Config;
use pdftk_merge::error::Result;
use pdftk_merge::utils::collect_paths_for_patterns;

/// Merge PDF files into a single document using pdftk.
///
/// Input files are concatenated in the order given. A single input is passed
/// through unchanged without running pdftk.
#[derive(Parser, Debug)]
#[command(name = "pdftk-merge")]
#[command(version)]
#[command(about = "Merge PDF files into a single document using pdftk", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Input PDF files to merge (in order)
    ///
    /// Glob patterns are expanded; matches of one pattern are sorted.
    ///
    /// Examples:
    ///   pdftk-merge cover.pdf chapter*.pdf -o book.pdf
    #[arg(required = true, value_name = "FILE")]
    pub inputs: Vec<String>,

    /// Where the merged PDF goes
    ///
    /// BUFFER or STREAM write the merged bytes to stdout (case-insensitive).
    /// Any other value is a file path. Defaults to BUFFER.
    #[arg(short, long, value_name = "TARGET")]
    pub output: Option<String>,

    /// Path or name of the pdftk binary
    #[arg(long, value_name = "PATH", env = "PDFTK_MERGE_LIB_PATH")]
    pub lib_path: Option<String>,

    /// Extra arguments appended to the pdftk invocation as-is
    ///
    /// Example: --exec-options compress
    #[arg(long, value_name = "ARGS", allow_hyphen_values = true)]
    pub exec_options: Option<String>,

    /// JSON file with libPath, output and execOptions keys
    ///
    /// Command-line flags override values from the file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output - show the pdftk invocation and debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Build the merge configuration: defaults, then the config file, then flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be loaded or a flag value is
    /// invalid.
    pub fn to_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::default(),
        };

        if let Some(lib_path) = &self.lib_path {
            config.lib_path = lib_path.clone();
        }

        if let Some(output) = &self.output {
            config.output = output.parse()?;
        }

        if let Some(exec_options) = &self.exec_options {
            config.exec_options = Some(exec_options.clone());
        }

        config.validate()?;
        Ok(config)
    }

    /// Expand the input arguments into paths.
    ///
    /// # Errors
    ///
    /// Returns an error if a glob pattern is invalid.
    pub fn resolve_inputs(&self) -> Result<Vec<PathBuf>> {
        collect_paths_for_patterns(&self.inputs)
    }
}
