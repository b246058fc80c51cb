//! pdftk-merge - Merge PDF files into a single document with pdftk.
//!
//! This library is a thin orchestrator around the `pdftk` command-line tool.
//! It never parses PDF structure itself; it:
//!
//! - Validates the ordered list of input files
//! - Runs `pdftk <inputs...> cat output <tmp>` with platform-correct quoting
//! - Reads the merged bytes back and removes the temporary file
//! - Hands the result back as a buffer, a stream, or a file on disk
//!
//! A single input skips `pdftk` entirely and is returned as-is.
//!
//! # Examples
//!
//! ## Merge into memory
//!
//! ```no_run
//! use pdftk_merge::{Config, merge};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let output = merge(["a.pdf", "b.pdf"], &Config::default()).await?;
//! let bytes = output.into_bytes().await?;
//! println!("Merged document is {} bytes", bytes.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Merge to disk with a custom binary
//!
//! ```no_run
//! use pdftk_merge::{Config, OutputTarget, merge};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default()
//!     .with_lib_path("/opt/pdftk/bin/pdftk")
//!     .with_output(OutputTarget::file("book.pdf"))
//!     .with_exec_options("compress");
//!
//! merge(["cover.pdf", "chapter1.pdf", "chapter2.pdf"], &config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Untyped input
//!
//! ```no_run
//! use pdftk_merge::{Config, merge_value};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Non-string entries are dropped before merging.
//! let request = json!(["a.pdf", null, "b.pdf"]);
//! let output = merge_value(&request, &Config::default()).await?;
//! # let _ = output;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, OutputTarget};
pub use error::{PdfMergeError, Result};
pub use merge::Merger;
pub use output::{MergeOutput, MergedStream};
pub use validation::InputFiles;

use std::path::Path;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Merge `files`, in order, according to `config`.
///
/// # Errors
///
/// - [`PdfMergeError::NoFilesSubmitted`] if `files` is empty
/// - Filesystem, process, or write errors from the merge itself
pub async fn merge<I, P>(files: I, config: &Config) -> Result<MergeOutput>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let files = InputFiles::new(files)?;
    Merger::new().merge(&files, config).await
}

/// Merge files listed in an untyped value, such as a decoded JSON request.
///
/// The value must be an array; non-string entries are ignored.
///
/// # Errors
///
/// - [`PdfMergeError::InvalidInput`] if `files` is not an array
/// - [`PdfMergeError::NoFilesSubmitted`] if it holds no strings
/// - Filesystem, process, or write errors from the merge itself
pub async fn merge_value(files: &serde_json::Value, config: &Config) -> Result<MergeOutput> {
    let files = InputFiles::from_value(files)?;
    Merger::new().merge(&files, config).await
}
