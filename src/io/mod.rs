//! File I/O for pdftk-merge.
//!
//! This module handles the two places the orchestrator touches the
//! filesystem itself:
//! - Reading a lone input file on the single-file path
//! - Writing the merged bytes to a caller-chosen path
//!
//! Everything in between is read and written by the merge binary.
//!
//! # Examples
//!
//! ```no_run
//! use pdftk_merge::io::{PdfReader, PdfWriter};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = PdfReader::new().read(Path::new("input.pdf")).await?;
//! let (bytes, stats) = PdfWriter::new().write(bytes, Path::new("copy.pdf")).await?;
//! println!("Wrote {}", stats.format_file_size());
//! # let _ = bytes;
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod writer;

pub use reader::PdfReader;
pub use writer::{PdfWriter, WriteStatistics};

/// Format a byte count as a human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
