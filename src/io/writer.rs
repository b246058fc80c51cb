//! Writing merged output to disk.
//!
//! The destination is opened for writing in place, truncated and filled with
//! the merged bytes. A new file gets the usual `0o666` minus the process
//! umask; an existing file keeps its permissions, and a symlink is written
//! through. The parent directory must already exist.
//!
//! # Examples
//!
//! ```no_run
//! use pdftk_merge::io::writer::PdfWriter;
//! use std::path::Path;
//!
//! # async fn example(bytes: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
//! let writer = PdfWriter::new();
//! let (_bytes, stats) = writer.write(bytes, Path::new("merged.pdf")).await?;
//! println!("Wrote {} in {:?}", stats.format_file_size(), stats.write_time);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfMergeError, Result};

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Number of bytes written.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

impl WriteStatistics {
    /// Format file size as human-readable string.
    pub fn format_file_size(&self) -> String {
        super::format_file_size(self.file_size)
    }
}

/// Writes merged bytes to a caller-chosen path.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfWriter;

impl PdfWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self
    }

    /// Write `bytes` to `path`.
    ///
    /// The buffer is handed back unchanged alongside the statistics so callers
    /// can keep using it without a copy.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMergeError::FailedToWrite`] if the file cannot be created
    /// or written, including when its parent directory is missing.
    pub async fn write(&self, bytes: Vec<u8>, path: &Path) -> Result<(Vec<u8>, WriteStatistics)> {
        let start = Instant::now();

        tokio::fs::write(path, &bytes)
            .await
            .map_err(|source| PdfMergeError::FailedToWrite {
                path: path.to_path_buf(),
                source,
            })?;

        let stats = WriteStatistics {
            write_time: start.elapsed(),
            file_size: bytes.len() as u64,
            output_path: path.to_path_buf(),
        };

        Ok((bytes, stats))
    }
}
