//! Reading input files.

use std::path::Path;

use crate::error::{PdfMergeError, Result};

/// Reads input files as opaque byte buffers.
///
/// No PDF structure is inspected; whatever is on disk is returned.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new reader.
    pub fn new() -> Self {
        Self
    }

    /// Read the full contents of an input file.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMergeError::FileNotFound`] if the path does not exist and
    /// [`PdfMergeError::FileNotAccessible`] for any other I/O failure.
    pub async fn read(&self, path: &Path) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|e| PdfMergeError::from_input_io(path.to_path_buf(), e))
    }
}
