//! Input validation for merge calls.
//!
//! Validation runs before any filesystem or process work, so a rejected file
//! list never leaves side effects behind.
//!
//! # Examples
//!
//! ```
//! use pdftk_merge::validation::InputFiles;
//! use serde_json::json;
//!
//! let files = InputFiles::from_value(&json!(["a.pdf", 42, "b.pdf"])).unwrap();
//! assert_eq!(files.len(), 2);
//!
//! assert!(InputFiles::from_value(&json!("a.pdf")).is_err());
//! ```

use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::error::{PdfMergeError, Result};

/// Message for a file list that is not a sequence.
pub const NOT_A_SEQUENCE: &str = "Expected files to be an array of paths to PDF files.";

/// A validated, ordered, non-empty list of input paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFiles {
    paths: Vec<PathBuf>,
}

impl InputFiles {
    /// Build from typed paths, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMergeError::NoFilesSubmitted`] if the iterator is empty.
    pub fn new<I, P>(files: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let paths: Vec<PathBuf> = files
            .into_iter()
            .map(|p| p.as_ref().to_path_buf())
            .collect();

        Self::from_paths(paths)
    }

    /// Build from an untyped value such as a decoded JSON request.
    ///
    /// The value must be an array. Entries that are not strings are dropped.
    ///
    /// # Errors
    ///
    /// - [`PdfMergeError::InvalidInput`] if `value` is not an array
    /// - [`PdfMergeError::NoFilesSubmitted`] if no string entries remain
    pub fn from_value(value: &Value) -> Result<Self> {
        let Value::Array(entries) = value else {
            return Err(PdfMergeError::invalid_input(NOT_A_SEQUENCE));
        };

        let paths: Vec<PathBuf> = entries
            .iter()
            .filter_map(Value::as_str)
            .map(PathBuf::from)
            .collect();

        Self::from_paths(paths)
    }

    fn from_paths(paths: Vec<PathBuf>) -> Result<Self> {
        if paths.is_empty() {
            return Err(PdfMergeError::NoFilesSubmitted);
        }

        Ok(Self { paths })
    }

    /// Returns the paths in merge order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Number of input files.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Always false; an `InputFiles` holds at least one path.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Returns the only path when exactly one file was submitted.
    pub fn single(&self) -> Option<&Path> {
        match self.paths.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}
