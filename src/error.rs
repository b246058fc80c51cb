//! Error types for pdftk-merge.
//!
//! Every failure of a merge call is reported through [`PdfMergeError`].
//!
//! # Error Categories
//!
//! - **Input Errors**: the file list is malformed or empty
//! - **I/O Errors**: an input, the merged temp file, or the output cannot be accessed
//! - **Process Errors**: the merge binary could not be started or exited non-zero
//! - **Configuration Errors**: an option value cannot be interpreted

use std::io;
use std::path::PathBuf;

/// Result type alias for pdftk-merge operations.
pub type Result<T> = std::result::Result<T, PdfMergeError>;

/// Main error type for pdftk-merge operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfMergeError {
    /// The file list was not a sequence of paths.
    #[error("{message}")]
    InvalidInput {
        /// What was wrong with the input.
        message: String,
    },

    /// No usable paths remained after filtering the file list.
    #[error("No files were submitted for merging.")]
    NoFilesSubmitted,

    /// Input file was not found.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path to the file that was not found.
        path: PathBuf,
    },

    /// Input file exists but could not be read.
    #[error("Cannot access file: {}\n  Reason: {source}", path.display())]
    FileNotAccessible {
        /// Path to the inaccessible file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A temporary merge destination could not be reserved.
    #[error("Failed to reserve a temporary merge file\n  Reason: {source}")]
    FailedToReserveTemp {
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The merge binary finished but its output could not be read back.
    #[error("Failed to read merged output: {}\n  Reason: {source}", path.display())]
    FailedToReadMerged {
        /// Temporary path the binary was told to write.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write the merged document to the requested output path.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The merge binary could not be started.
    #[error(
        "Failed to run merge binary `{program}`\n  Reason: {source}\n  \
         Hint: install pdftk or point --lib-path at the binary"
    )]
    SpawnFailed {
        /// Program that was invoked.
        program: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The merge binary exited unsuccessfully.
    #[error("Merge binary `{program}` {}: {stderr}", describe_exit(*code))]
    ProcessFailed {
        /// Program that was invoked.
        program: String,
        /// Exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// Raw standard error output of the process.
        stderr: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// A glob pattern given on the command line could not be parsed.
    #[error("Invalid glob pattern: {0}")]
    FailedToParseGlobPattern(#[from] glob::PatternError),

    /// A path matched by a glob pattern could not be read.
    #[error("Failed to process glob entry: {0}")]
    FailedToProcessGlobEntry(#[from] glob::GlobError),

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".to_string(),
    }
}

impl PdfMergeError {
    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Classify an I/O error raised while opening an input file.
    pub fn from_input_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileNotAccessible { path, source }
        }
    }

    /// Check if the error came from the external merge binary.
    pub fn is_process_error(&self) -> bool {
        matches!(self, Self::SpawnFailed { .. } | Self::ProcessFailed { .. })
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput { .. } => 1,
            Self::NoFilesSubmitted => 1,
            Self::InvalidConfig { .. } => 1,
            Self::FailedToParseGlobPattern(_) => 1,
            Self::FileNotFound { .. } => 2,
            Self::FileNotAccessible { .. } => 2,
            Self::FailedToProcessGlobEntry(_) => 2,
            Self::FailedToReserveTemp { .. } => 5,
            Self::FailedToReadMerged { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::Io { .. } => 5,
            Self::SpawnFailed { .. } => 6,
            Self::ProcessFailed { .. } => 6,
        }
    }
}
