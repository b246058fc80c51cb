//! Merge execution: the single-file path and the merge binary.

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, warn};

use super::command::{MergeCommand, Platform};
use crate::config::Config;
use crate::error::{PdfMergeError, Result};
use crate::io::PdfReader;
use crate::output::{self, MergeOutput};
use crate::validation::InputFiles;

/// File name the merge binary is told to write inside its private temp dir.
const MERGED_FILE_NAME: &str = "merged.pdf";

/// Orchestrates one merge call: fast path or merge binary, then output
/// adaptation.
///
/// A `Merger` holds no per-call state, so one instance can serve any number of
/// concurrent calls.
#[derive(Debug, Clone)]
pub struct Merger {
    platform: Platform,
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

impl Merger {
    /// Create a merger for the host platform.
    pub fn new() -> Self {
        Self {
            platform: Platform::current(),
        }
    }

    /// Merge `files` in order and deliver the result as `config.output` asks.
    ///
    /// A single file is read directly without starting the merge binary; its
    /// bytes still go through the output adapter.
    ///
    /// # Errors
    ///
    /// Returns the first failure of reading, merging, or delivering. The
    /// output adapter never runs after a failure.
    pub async fn merge(&self, files: &InputFiles, config: &Config) -> Result<MergeOutput> {
        debug!(files = files.len(), output = %config.output, "starting merge");

        let bytes = match files.single() {
            Some(path) => {
                debug!(path = %path.display(), "single input, skipping merge binary");
                PdfReader::new().read(path).await?
            }
            None => self.run_merge_binary(files.paths(), config).await?,
        };

        output::deliver(&config.output, bytes).await
    }

    async fn run_merge_binary(&self, inputs: &[PathBuf], config: &Config) -> Result<Vec<u8>> {
        config.validate()?;

        let destination = MergeDestination::reserve()?;
        let command = MergeCommand::new(config, inputs, destination.path(), self.platform);
        let mut process = command.to_command()?;

        debug!(
            program = command.program(),
            invocation = ?command.invocation(),
            destination = %destination.path().display(),
            "running merge binary"
        );

        let finished = process
            .output()
            .await
            .map_err(|source| PdfMergeError::SpawnFailed {
                program: command.program().to_string(),
                source,
            })?;

        if !finished.status.success() {
            let stderr = String::from_utf8_lossy(&finished.stderr).into_owned();
            warn!(status = %finished.status, "merge binary failed");
            return Err(PdfMergeError::ProcessFailed {
                program: command.program().to_string(),
                code: finished.status.code(),
                stderr,
            });
        }

        let merged = tokio::fs::read(destination.path()).await.map_err(|source| {
            PdfMergeError::FailedToReadMerged {
                path: destination.path().to_path_buf(),
                source,
            }
        });

        destination.release();
        merged
    }
}

/// A unique, not yet existing path for the merge binary to write to.
///
/// The path lives in a private temporary directory. Dropping the guard removes
/// the directory and whatever the binary left in it, so failed merges are
/// cleaned up as well.
struct MergeDestination {
    dir: TempDir,
    path: PathBuf,
}

impl MergeDestination {
    fn reserve() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("pdftk-merge-")
            .tempdir()
            .map_err(|source| PdfMergeError::FailedToReserveTemp { source })?;
        let path = dir.path().join(MERGED_FILE_NAME);

        Ok(Self { dir, path })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the directory now; failures are logged and otherwise ignored.
    fn release(self) {
        let dir = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            debug!(dir = %dir.display(), error = %e, "failed to remove merge temp dir");
        }
    }
}
