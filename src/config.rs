//! Configuration module for pdftk-merge.
//!
//! A [`Config`] is a complete, immutable description of how one merge call
//! behaves. Defaults live in [`Config::default`] and in the serde defaults, so
//! no call ever overlays options onto shared mutable state.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{PdfMergeError, Result};

/// Conventional name of the merge binary.
pub const DEFAULT_LIB_PATH: &str = "pdftk";

/// Representation the merged document is handed back in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum OutputTarget {
    /// Return the merged bytes in memory.
    #[default]
    Buffer,
    /// Return a readable stream over the merged bytes.
    Stream,
    /// Write the merged bytes to this path, then return them.
    File(PathBuf),
}

impl OutputTarget {
    /// Create a file target.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Returns the output path if this is a file target.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Buffer | Self::Stream => None,
        }
    }
}

impl FromStr for OutputTarget {
    type Err = PdfMergeError;

    /// Parse an output target.
    ///
    /// `BUFFER` selects [`OutputTarget::Buffer`]; `STREAM` and `READSTREAM`
    /// select [`OutputTarget::Stream`] (both case-insensitive). Empty and
    /// whitespace-only values are rejected; anything else is a file path.
    fn from_str(s: &str) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(PdfMergeError::invalid_config(
                "Output target cannot be empty. Use BUFFER, STREAM, or a file path",
            ));
        }

        match s.to_uppercase().as_str() {
            "BUFFER" => Ok(Self::Buffer),
            "STREAM" | "READSTREAM" => Ok(Self::Stream),
            _ => Ok(Self::File(PathBuf::from(s))),
        }
    }
}

impl TryFrom<String> for OutputTarget {
    type Error = PdfMergeError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer => write!(f, "buffer"),
            Self::Stream => write!(f, "stream"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Complete configuration for one merge call.
///
/// Deserializes from the same option names the JSON config file uses:
///
/// ```
/// use pdftk_merge::config::{Config, OutputTarget};
///
/// let config: Config = serde_json::from_str(r#"{ "output": "stream" }"#).unwrap();
/// assert_eq!(config.lib_path, "pdftk");
/// assert_eq!(config.output, OutputTarget::Stream);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Path or name of the merge binary.
    pub lib_path: String,

    /// Representation of the merged document.
    pub output: OutputTarget,

    /// Extra raw argument appended to the invocation, passed through unmodified.
    pub exec_options: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lib_path: DEFAULT_LIB_PATH.to_string(),
            output: OutputTarget::Buffer,
            exec_options: None,
        }
    }
}

impl Config {
    /// Set the merge binary.
    pub fn with_lib_path(mut self, lib_path: impl Into<String>) -> Self {
        self.lib_path = lib_path.into();
        self
    }

    /// Set the output target.
    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    /// Set the extra raw argument.
    pub fn with_exec_options(mut self, exec_options: impl Into<String>) -> Self {
        self.exec_options = Some(exec_options.into());
        self
    }

    /// Whether the conventional binary name is configured.
    pub fn uses_default_lib_path(&self) -> bool {
        self.lib_path == DEFAULT_LIB_PATH
    }

    /// Load a configuration from a JSON file.
    ///
    /// Keys are `libPath`, `output` and `execOptions`; absent keys keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON for
    /// this structure.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PdfMergeError::from_input_io(path.to_path_buf(), e))?;

        let config: Self = serde_json::from_str(&contents).map_err(|e| {
            PdfMergeError::invalid_config(format!("{}: {e}", path.display()))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the binary path is blank.
    pub fn validate(&self) -> Result<()> {
        if self.lib_path.trim().is_empty() {
            return Err(PdfMergeError::invalid_config("libPath cannot be empty"));
        }

        Ok(())
    }
}
