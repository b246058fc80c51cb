//! Console messages for the command-line front end.
//!
//! All messages go to stderr; stdout is reserved for merged PDF bytes when
//! the command line asks for buffer or stream output.
//!
//! # Examples
//!
//! ```
//! use pdftk_merge::output::formatter::{OutputFormatter, Verbosity};
//!
//! let formatter = OutputFormatter::new(Verbosity::from_flags(false, true));
//! formatter.info("Merging 3 PDF file(s)...");
//! formatter.detail("Binary", "pdftk");
//! formatter.success("Merged 12.00 KB");
//! ```

use std::io::{self, IsTerminal};

/// How much the front end prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings and errors only.
    Quiet,
    /// Progress and results.
    #[default]
    Normal,
    /// Everything, including invocation details.
    Verbose,
}

impl Verbosity {
    /// Map the `--quiet` and `--verbose` flags; quiet wins if both are set.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, true) => Self::Verbose,
            (false, false) => Self::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
    Detail,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Self::Info | Self::Detail => ("", ""),
            Self::Success => ("✓ ", "\x1b[32m"),
            Self::Warning => ("⚠ ", "\x1b[33m"),
            Self::Error => ("✗ ", "\x1b[31m"),
        }
    }
}

/// Writes user-facing messages to stderr at the chosen verbosity.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    verbosity: Verbosity,
    colored: bool,
}

impl OutputFormatter {
    /// Create a formatter; color is used only when stderr is a terminal.
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            colored: io::stderr().is_terminal() && std::env::var_os("TERM").is_some(),
        }
    }

    /// Progress message, hidden in quiet mode.
    pub fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    /// Result message, hidden in quiet mode.
    pub fn success(&self, message: &str) {
        self.emit(Level::Success, message);
    }

    /// Always shown.
    pub fn warning(&self, message: &str) {
        self.emit(Level::Warning, message);
    }

    /// Always shown.
    pub fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }

    /// Indented `label: value` line, shown only in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        self.emit(Level::Detail, &format!("  {label}: {value}"));
    }

    fn shows(&self, level: Level) -> bool {
        match level {
            Level::Warning | Level::Error => true,
            Level::Info | Level::Success => self.verbosity != Verbosity::Quiet,
            Level::Detail => self.verbosity == Verbosity::Verbose,
        }
    }

    fn emit(&self, level: Level, message: &str) {
        if !self.shows(level) {
            return;
        }

        let (prefix, color) = level.style();
        if self.colored && !color.is_empty() {
            eprintln!("{color}{prefix}{message}\x1b[0m");
        } else {
            eprintln!("{prefix}{message}");
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(Verbosity::default())
    }
}
