//! Command construction for the merge binary.
//!
//! The binary is driven through its fixed command-line protocol:
//!
//! ```text
//! <lib_path> <input1> <input2> ... cat output <destination> [exec_options]
//! ```
//!
//! Quoting and strategy selection are pure functions; nothing in this module
//! spawns a process.

use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::config::Config;
use crate::error::{PdfMergeError, Result};

/// Host operating system family, as far as quoting rules are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// `cmd.exe` quoting.
    Windows,
    /// POSIX `sh` quoting.
    Unix,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }
}

/// How the merge binary is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// A single command line interpreted by the platform shell.
    Shell,
    /// The binary executed directly with an argument vector.
    Direct,
}

/// Pick the invocation strategy.
///
/// Windows runs a custom binary path directly, since such paths tend to carry
/// spaces that would be escaped twice through `cmd.exe`. Everything else goes
/// through the shell.
pub fn select_invocation(platform: Platform, default_lib_path: bool) -> Invocation {
    match (platform, default_lib_path) {
        (Platform::Windows, false) => Invocation::Direct,
        (Platform::Windows, true) | (Platform::Unix, _) => Invocation::Shell,
    }
}

/// Escape one argument for a POSIX shell.
///
/// Arguments made only of characters the shell never interprets are returned
/// unchanged; everything else is single-quoted.
pub fn shell_escape(arg: &str) -> Cow<'_, str> {
    let is_safe = |b: u8| b.is_ascii_alphanumeric() || b"_-/:=.,+@%".contains(&b);

    if !arg.is_empty() && arg.bytes().all(is_safe) {
        return Cow::Borrowed(arg);
    }

    let mut quoted = format!("'{}'", arg.replace('\'', r"'\''"));

    // Drop the empty '' pairs a leading quote leaves behind.
    while quoted.len() > 2 && quoted.starts_with("''") {
        quoted.replace_range(..2, "");
    }

    Cow::Owned(quoted.replace(r"\'''", r"\'"))
}

/// Wrap one argument in double quotes for `cmd.exe`.
pub fn windows_quote(arg: &str) -> String {
    format!("\"{arg}\"")
}

/// Quote an input path for a shell command line.
///
/// On Unix, backslashes are normalized to forward slashes first so paths
/// written in Windows style still resolve.
pub fn quote_input(platform: Platform, path: &str) -> String {
    match platform {
        Platform::Windows => windows_quote(path),
        Platform::Unix => shell_escape(&path.replace('\\', "/")).into_owned(),
    }
}

/// Quote the merge destination for a shell command line.
pub fn quote_destination(platform: Platform, path: &str) -> String {
    match platform {
        Platform::Windows => windows_quote(path),
        Platform::Unix => shell_escape(path).into_owned(),
    }
}

/// A fully described invocation of the merge binary.
#[derive(Debug, Clone)]
pub struct MergeCommand {
    program: String,
    inputs: Vec<PathBuf>,
    destination: PathBuf,
    exec_options: Option<String>,
    platform: Platform,
    invocation: Invocation,
}

impl MergeCommand {
    /// Describe a merge of `inputs` into `destination` under `config`.
    pub fn new(config: &Config, inputs: &[PathBuf], destination: &Path, platform: Platform) -> Self {
        Self {
            program: config.lib_path.clone(),
            inputs: inputs.to_vec(),
            destination: destination.to_path_buf(),
            exec_options: config.exec_options.clone(),
            platform,
            invocation: select_invocation(platform, config.uses_default_lib_path()),
        }
    }

    /// The configured binary.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The selected invocation strategy.
    pub fn invocation(&self) -> Invocation {
        self.invocation
    }

    /// Unquoted argument vector, in protocol order.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = self
            .inputs
            .iter()
            .map(|p| p.as_os_str().to_os_string())
            .collect();

        args.push("cat".into());
        args.push("output".into());
        args.push(self.destination.as_os_str().to_os_string());

        if let Some(extra) = &self.exec_options {
            args.push(extra.into());
        }

        args
    }

    /// Space-joined command line for shell invocation.
    ///
    /// The binary path and `exec_options` are inserted verbatim; input paths
    /// and the destination are quoted for the platform.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMergeError::InvalidInput`] if a path is not valid UTF-8
    /// and therefore cannot be placed on a command line.
    pub fn command_line(&self) -> Result<String> {
        let mut parts = Vec::with_capacity(self.inputs.len() + 5);
        parts.push(self.program.clone());

        for input in &self.inputs {
            parts.push(quote_input(self.platform, utf8_path(input)?));
        }

        parts.push("cat".to_string());
        parts.push("output".to_string());
        parts.push(quote_destination(self.platform, utf8_path(&self.destination)?));

        if let Some(extra) = &self.exec_options {
            parts.push(extra.clone());
        }

        Ok(parts.join(" "))
    }

    /// Build the process for the host platform.
    ///
    /// # Errors
    ///
    /// Propagates [`MergeCommand::command_line`] failures on the shell path.
    pub fn to_command(&self) -> Result<Command> {
        match self.invocation {
            Invocation::Direct => {
                let mut command = Command::new(&self.program);
                command.args(self.args());
                Ok(command)
            }
            Invocation::Shell => Ok(shell_command(&self.command_line()?)),
        }
    }
}

fn utf8_path(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| {
        PdfMergeError::invalid_input(format!(
            "Path is not valid UTF-8 and cannot be passed to the shell: {}",
            path.display()
        ))
    })
}

#[cfg(windows)]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/d", "/s", "/c"]).raw_arg(format!("\"{line}\""));
    command
}

#[cfg(not(windows))]
fn shell_command(line: &str) -> Command {
    let mut command = Command::new("/bin/sh");
    command.arg("-c").arg(line);
    command
}
