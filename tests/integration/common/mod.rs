//! Shared helpers for integration tests.
//!
//! Real pdftk is never required: each test gets a stub binary that speaks the
//! same `<inputs...> cat output <dest>` protocol and concatenates its inputs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Records every destination path and argument list the stub was called with.
const RECORD_ARGS: &str = r#"
out=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "output" ]; then out="$arg"; fi
  prev="$arg"
done
printf '%s\n' "$out" >> "__DIR__/destinations"
: > "__DIR__/args"
for arg in "$@"; do printf '%s\n' "$arg" >> "__DIR__/args"; done
"#;

/// Concatenates every argument before `cat` into the destination.
const CONCAT: &str = r#"
: > "$out"
for arg in "$@"; do
  if [ "$arg" = "cat" ]; then break; fi
  cat "$arg" >> "$out"
done
"#;

/// A scratch directory holding a stub merge binary and its call records.
pub struct Stub {
    dir: TempDir,
    script: PathBuf,
}

impl Stub {
    fn with_body(body: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create stub dir");
        let script = dir.path().join("stub.sh");
        let record = RECORD_ARGS.replace("__DIR__", &dir.path().display().to_string());

        std::fs::write(&script, format!("#!/bin/sh\nset -e\n{record}{body}"))
            .expect("Failed to write stub");

        Self { dir, script }
    }

    /// A stub that merges by byte concatenation.
    pub fn concat() -> Self {
        Self::with_body(CONCAT)
    }

    /// A stub that writes a partial file, complains on stderr, and exits 3.
    pub fn failing() -> Self {
        Self::with_body(
            "printf 'partial' > \"$out\"\n\
             echo 'Error: Unexpected Exception in open_reader()' >&2\n\
             exit 3\n",
        )
    }

    /// A stub that succeeds without writing its destination.
    pub fn silent() -> Self {
        Self::with_body("exit 0\n")
    }

    /// Value for `Config::lib_path` that runs this stub through `sh`.
    pub fn lib_path(&self) -> String {
        format!("sh {}", self.script.display())
    }

    /// Install the concatenating stub as an executable named `name` in this
    /// stub's directory and return that directory.
    pub fn install_as(&self, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let target = self.dir.path().join(name);
        std::fs::copy(&self.script, &target).expect("Failed to install stub");
        std::fs::set_permissions(&target, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod stub");
        self.dir.path().to_path_buf()
    }

    /// Whether the stub has been started at least once.
    pub fn was_called(&self) -> bool {
        self.dir.path().join("destinations").exists()
    }

    /// Destination paths of every call, in call order.
    pub fn destinations(&self) -> Vec<PathBuf> {
        std::fs::read_to_string(self.dir.path().join("destinations"))
            .unwrap_or_default()
            .lines()
            .map(PathBuf::from)
            .collect()
    }

    /// Arguments of the most recent call.
    pub fn last_args(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("args"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// A directory of small input files with distinct contents.
pub struct Inputs {
    dir: TempDir,
}

impl Inputs {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create input dir"),
        }
    }

    /// Write `contents` to `name` and return its path.
    pub fn add(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write input");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// A fake PDF body that is easy to recognize in merged output.
pub fn fake_pdf(tag: &str) -> Vec<u8> {
    format!("%PDF-1.4\n% {tag}\n%%EOF\n").into_bytes()
}
