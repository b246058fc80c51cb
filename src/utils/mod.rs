//! Path collection helpers for the command line.

use crate::Result;
use std::path::PathBuf;

/// Expand multiple glob patterns into filesystem paths, in argument order.
///
/// Accepts anything iterable with items that convert to `&str`, e.g.
/// `&[&str]`, `Vec<String>`, or `Vec<&str>`. Matches of one pattern are
/// sorted; patterns keep their relative order.
///
/// A plain path without glob metacharacters is kept as given even if nothing
/// exists there, so the merge reports the missing file instead of silently
/// skipping it.
///
/// # Errors
///
/// - Propagates `glob` parse errors.
/// - Propagates filesystem errors from the glob iterator.
pub fn collect_paths_for_patterns<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved_paths = Vec::new();

    for pattern in patterns.into_iter() {
        let paths = collect_paths_for_pattern(pattern.as_ref())?;
        resolved_paths.extend(paths);
    }

    Ok(resolved_paths)
}

fn collect_paths_for_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    if !is_glob(pattern) {
        return Ok(vec![PathBuf::from(pattern)]);
    }

    let mut resolved_paths = Vec::new();
    for entry in glob::glob(pattern)? {
        resolved_paths.push(entry?);
    }

    Ok(resolved_paths)
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
