//! Filesystem path helpers.
//!
//! Thin OS-facing wrappers used by config-file discovery: absolute path
//! resolution with `$HOME`/`$VAR` expansion, and a file existence probe.

use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, error};

/// Resolve `in_path` to an absolute, lexically cleaned path.
///
/// A leading `$HOME` expands to the user's home directory; any other leading
/// `$VAR` expands to the value of that environment variable (empty when
/// unset). Relative paths are resolved against the current directory.
///
/// Best-effort: if the path cannot be made absolute, an error is logged and
/// an empty path is returned.
pub fn abs_pathify(in_path: &str) -> PathBuf {
    debug!(path = in_path, "resolving absolute path");

    let path = PathBuf::from(expand_leading_var(in_path));
    if path.is_absolute() {
        return clean(&path);
    }

    match std::path::absolute(&path) {
        Ok(absolute) => clean(&absolute),
        Err(e) => {
            error!(path = in_path, error = %e, "could not resolve absolute path");
            PathBuf::new()
        },
    }
}

/// Whether `path` names an existing non-directory file.
///
/// # Errors
///
/// Returns any I/O error other than `NotFound`, which maps to `Ok(false)`.
pub fn file_exists(path: &Path) -> io::Result<bool> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(!metadata.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Expand a leading `$HOME` or `$VAR` reference.
fn expand_leading_var(in_path: &str) -> String {
    if let Some(rest) = in_path.strip_prefix("$HOME")
        && (rest.is_empty() || rest.starts_with(std::path::MAIN_SEPARATOR))
    {
        if let Some(home) = user_home_dir() {
            return format!("{}{rest}", home.display());
        }
        return in_path.to_owned();
    }

    if let Some(reference) = in_path.strip_prefix('$') {
        let (name, suffix) = match reference.find(std::path::MAIN_SEPARATOR) {
            Some(end) => reference.split_at(end),
            None => (reference, ""),
        };
        let value = std::env::var(name).unwrap_or_default();
        return format!("{value}{suffix}");
    }

    in_path.to_owned()
}

/// Determine the user's home directory.
fn user_home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component where possible.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                if !out.pop() && !path.is_absolute() {
                    out.push("..");
                }
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
