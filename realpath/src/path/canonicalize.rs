//! Path canonicalization.
//!
//! This is a thin layer over [`std::fs::canonicalize`] (`realpath(3)` on
//! Unix) that turns the operating system's failure into a typed [`Error`]
//! carrying the path that was being resolved.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Canonicalize a path by resolving every symlink and `.`/`..` segment.
///
/// Relative paths are resolved against the current working directory. Every
/// component must exist.
///
/// # Errors
///
/// Returns an error if:
/// - A component does not exist (`PathNotFound`)
/// - Search permission is denied (`PermissionDenied`)
/// - A non-final component is not a directory (`NotADirectory`)
/// - A symlink cycle is found (`SymlinkLoop`)
/// - The path exceeds the platform limit (`NameTooLong`)
/// - Any other I/O error occurs (`Resolution`)
///
/// # Examples
///
/// ```no_run
/// use realpath::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/etc/../etc/hosts")).unwrap();
/// assert_eq!(canonical, Path::new("/etc/hosts"));
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| classify(path, e))
}

/// Map an I/O error from canonicalization onto the error taxonomy.
pub(crate) fn classify(path: &Path, err: io::Error) -> Error {
    if let Some(classified) = err.raw_os_error().and_then(|code| classify_errno(path, code)) {
        return classified;
    }

    let path = path.to_path_buf();
    match err.kind() {
        ErrorKind::NotFound => Error::PathNotFound { path },
        ErrorKind::PermissionDenied => Error::PermissionDenied { path },
        _ => Error::Resolution { path, source: err },
    }
}

#[cfg(unix)]
fn classify_errno(path: &Path, code: i32) -> Option<Error> {
    let path = path.to_path_buf();
    match code {
        libc::ENOENT => Some(Error::PathNotFound { path }),
        libc::EACCES => Some(Error::PermissionDenied { path }),
        libc::ENOTDIR => Some(Error::NotADirectory { path }),
        libc::ELOOP => Some(Error::SymlinkLoop { path }),
        libc::ENAMETOOLONG => Some(Error::NameTooLong { path }),
        _ => None,
    }
}

#[cfg(not(unix))]
fn classify_errno(_path: &Path, _code: i32) -> Option<Error> {
    None
}
