//! The resolved path type.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// An absolute, canonical path together with the input it came from.
///
/// A `ResolvedPath` can only hold an absolute path; it is produced by
/// [`PathResolver`](crate::path::PathResolver) and is never mutated.
///
/// # Examples
///
/// ```
/// use realpath::path::ResolvedPath;
/// use std::path::PathBuf;
///
/// let resolved = ResolvedPath::new(PathBuf::from("/etc/hosts"), PathBuf::from("hosts")).unwrap();
/// assert_eq!(resolved.as_path(), std::path::Path::new("/etc/hosts"));
/// assert_eq!(resolved.original(), std::path::Path::new("hosts"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    path: PathBuf,
    original: PathBuf,
}

impl ResolvedPath {
    /// Create a resolved path.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if `path` is not absolute.
    pub fn new(path: PathBuf, original: PathBuf) -> Result<Self> {
        if !path.is_absolute() {
            return Err(Error::InvalidPath {
                path,
                reason: "resolved path is not absolute".to_string(),
            });
        }
        Ok(Self { path, original })
    }

    /// The canonical path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// The input this path was resolved from, as given.
    #[must_use]
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// Consume and return the canonical path.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }

    /// The exact bytes to write when printing this path.
    ///
    /// On Unix these are the raw bytes of the path, so names that are not
    /// valid UTF-8 are reproduced unchanged. Elsewhere the path is converted
    /// lossily.
    #[must_use]
    pub fn to_output_bytes(&self) -> Cow<'_, [u8]> {
        #[cfg(unix)]
        {
            use std::os::unix::ffi::OsStrExt;
            Cow::Borrowed(self.path.as_os_str().as_bytes())
        }
        #[cfg(not(unix))]
        {
            match self.path.to_string_lossy() {
                Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
                Cow::Owned(s) => Cow::Owned(s.into_bytes()),
            }
        }
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
