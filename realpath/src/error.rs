//! Error types for the realpath library.
//!
//! Every failure the canonicalization primitive can report is mapped to a
//! dedicated variant carrying the path that failed, using `thiserror` for
//! the `Display` and `Error` implementations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a realpath error.
///
/// # Examples
///
/// ```
/// use realpath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the realpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// No path argument was supplied.
    #[error("missing PATH argument")]
    MissingPath,

    /// More than one path argument was supplied.
    #[error("expected exactly one PATH argument, got {count}")]
    UnexpectedArguments {
        /// The number of arguments received.
        count: usize,
    },

    /// A path value was rejected before or after resolution.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A component of the path does not exist.
    #[error("{}: no such file or directory", path.display())]
    PathNotFound {
        /// The path that could not be resolved.
        path: PathBuf,
    },

    /// Search permission was denied on a component of the path.
    #[error("{}: permission denied", path.display())]
    PermissionDenied {
        /// The path that could not be resolved.
        path: PathBuf,
    },

    /// A non-final component of the path is not a directory.
    #[error("{}: not a directory", path.display())]
    NotADirectory {
        /// The path that could not be resolved.
        path: PathBuf,
    },

    /// Too many symbolic links were encountered while resolving.
    #[error("{}: too many levels of symbolic links", path.display())]
    SymlinkLoop {
        /// The path that could not be resolved.
        path: PathBuf,
    },

    /// The path, or the resolved path, exceeds the platform limit.
    #[error("{}: file name too long", path.display())]
    NameTooLong {
        /// The path that could not be resolved.
        path: PathBuf,
    },

    /// Any other failure reported by the operating system.
    #[error("{}: {source}", path.display())]
    Resolution {
        /// The path that could not be resolved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Check if error was caused by how the program was invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use realpath::Error;
    ///
    /// assert!(Error::MissingPath.is_usage());
    /// assert!(Error::UnexpectedArguments { count: 2 }.is_usage());
    /// ```
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::MissingPath | Self::UnexpectedArguments { .. })
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use realpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// The input path this error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::MissingPath | Self::UnexpectedArguments { .. } => None,
            Self::InvalidPath { path, .. }
            | Self::PathNotFound { path }
            | Self::PermissionDenied { path }
            | Self::NotADirectory { path }
            | Self::SymlinkLoop { path }
            | Self::NameTooLong { path }
            | Self::Resolution { path, .. } => Some(path),
        }
    }
}
