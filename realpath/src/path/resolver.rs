//! Path resolution.
//!
//! This module provides the `PathResolver` type, the entry point that turns
//! command-line input into a [`ResolvedPath`].

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::logging::Logger;
use crate::path::canonicalize;
use crate::path::types::ResolvedPath;

/// Resolves user-supplied paths to their canonical absolute form.
///
/// # Examples
///
/// ```no_run
/// use realpath::path::PathResolver;
/// use std::path::Path;
///
/// let resolver = PathResolver::new();
/// let resolved = resolver.resolve(Path::new(".")).unwrap();
/// assert!(resolved.as_path().is_absolute());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    logger: Logger,
}

impl PathResolver {
    /// Create a new path resolver with a default logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `logger` for resolution traces.
    ///
    /// ```
    /// use realpath::{LogLevel, Logger};
    /// use realpath::path::PathResolver;
    ///
    /// let resolver = PathResolver::new().with_logger(Logger::new(LogLevel::Verbose));
    /// ```
    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Resolve a single path.
    ///
    /// # Errors
    ///
    /// Returns whatever [`canonicalize::canonicalize`] reports for `input`.
    pub fn resolve(&self, input: &Path) -> Result<ResolvedPath> {
        self.logger.debug(&format!("resolving {}", input.display()));
        if input.is_relative() {
            if let Ok(cwd) = env::current_dir() {
                self.logger.debug(&format!("relative to {}", cwd.display()));
            }
        }

        let canonical = canonicalize::canonicalize(input).map_err(|e| {
            self.logger.debug(&format!("resolution failed: {e}"));
            e
        })?;

        self.logger.debug(&format!("resolved to {}", canonical.display()));
        ResolvedPath::new(canonical, input.to_path_buf())
    }

    /// Resolve from an argument list that excludes the program name.
    ///
    /// Exactly one argument is expected. Usage errors are reported before any
    /// filesystem access.
    ///
    /// # Errors
    ///
    /// Returns `MissingPath` when `args` is empty, `UnexpectedArguments` when
    /// it holds more than one entry, and otherwise the result of
    /// [`PathResolver::resolve`].
    ///
    /// # Examples
    ///
    /// ```
    /// use realpath::path::PathResolver;
    /// use realpath::Error;
    ///
    /// let err = PathResolver::new().resolve_args(&[]).unwrap_err();
    /// assert!(matches!(err, Error::MissingPath));
    /// ```
    pub fn resolve_args(&self, args: &[OsString]) -> Result<ResolvedPath> {
        match args {
            [] => Err(Error::MissingPath),
            [path] => self.resolve(&PathBuf::from(path)),
            _ => Err(Error::UnexpectedArguments { count: args.len() }),
        }
    }
}
