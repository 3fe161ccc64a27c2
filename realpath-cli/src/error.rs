//! CLI-specific error types with exit codes.
//!
//! Library errors are sorted into usage errors and resolution errors here,
//! and each kind is given its own process exit status.

use std::fmt;
use realpath::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// No PATH, more than one PATH, or an unrecognised option.
    Usage,

    /// The path could not be canonicalized.
    Resolution(LibError),

    /// Writing the result to stdout failed.
    Io(std::io::Error),
}

impl CliError {
    /// Get the exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Usage error
    /// - 2: Resolution failure
    /// - 3: Output I/O error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage => 1,
            CliError::Resolution(_) => 2,
            CliError::Io(_) => 3,
        }
    }

    /// Render the message written to stderr for `program`.
    pub fn report(&self, program: &str) -> String {
        match self {
            CliError::Usage => format!("usage: {program} PATH"),
            _ => format!("{program}: {self}"),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage => write!(f, "missing or extra PATH argument"),
            CliError::Resolution(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "cannot write output: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Resolution(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::Usage => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        if e.is_usage() {
            CliError::Usage
        } else {
            CliError::Resolution(e)
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
