//! Diagnostic logging for realpath.
//!
//! All log output goes to stderr so that stdout carries nothing but the
//! resolved path.

use std::env;
use std::fmt;

/// Environment variable consulted when no verbosity flag is given.
pub const LOG_MODE_ENV: &str = "REALPATH_LOG_MODE";

/// Logging level for controlling stderr verbosity.
///
/// Levels are ordered from least verbose (`Quiet`) to most verbose
/// (`Verbose`).
///
/// ```
/// use realpath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress warnings and errors from the logger.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including resolution traces.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        };
        f.write_str(name)
    }
}

impl LogLevel {
    /// Parses a log level name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not one of `quiet`, `normal` or
    /// `verbose`.
    ///
    /// ```
    /// use realpath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A stderr logger filtered by [`LogLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger at the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether messages at `level` would be written.
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Quiet && self.level >= level
    }

    /// Logs a warning message (Normal and above).
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Normal, "WARN", message);
    }

    /// Logs an informational message (Verbose only).
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Verbose, "INFO", message);
    }

    /// Logs a debug message (Verbose only).
    ///
    /// ```
    /// use realpath::{Logger, LogLevel};
    ///
    /// let logger = Logger::new(LogLevel::Verbose);
    /// logger.debug("resolving ./src");
    /// ```
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Verbose, "DEBUG", message);
    }

    fn emit(&self, level: LogLevel, tag: &str, message: &str) {
        if self.enabled(level) {
            eprintln!("{tag}: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Builds a logger from the CLI flags and the environment.
///
/// Precedence: `verbose`, then `quiet`, then [`LOG_MODE_ENV`], then
/// `Normal`. An unparseable environment value is ignored with a warning.
///
/// ```
/// use realpath::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    let Ok(value) = env::var(LOG_MODE_ENV) else {
        return Logger::default();
    };
    match LogLevel::parse(&value) {
        Ok(level) => Logger::new(level),
        Err(e) => {
            let logger = Logger::default();
            logger.warn(&format!("ignoring {LOG_MODE_ENV}: {e}"));
            logger
        }
    }
}
