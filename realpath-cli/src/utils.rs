//! Utility functions shared by the entry point and commands.

use realpath::{Logger, ResolvedPath};
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::Path;

/// Name used when `argv[0]` is missing or has no file name.
pub const DEFAULT_PROGRAM_NAME: &str = "realpath";

/// Options shared across the invocation.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Program name used in usage and diagnostic messages.
    pub program: String,

    /// Logger built from `--verbose`, `--quiet` and the environment.
    pub logger: Logger,
}

/// Derive the program name from `argv[0]`, keeping only its last component.
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .map_or_else(
            || DEFAULT_PROGRAM_NAME.to_string(),
            |name| name.to_string_lossy().into_owned(),
        )
}

/// Write a resolved path followed by a newline and flush.
pub fn write_resolved<W: Write>(out: &mut W, resolved: &ResolvedPath) -> io::Result<()> {
    out.write_all(&resolved.to_output_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}
