//! Command that resolves a path and prints it.

use crate::error::CliError;
use crate::utils::{write_resolved, GlobalOptions};
use clap::Args;
use realpath::PathResolver;
use std::ffi::OsString;
use std::io::Write;

/// Resolve PATH and print its canonical absolute form.
#[derive(Args, Debug)]
pub struct ResolveCommand {
    /// Path to resolve; only the program's own flags are reserved
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub paths: Vec<OsString>,
}

impl ResolveCommand {
    /// Resolve the path and write it, newline-terminated, to `out`.
    ///
    /// Argument count is checked by the resolver, so a missing or extra
    /// argument fails before the filesystem is touched and nothing is
    /// written.
    pub fn execute<W: Write>(self, global: &GlobalOptions, out: &mut W) -> Result<(), CliError> {
        let resolver = PathResolver::new().with_logger(global.logger);
        let resolved = resolver.resolve_args(&self.paths)?;

        global
            .logger
            .info(&format!("{} -> {resolved}", resolved.original().display()));
        write_resolved(out, &resolved)?;
        Ok(())
    }
}
