//! CLI structure and argument definitions.
//!
//! `realpath` has no subcommands: the global flags and the single
//! resolution command are parsed together.

use crate::commands::ResolveCommand;
use clap::Parser;

/// Print the canonical absolute form of a filesystem path.
#[derive(Parser, Debug)]
#[command(name = "realpath")]
#[command(version, about = "Print the canonical absolute form of a path", long_about = None)]
#[command(override_usage = "realpath [OPTIONS] PATH")]
pub struct Cli {
    /// Trace resolution steps on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential stderr output
    #[arg(long)]
    pub quiet: bool,

    #[command(flatten)]
    pub resolve: ResolveCommand,
}
